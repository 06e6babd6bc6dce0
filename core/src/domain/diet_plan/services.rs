use crate::domain::{
    allergy::{entities::AllergyRecord, services::annotate_document},
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::{
        entities::{Day, Meal, PlanDocument},
        ports::{DietPlanRepository, DietPlanService},
        value_objects::AllergyInfo,
    },
    text_processing::ports::TextProcessorClient,
};

impl<DP, TP> DietPlanService for Service<DP, TP>
where
    DP: DietPlanRepository,
    TP: TextProcessorClient,
{
    async fn get_plan(&self) -> Result<PlanDocument, CoreError> {
        self.diet_plan_repository.load().await
    }

    async fn get_daily_plan(&self, day: i64) -> Result<Day, CoreError> {
        let document = self.diet_plan_repository.load().await?;

        document
            .diet_plan
            .weekly_plan
            .unwrap_or_default()
            .into_iter()
            .find(|daily| daily.day == day)
            .ok_or(CoreError::DayNotFound(day))
    }

    async fn get_meal(&self, day: i64, meal_name: &str) -> Result<Meal, CoreError> {
        // A missing day on this route reads as a missing meal, so the day
        // lookup error is folded in.
        let mut daily = match self.get_daily_plan(day).await {
            Ok(daily) => daily,
            Err(CoreError::DayNotFound(_)) => {
                return Err(CoreError::MealNotFound {
                    day,
                    meal: meal_name.to_string(),
                });
            }
            Err(err) => return Err(err),
        };

        daily
            .meals
            .as_mut()
            .and_then(|meals| meals.shift_remove(meal_name))
            .ok_or_else(|| CoreError::MealNotFound {
                day,
                meal: meal_name.to_string(),
            })
    }

    async fn get_allergy_info(&self) -> Result<AllergyInfo, CoreError> {
        let document = self.diet_plan_repository.load().await?;

        Ok(AllergyInfo {
            allergy_warning: document.diet_plan.allergy_warning.unwrap_or_default(),
            allergy_alerts: document.diet_plan.allergy_alerts.unwrap_or_default(),
        })
    }

    async fn annotate_plan(&self, allergies: Vec<AllergyRecord>) -> Result<PlanDocument, CoreError> {
        let mut document = self.diet_plan_repository.load().await?;

        annotate_document(&mut document, &allergies);

        self.diet_plan_repository.save(&document).await?;
        tracing::info!("annotated diet plan with {} allergy records", allergies.len());

        Ok(document)
    }
}
