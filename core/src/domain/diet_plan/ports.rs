use std::future::Future;

use crate::domain::{
    allergy::entities::AllergyRecord,
    common::entities::app_errors::CoreError,
    diet_plan::{
        entities::{Day, Meal, PlanDocument},
        value_objects::AllergyInfo,
    },
};

/// Storage port for the diet-plan document. Implementations read fresh on
/// every call; the document has no identity beyond its location.
#[cfg_attr(test, mockall::automock)]
pub trait DietPlanRepository: Send + Sync {
    fn load(&self) -> impl Future<Output = Result<PlanDocument, CoreError>> + Send;

    fn save(&self, document: &PlanDocument) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Fallback persistence for generated responses that failed to parse as
    /// a structured document.
    fn save_raw_text(&self, text: &str) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait DietPlanService: Send + Sync {
    fn get_plan(&self) -> impl Future<Output = Result<PlanDocument, CoreError>> + Send;

    fn get_daily_plan(&self, day: i64) -> impl Future<Output = Result<Day, CoreError>> + Send;

    fn get_meal(
        &self,
        day: i64,
        meal_name: &str,
    ) -> impl Future<Output = Result<Meal, CoreError>> + Send;

    fn get_allergy_info(&self) -> impl Future<Output = Result<AllergyInfo, CoreError>> + Send;

    /// Run the annotation engine against the stored document, persist the
    /// result and return it.
    fn annotate_plan(
        &self,
        allergies: Vec<AllergyRecord>,
    ) -> impl Future<Output = Result<PlanDocument, CoreError>> + Send;
}
