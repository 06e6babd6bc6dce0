use crate::domain::{
    allergy::services::annotate_document,
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::{entities::PlanDocument, ports::DietPlanRepository},
    text_processing::{
        ports::{TextProcessingService, TextProcessorClient},
        value_objects::{GeneratePlanInput, GeneratedPlan, ProcessTextInput},
    },
};

impl<DP, TP> TextProcessingService for Service<DP, TP>
where
    DP: DietPlanRepository,
    TP: TextProcessorClient,
{
    async fn generate_plan(&self, input: GeneratePlanInput) -> Result<GeneratedPlan, CoreError> {
        let response = self
            .text_processor
            .process_text(ProcessTextInput {
                text: input.prompt,
                extra: input.extra,
            })
            .await?;

        match serde_json::from_str::<PlanDocument>(&response) {
            Ok(mut document) => {
                annotate_document(&mut document, &input.allergies);
                self.diet_plan_repository.save(&document).await?;
                Ok(GeneratedPlan::Structured(document))
            }
            Err(err) => {
                tracing::warn!("generated plan is not valid JSON, storing raw text: {}", err);
                self.diet_plan_repository.save_raw_text(&response).await?;
                Ok(GeneratedPlan::RawText(response))
            }
        }
    }
}
