use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    text_processing::value_objects::{GeneratePlanInput, GeneratedPlan, ProcessTextInput},
};

/// Outbound client port for the Cedric text-processing API. One request, no
/// retries; failures surface as a single processing error.
#[cfg_attr(test, mockall::automock)]
pub trait TextProcessorClient: Send + Sync {
    fn process_text(
        &self,
        input: ProcessTextInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

pub trait TextProcessingService: Send + Sync {
    fn generate_plan(
        &self,
        input: GeneratePlanInput,
    ) -> impl Future<Output = Result<GeneratedPlan, CoreError>> + Send;
}
