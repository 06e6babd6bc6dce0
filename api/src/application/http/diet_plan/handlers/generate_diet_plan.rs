use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use dietwatch_core::domain::{
    allergy::entities::AllergyRecord,
    diet_plan::entities::PlanDocument,
    text_processing::{
        ports::TextProcessingService,
        value_objects::{GeneratePlanInput, GeneratedPlan},
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateDietPlanRequest {
    pub prompt: String,
    #[serde(default)]
    pub allergies: Vec<AllergyRecord>,
    /// Extra parameters forwarded to the text-processing API.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerateDietPlanResponse {
    /// The generated text parsed as a document; it has been annotated and
    /// persisted.
    Structured { plan: PlanDocument },
    /// The generated text was not valid JSON and was stored as-is.
    RawText { text: String },
}

impl From<GeneratedPlan> for GenerateDietPlanResponse {
    fn from(generated: GeneratedPlan) -> Self {
        match generated {
            GeneratedPlan::Structured(plan) => Self::Structured { plan },
            GeneratedPlan::RawText(text) => Self::RawText { text },
        }
    }
}

#[utoipa::path(
    post,
    path = "/diet-plan/generate",
    tag = "diet-plan",
    summary = "Generate a diet plan through the text-processing API",
    description = "Send the prompt to Cedric, annotate the structured result with the supplied allergies, and persist it; non-JSON responses fall back to raw text",
    request_body = GenerateDietPlanRequest,
    responses(
        (status = 200, body = GenerateDietPlanResponse),
        (status = 500, description = "Processing failed")
    )
)]
pub async fn generate_diet_plan(
    State(state): State<AppState>,
    Json(payload): Json<GenerateDietPlanRequest>,
) -> Result<Response<GenerateDietPlanResponse>, ApiError> {
    let generated = state
        .service
        .generate_plan(GeneratePlanInput {
            prompt: payload.prompt,
            allergies: payload.allergies,
            extra: payload.extra,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateDietPlanResponse::from(generated)))
}
