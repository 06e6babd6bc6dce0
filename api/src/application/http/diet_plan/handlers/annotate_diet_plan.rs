use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use dietwatch_core::domain::{
    allergy::entities::AllergyRecord,
    diet_plan::{entities::PlanDocument, ports::DietPlanService},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnnotateDietPlanRequest {
    pub allergies: Vec<AllergyRecord>,
}

#[utoipa::path(
    post,
    path = "/diet-plan/annotate",
    tag = "diet-plan",
    summary = "Annotate the diet plan with allergy alerts",
    description = "Run the allergy-annotation engine against the stored document, persist the result and return it",
    request_body = AnnotateDietPlanRequest,
    responses(
        (status = 200, body = PlanDocument)
    )
)]
pub async fn annotate_diet_plan(
    State(state): State<AppState>,
    Json(payload): Json<AnnotateDietPlanRequest>,
) -> Result<Response<PlanDocument>, ApiError> {
    let document = state
        .service
        .annotate_plan(payload.allergies)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(document))
}
