use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use dietwatch_core::domain::diet_plan::{ports::DietPlanService, value_objects::AllergyInfo};

#[utoipa::path(
    get,
    path = "/diet-plan/allergies",
    tag = "diet-plan",
    summary = "Get the plan's allergy information",
    description = "Return the plan-level warning and severity roster; empty defaults when the plan has not been annotated yet",
    responses(
        (status = 200, body = AllergyInfo)
    )
)]
pub async fn get_allergy_info(
    State(state): State<AppState>,
) -> Result<Response<AllergyInfo>, ApiError> {
    let info = state
        .service
        .get_allergy_info()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(info))
}
