use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use dietwatch_core::domain::diet_plan::{entities::PlanDocument, ports::DietPlanService};

#[utoipa::path(
    get,
    path = "/diet-plan",
    tag = "diet-plan",
    summary = "Get the full diet plan",
    description = "Return the whole diet-plan document, including any annotations",
    responses(
        (status = 200, body = PlanDocument)
    )
)]
pub async fn get_diet_plan(State(state): State<AppState>) -> Result<Response<PlanDocument>, ApiError> {
    let document = state.service.get_plan().await.map_err(ApiError::from)?;

    Ok(Response::OK(document))
}
