use axum::extract::{Path, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use dietwatch_core::domain::diet_plan::{entities::Day, ports::DietPlanService};

#[utoipa::path(
    get,
    path = "/diet-plan/daily/{day}",
    tag = "diet-plan",
    summary = "Get one day of the diet plan",
    params(
        ("day" = i64, Path, description = "Day number within the weekly plan"),
    ),
    responses(
        (status = 200, body = Day),
        (status = 404, description = "Day not found")
    )
)]
pub async fn get_daily_plan(
    Path(day): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<Day>, ApiError> {
    let daily = state
        .service
        .get_daily_plan(day)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(daily))
}
