use axum::extract::{Path, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use dietwatch_core::domain::diet_plan::{entities::Meal, ports::DietPlanService};

#[utoipa::path(
    get,
    path = "/diet-plan/meal/{day}/{meal_name}",
    tag = "diet-plan",
    summary = "Get one meal from a day's plan",
    params(
        ("day" = i64, Path, description = "Day number within the weekly plan"),
        ("meal_name" = String, Path, description = "Meal name, e.g. breakfast"),
    ),
    responses(
        (status = 200, body = Meal),
        (status = 404, description = "Meal not found")
    )
)]
pub async fn get_meal(
    Path((day, meal_name)): Path<(i64, String)>,
    State(state): State<AppState>,
) -> Result<Response<Meal>, ApiError> {
    let meal = state
        .service
        .get_meal(day, &meal_name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(meal))
}
