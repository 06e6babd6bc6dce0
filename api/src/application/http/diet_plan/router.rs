use super::handlers::{
    annotate_diet_plan::{__path_annotate_diet_plan, annotate_diet_plan},
    generate_diet_plan::{__path_generate_diet_plan, generate_diet_plan},
    get_allergy_info::{__path_get_allergy_info, get_allergy_info},
    get_daily_plan::{__path_get_daily_plan, get_daily_plan},
    get_diet_plan::{__path_get_diet_plan, get_diet_plan},
    get_meal::{__path_get_meal, get_meal},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_diet_plan,
    get_daily_plan,
    get_meal,
    get_allergy_info,
    annotate_diet_plan,
    generate_diet_plan
))]
pub struct DietPlanApiDoc;

pub fn diet_plan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/diet-plan", state.args.server.root_path),
            get(get_diet_plan),
        )
        .route(
            &format!("{}/diet-plan/daily/{{day}}", state.args.server.root_path),
            get(get_daily_plan),
        )
        .route(
            &format!(
                "{}/diet-plan/meal/{{day}}/{{meal_name}}",
                state.args.server.root_path
            ),
            get(get_meal),
        )
        .route(
            &format!("{}/diet-plan/allergies", state.args.server.root_path),
            get(get_allergy_info),
        )
        .route(
            &format!("{}/diet-plan/annotate", state.args.server.root_path),
            post(annotate_diet_plan),
        )
        .route(
            &format!("{}/diet-plan/generate", state.args.server.root_path),
            post(generate_diet_plan),
        )
}
