use utoipa::OpenApi;

use crate::application::http::{diet_plan::router::DietPlanApiDoc, health::HealthApiDoc};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dietwatch API",
        description = "Diet-plan allergy annotation service",
    ),
    tags(
        (name = "diet-plan", description = "Diet-plan lookups, annotation and generation"),
        (name = "health", description = "Service health"),
    )
)]
struct BaseApiDoc;

pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi() -> utoipa::openapi::OpenApi {
        let mut openapi = BaseApiDoc::openapi();
        openapi.merge(DietPlanApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());
        openapi
    }
}
