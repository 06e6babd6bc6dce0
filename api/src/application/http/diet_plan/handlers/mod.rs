pub mod annotate_diet_plan;
pub mod generate_diet_plan;
pub mod get_allergy_info;
pub mod get_daily_plan;
pub mod get_diet_plan;
pub mod get_meal;
