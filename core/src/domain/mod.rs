pub mod allergy;
pub mod common;
pub mod diet_plan;
pub mod text_processing;
