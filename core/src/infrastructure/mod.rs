pub mod diet_plan;
pub mod text_processing;
