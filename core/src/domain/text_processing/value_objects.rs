use serde_json::{Map, Value};

use crate::domain::{allergy::entities::AllergyRecord, diet_plan::entities::PlanDocument};

#[derive(Debug, Clone, Default)]
pub struct ProcessTextInput {
    pub text: String,
    /// Additional parameters forwarded verbatim in the request payload.
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default)]
pub struct GeneratePlanInput {
    pub prompt: String,
    pub allergies: Vec<AllergyRecord>,
    pub extra: Map<String, Value>,
}

/// Outcome of a generation run. A non-parsable response is a fallback
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedPlan {
    Structured(PlanDocument),
    RawText(String),
}
