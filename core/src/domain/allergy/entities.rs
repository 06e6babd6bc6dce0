use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One allergy from the patient health profile. Immutable input to the
/// annotation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AllergyRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    /// Free-text severity, compared case-insensitively against the tier
    /// vocabulary. Unknown values still produce item labels but fall outside
    /// tier-driven logic (warnings, summary grouping).
    pub severity: String,
    pub reaction: String,
}

impl AllergyRecord {
    pub fn tier(&self) -> Option<Severity> {
        Severity::parse(&self.severity)
    }
}

/// Severity tiers, ordered Severe > Moderate > Mild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Severe,
    Moderate,
    Mild,
}

impl Severity {
    /// Case-insensitive parse against the fixed tier vocabulary.
    pub fn parse(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("severe") {
            Some(Self::Severe)
        } else if text.eq_ignore_ascii_case("moderate") {
            Some(Self::Moderate)
        } else if text.eq_ignore_ascii_case("mild") {
            Some(Self::Mild)
        } else {
            None
        }
    }
}

/// Result of classifying one food item against the allergy list. Carries the
/// allergen that actually matched so meal warnings can name it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllergyMatch {
    pub allergen: String,
    /// Uppercased severity label, e.g. "SEVERE".
    pub severity: String,
}

impl AllergyMatch {
    pub fn is_severe(&self) -> bool {
        self.severity == "SEVERE"
    }
}

/// Plan-level summary attached at the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllergySummary {
    pub severe_allergens: Vec<String>,
    pub moderate_allergens: Vec<String>,
    pub emergency_instructions: String,
}
