use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::allergy::entities::AllergySummary;

/// Projection returned by the allergy-info lookup. Missing document fields
/// degrade to empty defaults rather than errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllergyInfo {
    pub allergy_warning: String,
    pub allergy_alerts: AllergySummary,
}
