use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::allergy::entities::AllergySummary;

/// Wire format of the diet-plan document: the plan itself nests under a
/// `dietPlan` key. Unknown fields at any level are preserved through the
/// flattened maps, and absent optional fields stay absent on
/// re-serialization, so untouched branches round-trip unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanDocument {
    #[serde(rename = "dietPlan")]
    pub diet_plan: DietPlan,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietPlan {
    #[serde(rename = "weeklyPlan", default, skip_serializing_if = "Option::is_none")]
    pub weekly_plan: Option<Vec<Day>>,
    #[serde(rename = "allergyWarning", default, skip_serializing_if = "Option::is_none")]
    pub allergy_warning: Option<String>,
    /// Plan-level summary, overwritten on every annotation run.
    #[serde(rename = "allergyAlerts", default, skip_serializing_if = "Option::is_none")]
    pub allergy_alerts: Option<AllergySummary>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Day {
    pub day: i64,
    /// Meal name to meal, in document order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meals: Option<IndexMap<String, Meal>>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<FoodItem>>,
    #[serde(rename = "allergyWarning", default, skip_serializing_if = "Option::is_none")]
    pub allergy_warning: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub food: String,
    /// Severity label or "NONE" once annotated.
    #[serde(rename = "allergyAlert", default, skip_serializing_if = "Option::is_none")]
    pub allergy_alert: Option<String>,
    #[serde(rename = "allergyNotes", default, skip_serializing_if = "Option::is_none")]
    pub allergy_notes: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let raw = json!({
            "dietPlan": {
                "patientName": "Cedric",
                "weeklyPlan": [{
                    "day": 1,
                    "notes": "hydration day",
                    "meals": {
                        "breakfast": {
                            "time": "08:00",
                            "items": [{"food": "Oatmeal", "calories": 320}]
                        }
                    }
                }]
            },
            "generatedBy": "cedric"
        });

        let document: PlanDocument = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&document).unwrap(), raw);
    }

    #[test]
    fn absent_optional_structure_stays_absent() {
        let raw = json!({"dietPlan": {"goal": "maintenance"}});
        let document: PlanDocument = serde_json::from_value(raw.clone()).unwrap();

        assert!(document.diet_plan.weekly_plan.is_none());
        assert_eq!(serde_json::to_value(&document).unwrap(), raw);
    }

    #[test]
    fn meal_order_is_preserved() {
        // Deserialized from the document text; a detour through
        // serde_json::Value would sort the keys before the map is built.
        let raw = r#"{
            "dietPlan": {
                "weeklyPlan": [{
                    "day": 1,
                    "meals": {
                        "breakfast": {"items": []},
                        "lunch": {"items": []},
                        "dinner": {"items": []}
                    }
                }]
            }
        }"#;

        let document: PlanDocument = serde_json::from_str(raw).unwrap();
        let day = &document.diet_plan.weekly_plan.unwrap()[0];
        let names: Vec<&String> = day.meals.as_ref().unwrap().keys().collect();
        assert_eq!(names, ["breakfast", "lunch", "dinner"]);
    }
}
