use crate::domain::{
    allergy::entities::{AllergyMatch, AllergyRecord, AllergySummary, Severity},
    diet_plan::entities::{Meal, PlanDocument},
};

/// Sentinel label for items that matched no allergy record.
pub const NONE_LABEL: &str = "NONE";

pub const EMERGENCY_INSTRUCTIONS: &str =
    "If accidental exposure occurs, seek immediate medical attention";

/// Dishes that commonly contain shellfish without naming it.
const SHELLFISH_KEYWORDS: [&str; 4] = ["seafood", "chowder", "paella", "bouillabaisse"];

/// Classify one food name against the allergy list. Records are scanned in
/// input order and the first hit wins; there is no aggregation across
/// multiple matching allergens.
pub fn classify_food(food_name: &str, allergies: &[AllergyRecord]) -> Option<AllergyMatch> {
    let food_lower = food_name.to_lowercase();

    for allergy in allergies {
        let allergen = allergy.name.to_lowercase();

        // Direct mention of the allergen in the food name.
        if food_lower.contains(&allergen) {
            return Some(AllergyMatch {
                allergen: allergy.name.clone(),
                severity: allergy.severity.to_uppercase(),
            });
        }

        // Cross-contamination heuristics for shellfish-heavy dishes.
        if allergen == "shellfish" && SHELLFISH_KEYWORDS.iter().any(|kw| food_lower.contains(kw)) {
            return Some(AllergyMatch {
                allergen: allergy.name.clone(),
                severity: allergy.severity.to_uppercase(),
            });
        }
    }

    None
}

/// Annotate every item of a meal in place and set or clear the meal-level
/// warning. Formatting fields are overwritten on every call; only the current
/// allergy list counts. A meal without items is skipped.
pub fn annotate_meal(meal: &mut Meal, allergies: &[AllergyRecord]) {
    let Some(items) = meal.items.as_mut() else {
        return;
    };

    let mut severe_allergens: Vec<String> = Vec::new();

    for item in items.iter_mut() {
        let matched = classify_food(&item.food, allergies);

        item.allergy_alert = Some(
            matched
                .as_ref()
                .map(|m| m.severity.clone())
                .unwrap_or_else(|| NONE_LABEL.to_string()),
        );

        item.allergy_notes = matched.as_ref().filter(|m| m.is_severe()).map(|m| {
            format!(
                "CONTAINS {} - DO NOT CONSUME. Replace with alternative.",
                m.allergen.to_uppercase()
            )
        });

        if let Some(matched) = matched.filter(|m| m.is_severe())
            && !severe_allergens.contains(&matched.allergen)
        {
            severe_allergens.push(matched.allergen);
        }
    }

    meal.allergy_warning = if severe_allergens.is_empty() {
        None
    } else {
        Some(format!(
            "SEVERE ALLERGY ALERT: This meal contains {}. Replace with alternative.",
            severe_allergens.join(", ")
        ))
    };
}

/// Partition the allergy list into the plan-level severity roster. Tiers
/// beyond Severe and Moderate are dropped.
pub fn summarize_allergies(allergies: &[AllergyRecord]) -> AllergySummary {
    AllergySummary {
        severe_allergens: allergies
            .iter()
            .filter(|a| a.tier() == Some(Severity::Severe))
            .map(|a| a.name.clone())
            .collect(),
        moderate_allergens: allergies
            .iter()
            .filter(|a| a.tier() == Some(Severity::Moderate))
            .map(|a| a.name.clone())
            .collect(),
        emergency_instructions: EMERGENCY_INSTRUCTIONS.to_string(),
    }
}

/// Single-pass annotation of a whole document: every day, every meal, every
/// item, then the plan-level summary at the root. Missing structure is
/// skipped rather than reported; the summary is attached regardless.
pub fn annotate_document(document: &mut PlanDocument, allergies: &[AllergyRecord]) {
    if let Some(days) = document.diet_plan.weekly_plan.as_mut() {
        for day in days {
            if let Some(meals) = day.meals.as_mut() {
                for meal in meals.values_mut() {
                    annotate_meal(meal, allergies);
                }
            }
        }
    }

    document.diet_plan.allergy_alerts = Some(summarize_allergies(allergies));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diet_plan::entities::{Day, DietPlan, FoodItem};
    use indexmap::IndexMap;

    fn record(name: &str, severity: &str) -> AllergyRecord {
        AllergyRecord {
            record_type: "Food".to_string(),
            name: name.to_string(),
            severity: severity.to_string(),
            reaction: "Anaphylaxis".to_string(),
        }
    }

    fn item(food: &str) -> FoodItem {
        FoodItem {
            food: food.to_string(),
            ..Default::default()
        }
    }

    fn meal(foods: &[&str]) -> Meal {
        Meal {
            items: Some(foods.iter().map(|f| item(f)).collect()),
            ..Default::default()
        }
    }

    fn document_with_meal(meal_name: &str, meal: Meal) -> PlanDocument {
        let mut meals = IndexMap::new();
        meals.insert(meal_name.to_string(), meal);
        PlanDocument {
            diet_plan: DietPlan {
                weekly_plan: Some(vec![Day {
                    day: 1,
                    meals: Some(meals),
                    ..Default::default()
                }]),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn classify_matches_allergen_substring_case_insensitively() {
        let allergies = vec![record("Shrimp", "Moderate")];
        let matched = classify_food("Grilled SHRIMP skewers", &allergies).unwrap();

        assert_eq!(matched.allergen, "Shrimp");
        assert_eq!(matched.severity, "MODERATE");
    }

    #[test]
    fn classify_returns_none_without_a_match() {
        let allergies = vec![record("Shellfish", "Severe"), record("Peanut", "Mild")];
        assert_eq!(classify_food("Garden Salad", &allergies), None);
    }

    #[test]
    fn classify_flags_shellfish_adjacent_dishes() {
        let allergies = vec![record("Shellfish", "Severe")];
        let matched = classify_food("Seafood Chowder", &allergies).unwrap();

        assert_eq!(matched.allergen, "Shellfish");
        assert_eq!(matched.severity, "SEVERE");
    }

    #[test]
    fn classify_shellfish_keywords_use_the_record_severity() {
        let allergies = vec![record("Shellfish", "Moderate")];
        let matched = classify_food("Paella Valenciana", &allergies).unwrap();

        assert_eq!(matched.severity, "MODERATE");
    }

    #[test]
    fn classify_first_matching_record_wins() {
        let allergies = vec![record("Peanut", "Mild"), record("Milk", "Severe")];
        let matched = classify_food("Peanut milk shake", &allergies).unwrap();

        assert_eq!(matched.allergen, "Peanut");
        assert_eq!(matched.severity, "MILD");
    }

    #[test]
    fn annotate_meal_labels_every_item() {
        let allergies = vec![record("Shellfish", "Severe")];
        let mut meal = meal(&["Seafood Chowder", "Garden Salad"]);

        annotate_meal(&mut meal, &allergies);

        let items = meal.items.as_ref().unwrap();
        assert_eq!(items[0].allergy_alert.as_deref(), Some("SEVERE"));
        assert_eq!(items[1].allergy_alert.as_deref(), Some("NONE"));
        assert!(items[1].allergy_notes.is_none());
    }

    #[test]
    fn meal_warning_names_the_allergen_that_matched() {
        // "Sulfa drugs" sits first in the list; the warning must still name
        // Shellfish because that is what triggered the alert.
        let allergies = vec![record("Sulfa drugs", "Moderate"), record("Shellfish", "Severe")];
        let mut meal = meal(&["Seafood Chowder"]);

        annotate_meal(&mut meal, &allergies);

        let warning = meal.allergy_warning.unwrap();
        assert!(warning.contains("Shellfish"), "warning was: {warning}");
        assert!(!warning.contains("Sulfa drugs"));

        let items = meal.items.as_ref().unwrap();
        assert_eq!(
            items[0].allergy_notes.as_deref(),
            Some("CONTAINS SHELLFISH - DO NOT CONSUME. Replace with alternative.")
        );
    }

    #[test]
    fn moderate_matches_do_not_raise_a_meal_warning() {
        let allergies = vec![record("Shrimp", "Moderate")];
        let mut meal = meal(&["Shrimp fried rice"]);

        annotate_meal(&mut meal, &allergies);

        assert!(meal.allergy_warning.is_none());
        let items = meal.items.as_ref().unwrap();
        assert_eq!(items[0].allergy_alert.as_deref(), Some("MODERATE"));
    }

    #[test]
    fn reannotation_clears_stale_notes_and_warnings() {
        let severe = vec![record("Shellfish", "Severe")];
        let mut meal = meal(&["Seafood Chowder"]);

        annotate_meal(&mut meal, &severe);
        assert!(meal.allergy_warning.is_some());

        annotate_meal(&mut meal, &[]);

        assert!(meal.allergy_warning.is_none());
        let items = meal.items.as_ref().unwrap();
        assert_eq!(items[0].allergy_alert.as_deref(), Some("NONE"));
        assert!(items[0].allergy_notes.is_none());
    }

    #[test]
    fn summary_partitions_records_by_tier() {
        let allergies = vec![record("Shellfish", "Severe"), record("Sulfa drugs", "Moderate")];
        let summary = summarize_allergies(&allergies);

        assert_eq!(summary.severe_allergens, vec!["Shellfish"]);
        assert_eq!(summary.moderate_allergens, vec!["Sulfa drugs"]);
        assert_eq!(summary.emergency_instructions, EMERGENCY_INSTRUCTIONS);
    }

    #[test]
    fn summary_drops_tiers_beyond_severe_and_moderate() {
        let allergies = vec![record("Pollen", "Mild"), record("Dust", "unknown")];
        let summary = summarize_allergies(&allergies);

        assert!(summary.severe_allergens.is_empty());
        assert!(summary.moderate_allergens.is_empty());
    }

    #[test]
    fn summary_tier_comparison_is_case_insensitive() {
        let allergies = vec![record("Shellfish", "SEVERE"), record("Soy", "moderate")];
        let summary = summarize_allergies(&allergies);

        assert_eq!(summary.severe_allergens, vec!["Shellfish"]);
        assert_eq!(summary.moderate_allergens, vec!["Soy"]);
    }

    #[test]
    fn document_without_weekly_plan_only_gains_a_summary() {
        let mut document = PlanDocument::default();
        let allergies = vec![record("Shellfish", "Severe")];

        annotate_document(&mut document, &allergies);

        assert!(document.diet_plan.weekly_plan.is_none());
        let summary = document.diet_plan.allergy_alerts.unwrap();
        assert_eq!(summary.severe_allergens, vec!["Shellfish"]);
    }

    #[test]
    fn annotation_is_idempotent_on_labels() {
        let allergies = vec![record("Shellfish", "Severe"), record("Sulfa drugs", "Moderate")];
        let mut document = document_with_meal("lunch", meal(&["Seafood Chowder", "Rice"]));

        annotate_document(&mut document, &allergies);
        let first = serde_json::to_value(&document).unwrap();

        annotate_document(&mut document, &allergies);
        let second = serde_json::to_value(&document).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn meals_without_items_are_skipped() {
        let mut document = document_with_meal("breakfast", Meal::default());
        annotate_document(&mut document, &[record("Shellfish", "Severe")]);

        let day = &document.diet_plan.weekly_plan.as_ref().unwrap()[0];
        let meal = &day.meals.as_ref().unwrap()["breakfast"];
        assert!(meal.items.is_none());
        assert!(meal.allergy_warning.is_none());
    }
}
