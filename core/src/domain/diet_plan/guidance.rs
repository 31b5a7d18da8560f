use crate::domain::diet_plan::entities::{
    AgeGroup, DietPlan, DietaryPreference, HealthCondition, MealPlan,
};

pub const DIETITIAN_NOTE: &str = "These recommendations are general guidelines. Individual nutritional needs vary based on many factors. Consider consulting with a registered dietitian for personalized advice, especially if you have specific health conditions or dietary requirements.";

struct PreferenceGuidance {
    diet_type: &'static str,
    include: &'static [&'static str],
    limit: &'static [&'static str],
    meals: [&'static str; 4],
}

struct ConditionGuidance {
    note: &'static str,
    limit: &'static [&'static str],
}

fn preference_guidance(preference: DietaryPreference) -> PreferenceGuidance {
    match preference {
        DietaryPreference::Vegetarian => PreferenceGuidance {
            diet_type: "Plant-based diet with dairy and eggs, rich in whole foods.",
            include: &[
                "Variety of colorful vegetables",
                "Whole grains (quinoa, brown rice, oats)",
                "Legumes (beans, lentils, chickpeas)",
                "Nuts and seeds",
                "Eggs and dairy products",
                "Plant-based proteins",
            ],
            limit: &[
                "Processed meat alternatives",
                "Excessive dairy",
                "Refined carbohydrates",
                "Added sugars",
                "High-sodium foods",
            ],
            meals: [
                "Greek yogurt with berries, nuts, and a drizzle of honey. Whole grain toast.",
                "Quinoa bowl with roasted vegetables, chickpeas, feta cheese, and tahini dressing.",
                "Vegetable stir-fry with tofu, brown rice, and a ginger-soy sauce.",
                "Apple slices with almond butter, or Greek yogurt with honey.",
            ],
        },
        DietaryPreference::Vegan => PreferenceGuidance {
            diet_type: "Plant-based diet with emphasis on diverse protein sources like legumes, tofu, and tempeh.",
            include: &[
                "Wide variety of fruits and vegetables",
                "Legumes and pulses",
                "Tofu, tempeh, and seitan",
                "Nutritional yeast",
                "Plant-based milk alternatives",
                "Whole grains",
                "Nuts and seeds",
            ],
            limit: &[
                "Processed vegan foods",
                "Refined carbohydrates",
                "Added sugars",
                "Excessive salt",
                "Fried foods",
            ],
            meals: [
                "Overnight oats with plant milk, chia seeds, and fresh fruit. Sprinkle of nuts.",
                "Buddha bowl with brown rice, roasted sweet potatoes, avocado, edamame, and tahini sauce.",
                "Lentil curry with coconut milk, served with brown rice and steamed broccoli.",
                "Hummus with vegetable sticks, or a small handful of mixed nuts.",
            ],
        },
        DietaryPreference::Omnivore => PreferenceGuidance {
            diet_type: "Balanced diet with lean proteins, whole grains, and plenty of fruits and vegetables.",
            include: &[
                "Lean meats and poultry",
                "Fish and seafood",
                "Eggs and dairy",
                "Whole grains",
                "Variety of fruits and vegetables",
                "Legumes and beans",
                "Healthy fats (olive oil, avocados)",
            ],
            limit: &[
                "Processed meats",
                "Refined grains",
                "Added sugars",
                "Excessive sodium",
                "Trans fats",
                "Sugary beverages",
            ],
            meals: [
                "Scrambled eggs with vegetables, whole grain toast, and a side of fruit.",
                "Grilled chicken salad with mixed greens, vegetables, and olive oil vinaigrette.",
                "Baked salmon with roasted vegetables and quinoa.",
                "Hard-boiled egg, or apple with nut butter.",
            ],
        },
        DietaryPreference::Pescatarian => PreferenceGuidance {
            diet_type: "Plant-focused diet with fish and seafood as primary protein sources.",
            include: &[
                "Various fish and seafood",
                "Eggs and dairy (optional)",
                "Plant proteins (legumes, tofu)",
                "Whole grains",
                "Nuts and seeds",
                "Abundant fruits and vegetables",
            ],
            limit: &[
                "High-mercury fish",
                "Processed seafood",
                "Refined grains",
                "Added sugars",
                "Excessive sodium",
            ],
            meals: [
                "Avocado toast with scrambled eggs and a side of fresh berries.",
                "Tuna salad with mixed greens, olive oil dressing, and a side of quinoa.",
                "Grilled fish with roasted vegetables and wild rice.",
                "Trail mix with nuts and seeds, or hummus with vegetable sticks.",
            ],
        },
        DietaryPreference::Keto => PreferenceGuidance {
            diet_type: "Low-carb, high-fat diet with moderate protein intake.",
            include: &[
                "Healthy fats (avocados, olive oil, nuts)",
                "Non-starchy vegetables",
                "Moderate protein sources",
                "Limited berries",
                "Full-fat dairy",
                "Eggs and meat (if not vegetarian)",
            ],
            limit: &[
                "Grains and starches",
                "Most fruits",
                "Root vegetables",
                "Legumes",
                "Added sugars",
                "Low-fat products",
            ],
            meals: [
                "Avocado and eggs with a side of sautéed spinach.",
                "Large salad with grilled chicken, avocado, cheese, and olive oil dressing.",
                "Baked salmon with asparagus sautéed in butter and garlic.",
                "Cheese cubes, olives, or a small handful of mixed nuts.",
            ],
        },
    }
}

fn condition_guidance(condition: HealthCondition) -> Option<ConditionGuidance> {
    match condition {
        HealthCondition::Diabetes => Some(ConditionGuidance {
            note: "With diabetes, focus on low glycemic index foods and consistent meal timing.",
            limit: &["High-sugar foods and beverages", "Refined carbohydrates"],
        }),
        HealthCondition::Hypertension => Some(ConditionGuidance {
            note: "For hypertension, limit sodium and focus on potassium-rich foods.",
            limit: &["High-sodium processed foods", "Canned soups and sauces"],
        }),
        HealthCondition::HeartDisease => Some(ConditionGuidance {
            note: "With heart disease concerns, emphasize heart-healthy fats and fiber.",
            limit: &["Trans fats and saturated fats", "High-cholesterol foods"],
        }),
        HealthCondition::None | HealthCondition::DigestiveIssues | HealthCondition::Allergies => {
            None
        }
    }
}

/// Assembles the diet plan for one combination of answers. Condition-specific
/// limits follow the preference limits; a limit already listed is not
/// repeated.
pub fn build_diet_plan(
    preference: DietaryPreference,
    health_condition: HealthCondition,
    age_group: AgeGroup,
) -> DietPlan {
    let guidance = preference_guidance(preference);
    let condition = condition_guidance(health_condition);

    let mut foods_to_limit: Vec<String> = guidance.limit.iter().map(|s| s.to_string()).collect();
    if let Some(condition) = &condition {
        for item in condition.limit {
            if !foods_to_limit.iter().any(|existing| existing == item) {
                foods_to_limit.push(item.to_string());
            }
        }
    }

    let [breakfast, lunch, dinner, snacks] = guidance.meals;

    DietPlan {
        preference,
        health_condition,
        age_group,
        diet_type: guidance.diet_type.to_string(),
        condition_note: condition.map(|c| c.note.to_string()),
        foods_to_include: guidance.include.iter().map(|s| s.to_string()).collect(),
        foods_to_limit,
        meal_plan: MealPlan {
            breakfast: breakfast.to_string(),
            lunch: lunch.to_string(),
            dinner: dinner.to_string(),
            snacks: snacks.to_string(),
        },
        note: DIETITIAN_NOTE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vegan_plan_without_condition() {
        let plan = build_diet_plan(DietaryPreference::Vegan, HealthCondition::None, AgeGroup::Adult);
        assert!(plan.condition_note.is_none());
        assert_eq!(plan.foods_to_include.len(), 7);
        assert_eq!(plan.foods_to_limit.len(), 5);
        assert!(plan.meal_plan.dinner.starts_with("Lentil curry"));
    }

    #[test]
    fn test_condition_limits_are_appended() {
        let plan = build_diet_plan(
            DietaryPreference::Omnivore,
            HealthCondition::Hypertension,
            AgeGroup::Senior,
        );
        assert_eq!(
            plan.condition_note.as_deref(),
            Some("For hypertension, limit sodium and focus on potassium-rich foods.")
        );
        assert_eq!(
            &plan.foods_to_limit[plan.foods_to_limit.len() - 2..],
            &["High-sodium processed foods", "Canned soups and sauces"]
        );
    }

    #[test]
    fn test_shared_limit_not_repeated() {
        let plan = build_diet_plan(
            DietaryPreference::Vegan,
            HealthCondition::Diabetes,
            AgeGroup::Teen,
        );
        let refined = plan
            .foods_to_limit
            .iter()
            .filter(|item| item.as_str() == "Refined carbohydrates")
            .count();
        assert_eq!(refined, 1);
        assert!(plan.foods_to_limit.contains(&"High-sugar foods and beverages".to_string()));
    }

    #[test]
    fn test_every_combination_is_complete() {
        for preference in DietaryPreference::ALL {
            for condition in HealthCondition::ALL {
                let plan = build_diet_plan(preference, condition, AgeGroup::YoungAdult);
                assert!(!plan.diet_type.is_empty());
                assert!(!plan.foods_to_include.is_empty());
                assert!(!plan.meal_plan.snacks.is_empty());
            }
        }
    }
}
