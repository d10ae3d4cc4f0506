//! Meal plan derivation
//!
//! A meal plan is the fixed base catalog with every item's calories scaled
//! by `goal factor * activity factor`. Macros (protein, carbs, fat) are
//! carried over untouched; only calories move.

use crate::catalog::{MealTemplate, BASE_MEALS};
use crate::models::{ActivityLevel, Goal, MealItem, MealPlan, UserProfile};

impl Goal {
    /// Calorie factor for meal portions. Unrecognized goals stay neutral.
    pub fn calorie_factor(&self) -> f64 {
        match self {
            Goal::WeightLoss => 0.8,
            Goal::MuscleGain => 1.3,
            Goal::Maintenance => 1.0,
            Goal::Endurance => 1.2,
            Goal::Unrecognized(_) => 1.0,
        }
    }
}

impl ActivityLevel {
    /// Calorie factor for meal portions. Unrecognized levels stay neutral.
    pub fn calorie_factor(&self) -> f64 {
        match self {
            ActivityLevel::Beginner => 0.9,
            ActivityLevel::Intermediate => 1.0,
            ActivityLevel::Advanced => 1.2,
            ActivityLevel::Unrecognized(_) => 1.0,
        }
    }
}

/// Combined portion multiplier. Goal first, then activity, so the float
/// product is stable across callers.
pub fn calorie_multiplier(goal: &Goal, activity_level: &ActivityLevel) -> f64 {
    goal.calorie_factor() * activity_level.calorie_factor()
}

/// Scale a non-negative amount and round half away from zero
pub(crate) fn scale(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor).round() as u32
}

/// Derive the meal plan for a goal and activity level.
///
/// Never fails: unknown inputs fall back to a neutral multiplier and are
/// echoed into the plan id as given.
pub fn derive_meal_plan(goal: &Goal, activity_level: &ActivityLevel) -> MealPlan {
    let multiplier = calorie_multiplier(goal, activity_level);
    let adjust = |templates: &[MealTemplate]| -> Vec<MealItem> {
        templates
            .iter()
            .map(|template| MealItem {
                calories: scale(template.calories, multiplier),
                ..template.to_item()
            })
            .collect()
    };

    MealPlan {
        id: format!("{}-{}", goal, activity_level),
        goal: goal.clone(),
        activity_level: activity_level.clone(),
        breakfast: adjust(BASE_MEALS.breakfast),
        lunch: adjust(BASE_MEALS.lunch),
        dinner: adjust(BASE_MEALS.dinner),
        snacks: None,
    }
}

pub fn derive_meal_plan_for(profile: &UserProfile) -> MealPlan {
    derive_meal_plan(&profile.goal, &profile.activity_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn base_items() -> Vec<MealItem> {
        BASE_MEALS
            .breakfast
            .iter()
            .chain(BASE_MEALS.lunch)
            .chain(BASE_MEALS.dinner)
            .map(MealTemplate::to_item)
            .collect()
    }

    #[test]
    fn test_weight_loss_beginner_oats() {
        let plan = derive_meal_plan(&Goal::WeightLoss, &ActivityLevel::Beginner);
        assert_eq!(plan.id, "weight-loss-beginner");
        let oats = &plan.breakfast[0];
        assert_eq!(oats.name, "Oats with banana and almonds");
        // round(180 * 0.8 * 0.9) = round(129.6)
        assert_eq!(oats.calories, 130);
    }

    #[rstest]
    #[case(Goal::WeightLoss, ActivityLevel::Beginner, [130, 18, 58])]
    #[case(Goal::Maintenance, ActivityLevel::Intermediate, [180, 25, 80])]
    #[case(Goal::MuscleGain, ActivityLevel::Advanced, [281, 39, 125])]
    #[case(Goal::Endurance, ActivityLevel::Beginner, [194, 27, 86])]
    fn test_breakfast_calories(
        #[case] goal: Goal,
        #[case] level: ActivityLevel,
        #[case] expected: [u32; 3],
    ) {
        let plan = derive_meal_plan(&goal, &level);
        let calories: Vec<u32> = plan.breakfast.iter().map(|item| item.calories).collect();
        assert_eq!(calories, expected);
    }

    #[test]
    fn test_every_combination_scales_calories_only() {
        let base = base_items();
        for goal in Goal::ALL {
            for level in ActivityLevel::ALL {
                let plan = derive_meal_plan(&goal, &level);
                let multiplier = goal.calorie_factor() * level.calorie_factor();
                assert_eq!(plan.id, format!("{}-{}", goal.as_str(), level.as_str()));

                for (derived, template) in plan.items().zip(&base) {
                    assert_eq!(derived.id, template.id);
                    assert_eq!(derived.name, template.name);
                    assert_eq!(derived.quantity, template.quantity);
                    assert_eq!(derived.protein, template.protein);
                    assert_eq!(derived.carbs, template.carbs);
                    assert_eq!(derived.fat, template.fat);
                    assert_eq!(
                        derived.calories,
                        (f64::from(template.calories) * multiplier).round() as u32
                    );
                }
            }
        }
    }

    #[test]
    fn test_unrecognized_inputs_use_neutral_multiplier() {
        let goal = Goal::parse("bulking");
        let level = ActivityLevel::parse("elite");
        let plan = derive_meal_plan(&goal, &level);

        assert_eq!(plan.id, "bulking-elite");
        let base = base_items();
        for (derived, template) in plan.items().zip(&base) {
            assert_eq!(derived.calories, template.calories);
        }
    }

    #[test]
    fn test_plan_never_derives_snacks() {
        let plan = derive_meal_plan(&Goal::Endurance, &ActivityLevel::Advanced);
        assert!(plan.snacks.is_none());
        assert_eq!(plan.items().count(), 9);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_unknown_goal_matches_maintenance(raw in "[a-z]{3,12}") {
            prop_assume!(!Goal::parse(&raw).is_recognized());
            let unknown = derive_meal_plan(&Goal::parse(&raw), &ActivityLevel::Intermediate);
            let maintenance = derive_meal_plan(&Goal::Maintenance, &ActivityLevel::Intermediate);
            prop_assert_eq!(unknown.total_calories(), maintenance.total_calories());
        }

        #[test]
        fn prop_scale_is_monotonic(value in 0u32..5000, factor in 0.5f64..2.0) {
            prop_assert!(scale(value, factor) <= scale(value + 1, factor));
        }
    }
}
