//! FitSync WASM Module
//!
//! Browser bindings for the plan derivation engine, so the client derives
//! plans with exactly the same rules as the server.

use fitsync_shared::{ActivityLevel, Goal, WorkoutType};
use wasm_bindgen::prelude::*;

fn meal_plan_json(goal: &str, activity_level: &str) -> Result<String, String> {
    let plan = fitsync_shared::derive_meal_plan(&Goal::parse(goal), &ActivityLevel::parse(activity_level));
    serde_json::to_string(&plan).map_err(|e| e.to_string())
}

fn workout_plan_json(goal: &str, activity_level: &str, workout_type: &str) -> Result<String, String> {
    let workout_type: WorkoutType = workout_type.parse().map_err(|e: fitsync_shared::CatalogError| e.to_string())?;
    let plan = fitsync_shared::derive_workout_plan(
        &Goal::parse(goal),
        &ActivityLevel::parse(activity_level),
        workout_type,
    );
    serde_json::to_string(&plan).map_err(|e| e.to_string())
}

/// Derive a meal plan, returned as JSON
#[wasm_bindgen]
pub fn derive_meal_plan(goal: &str, activity_level: &str) -> Result<String, JsValue> {
    meal_plan_json(goal, activity_level).map_err(|e| JsValue::from_str(&e))
}

/// Derive a workout plan, returned as JSON. Fails on an unknown workout type.
#[wasm_bindgen]
pub fn derive_workout_plan(goal: &str, activity_level: &str, workout_type: &str) -> Result<String, JsValue> {
    workout_plan_json(goal, activity_level, workout_type).map_err(|e| JsValue::from_str(&e))
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    fitsync_shared::calculate_bmi(weight_kg, height_cm)
}

/// Daily calorie target for a goal
#[wasm_bindgen]
pub fn daily_calorie_goal(goal: &str) -> u32 {
    Goal::parse(goal).daily_calorie_target()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn derives_plans_across_the_boundary() {
        let meal = derive_meal_plan("weight-loss", "beginner").unwrap();
        assert!(meal.contains("\"id\":\"weight-loss-beginner\""));

        let workout = derive_workout_plan("muscle-gain", "advanced", "gym").unwrap();
        assert!(workout.contains("\"id\":\"muscle-gain-advanced-gym\""));
    }

    #[wasm_bindgen_test]
    fn unknown_workout_type_becomes_js_error() {
        let err = derive_workout_plan("endurance", "beginner", "pool").unwrap_err();
        assert!(err.as_string().unwrap().contains("pool"));
    }
}
