//! Plan lookup service
//!
//! Lookups hit the seeded [`PlanCatalog`] first. On a miss the service
//! either reports not-found or, with `plans.derive_on_miss`, falls through
//! to the derivation engine so the catalog behaves like a cache in front of
//! it.

use crate::config::PlansConfig;
use crate::error::ApiError;
use crate::repositories::PlanCatalog;
use fitsync_shared::types::ProfilePlansResponse;
use fitsync_shared::{
    derive_meal_plan, derive_meal_plan_for, derive_workout_plan, derive_workout_plan_for,
    ActivityLevel, AppError, Goal, MealPlan, UserProfile, WorkoutPlan, WorkoutType,
};
use tracing::debug;

fn record_lookup(kind: &'static str, source: &'static str) {
    metrics::counter!("plan_lookups_total", "kind" => kind, "source" => source).increment(1);
}

/// Plan lookup and derivation
pub struct PlanService;

impl PlanService {
    /// GET /api/meal-plan/:goal/:activityLevel
    pub fn meal_plan(
        catalog: &PlanCatalog,
        config: &PlansConfig,
        goal: &str,
        activity_level: &str,
    ) -> Result<MealPlan, ApiError> {
        if let Some(plan) = catalog.meal_plan(goal, activity_level) {
            record_lookup("meal", "catalog");
            return Ok(plan.clone());
        }

        if config.derive_on_miss {
            debug!(goal, activity_level, "Meal plan not seeded, deriving");
            record_lookup("meal", "derived");
            return Ok(derive_meal_plan(
                &Goal::parse(goal),
                &ActivityLevel::parse(activity_level),
            ));
        }

        record_lookup("meal", "miss");
        Err(ApiError::NotFound("Meal plan not found".to_string()))
    }

    /// GET /api/workout-plan/:goal/:activityLevel
    ///
    /// `workout_type` is only consulted when deriving; it defaults to home.
    pub fn workout_plan(
        catalog: &PlanCatalog,
        config: &PlansConfig,
        goal: &str,
        activity_level: &str,
        workout_type: Option<&str>,
    ) -> Result<WorkoutPlan, ApiError> {
        if let Some(plan) = catalog.workout_plan(goal, activity_level) {
            record_lookup("workout", "catalog");
            return Ok(plan.clone());
        }

        if config.derive_on_miss {
            let workout_type = match workout_type {
                Some(raw) => raw.parse::<WorkoutType>().map_err(AppError::from)?,
                None => WorkoutType::default(),
            };
            debug!(goal, activity_level, %workout_type, "Workout plan not seeded, deriving");
            record_lookup("workout", "derived");
            return Ok(derive_workout_plan(
                &Goal::parse(goal),
                &ActivityLevel::parse(activity_level),
                workout_type,
            ));
        }

        record_lookup("workout", "miss");
        Err(ApiError::NotFound("Workout plan not found".to_string()))
    }

    /// Both plans for a stored profile, always derived
    pub fn plans_for(profile: &UserProfile) -> ProfilePlansResponse {
        record_lookup("profile", "derived");
        ProfilePlansResponse {
            meal_plan: derive_meal_plan_for(profile),
            workout_plan: derive_workout_plan_for(profile),
        }
    }
}
