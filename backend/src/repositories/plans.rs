//! Precomputed plan lookup table
//!
//! The server answers plan requests from a fixed map keyed by
//! `{goal}-{activityLevel}`. It is seeded once at startup and read-only
//! afterwards.

use chrono::{DateTime, Utc};
use fitsync_shared::catalog::{blog_posts, seeded_meal_plans};
use fitsync_shared::{BlogPost, MealPlan, WorkoutPlan};
use std::collections::HashMap;

/// Immutable plan and content catalog
#[derive(Debug, Clone, Default)]
pub struct PlanCatalog {
    meal_plans: HashMap<String, MealPlan>,
    workout_plans: HashMap<String, WorkoutPlan>,
    blog_posts: Vec<BlogPost>,
}

/// Lookup key for a goal and activity level, exactly as requested
pub fn plan_key(goal: &str, activity_level: &str) -> String {
    format!("{}-{}", goal, activity_level)
}

impl PlanCatalog {
    /// Catalog with the shipped seed data. No workout plans are seeded.
    pub fn seeded(published_at: DateTime<Utc>) -> Self {
        let meal_plans = seeded_meal_plans()
            .into_iter()
            .map(|plan| (plan.id.clone(), plan))
            .collect();

        Self {
            meal_plans,
            workout_plans: HashMap::new(),
            blog_posts: blog_posts(published_at),
        }
    }

    pub fn meal_plan(&self, goal: &str, activity_level: &str) -> Option<&MealPlan> {
        self.meal_plans.get(&plan_key(goal, activity_level))
    }

    pub fn workout_plan(&self, goal: &str, activity_level: &str) -> Option<&WorkoutPlan> {
        self.workout_plans.get(&plan_key(goal, activity_level))
    }

    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.blog_posts
    }
}
