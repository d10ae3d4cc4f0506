//! API request and response types

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::health_metrics::BmiResult;
use crate::models::{MealPlan, Quote, UserProfile, WorkoutPlan};
use crate::progress::{ProgressEntry, ProgressEvent, ProgressSummary};

/// Signup form submission.
///
/// Closed-set fields arrive as raw strings so an unknown value becomes a
/// per-field validation error instead of a body rejection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Any JSON number is accepted so a bad age is reported per field
    #[validate(range(min = 13.0, max = 100.0, message = "Age must be between 13 and 100"))]
    pub age: f64,
    pub gender: String,
    #[validate(range(min = 100.0, max = 250.0, message = "Height must be between 100 and 250 cm"))]
    pub height: f64,
    #[validate(range(min = 30.0, max = 300.0, message = "Weight must be between 30 and 300 kg"))]
    pub weight: f64,
    pub goal: String,
    pub activity_level: String,
    pub workout_type: String,
}

/// Check or uncheck a meal or exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ToggleCompletionRequest {
    pub completed: bool,
}

/// Query for the workout lookup endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanQuery {
    #[serde(default)]
    pub workout_type: Option<String>,
}

/// Both plans derived for a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePlansResponse {
    pub meal_plan: MealPlan,
    pub workout_plan: WorkoutPlan,
}

/// Daily dashboard payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyProgressResponse {
    pub profile: UserProfile,
    pub progress: ProgressEntry,
    pub summary: ProgressSummary,
    pub bmi: BmiResult,
    pub quote: Quote,
}

/// Result of a completion toggle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleCompletionResponse {
    pub progress: ProgressEntry,
    pub events: Vec<ProgressEvent>,
}
