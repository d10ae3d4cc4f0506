//! Plan lookup API routes

use crate::error::ApiError;
use crate::services::PlanService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use fitsync_shared::types::WorkoutPlanQuery;
use fitsync_shared::{MealPlan, WorkoutPlan};

/// Create plan lookup routes
pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/meal-plan/:goal/:activity_level", get(get_meal_plan))
        .route("/workout-plan/:goal/:activity_level", get(get_workout_plan))
}

/// GET /api/meal-plan/:goal/:activityLevel
async fn get_meal_plan(
    State(state): State<AppState>,
    Path((goal, activity_level)): Path<(String, String)>,
) -> Result<Json<MealPlan>, ApiError> {
    let plan = PlanService::meal_plan(state.catalog(), &state.config().plans, &goal, &activity_level)?;
    Ok(Json(plan))
}

/// GET /api/workout-plan/:goal/:activityLevel?workoutType=
async fn get_workout_plan(
    State(state): State<AppState>,
    Path((goal, activity_level)): Path<(String, String)>,
    Query(query): Query<WorkoutPlanQuery>,
) -> Result<Json<WorkoutPlan>, ApiError> {
    let plan = PlanService::workout_plan(
        state.catalog(),
        &state.config().plans,
        &goal,
        &activity_level,
        query.workout_type.as_deref(),
    )?;
    Ok(Json(plan))
}
