//! Daily progress API routes

use super::parse_user_id;
use crate::error::ApiError;
use crate::services::{CompletionTarget, ProgressService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use chrono::Utc;
use fitsync_shared::types::{DailyProgressResponse, ToggleCompletionRequest, ToggleCompletionResponse};

/// Progress routes, mounted under `/profile`
pub fn progress_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/progress", get(get_progress))
        .route("/:id/progress/meals/:meal_id", put(toggle_meal))
        .route("/:id/progress/workouts/:exercise_id", put(toggle_workout))
}

/// GET /api/profile/:id/progress - Today's dashboard
async fn get_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DailyProgressResponse>, ApiError> {
    let today = Utc::now().date_naive();
    let response = ProgressService::daily(&state, parse_user_id(&id)?, today).await?;
    Ok(Json(response))
}

/// PUT /api/profile/:id/progress/meals/:mealId
async fn toggle_meal(
    State(state): State<AppState>,
    Path((id, meal_id)): Path<(String, String)>,
    Json(req): Json<ToggleCompletionRequest>,
) -> Result<Json<ToggleCompletionResponse>, ApiError> {
    toggle(&state, &id, CompletionTarget::Meal, &meal_id, req.completed).await
}

/// PUT /api/profile/:id/progress/workouts/:exerciseId
async fn toggle_workout(
    State(state): State<AppState>,
    Path((id, exercise_id)): Path<(String, String)>,
    Json(req): Json<ToggleCompletionRequest>,
) -> Result<Json<ToggleCompletionResponse>, ApiError> {
    toggle(&state, &id, CompletionTarget::Workout, &exercise_id, req.completed).await
}

async fn toggle(
    state: &AppState,
    id: &str,
    target: CompletionTarget,
    item_id: &str,
    completed: bool,
) -> Result<Json<ToggleCompletionResponse>, ApiError> {
    let user_id = parse_user_id(id)?;
    let today = Utc::now().date_naive();
    let response = ProgressService::toggle(state, user_id, target, item_id, completed, today).await?;
    Ok(Json(response))
}
