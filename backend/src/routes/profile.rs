//! Signup profile API routes

use super::parse_user_id;
use crate::error::ApiError;
use crate::services::{PlanService, ProfileService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fitsync_shared::types::{CreateProfileRequest, ProfilePlansResponse};
use fitsync_shared::UserProfile;

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_profile))
        .route("/:id", get(get_profile).put(replace_profile).delete(delete_profile))
        .route("/:id/plans", get(get_profile_plans))
}

/// POST /api/profile - Submit the signup form
async fn create_profile(
    State(state): State<AppState>,
    Json(req): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<UserProfile>), ApiError> {
    let profile = ProfileService::create(&state, req).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/profile/:id
async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = ProfileService::get(state.store(), parse_user_id(&id)?).await?;
    Ok(Json(profile))
}

/// PUT /api/profile/:id - Resubmit the signup form, resetting progress
async fn replace_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CreateProfileRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = ProfileService::replace(&state, parse_user_id(&id)?, req).await?;
    Ok(Json(profile))
}

/// DELETE /api/profile/:id
async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    ProfileService::delete(&state, parse_user_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/profile/:id/plans - Plans derived from the stored profile
async fn get_profile_plans(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProfilePlansResponse>, ApiError> {
    let profile = ProfileService::get(state.store(), parse_user_id(&id)?).await?;
    Ok(Json(PlanService::plans_for(&profile)))
}
