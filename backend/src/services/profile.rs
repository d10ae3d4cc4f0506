//! Profile service
//!
//! Handles signup submission, retrieval and removal of profiles.

use crate::error::ApiError;
use crate::repositories::{KeyValueStore, ProfileRepository, ProgressRepository};
use crate::state::AppState;
use chrono::Utc;
use fitsync_shared::types::CreateProfileRequest;
use fitsync_shared::validation::validate_profile;
use fitsync_shared::UserProfile;
use tracing::info;
use uuid::Uuid;

/// Profile service for business logic
pub struct ProfileService;

impl ProfileService {
    /// Validate a signup submission and store it under a fresh id
    pub async fn create(state: &AppState, request: CreateProfileRequest) -> Result<UserProfile, ApiError> {
        let profile = validate_profile(&request, Uuid::new_v4(), Utc::now())?;

        ProfileRepository::save(state.store(), &profile).await?;

        metrics::counter!("profiles_created_total").increment(1);
        info!(user_id = %profile.id, goal = %profile.goal, "Profile created");
        Ok(profile)
    }

    /// Resubmit the signup form for an existing user.
    ///
    /// The old profile is replaced wholesale and the progress entry is
    /// discarded, since it snapshots the old weight.
    pub async fn replace(
        state: &AppState,
        user_id: Uuid,
        request: CreateProfileRequest,
    ) -> Result<UserProfile, ApiError> {
        let _guard = state.locks().lock(user_id).await;

        Self::get(state.store(), user_id).await?;
        let profile = validate_profile(&request, user_id, Utc::now())?;

        ProfileRepository::save(state.store(), &profile).await?;
        ProgressRepository::delete(state.store(), user_id).await?;

        info!(user_id = %user_id, goal = %profile.goal, "Profile replaced");
        Ok(profile)
    }

    pub async fn get(store: &dyn KeyValueStore, user_id: Uuid) -> Result<UserProfile, ApiError> {
        ProfileRepository::find(store, user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))
    }

    /// Remove a profile together with its progress entry
    pub async fn delete(state: &AppState, user_id: Uuid) -> Result<(), ApiError> {
        let _guard = state.locks().lock(user_id).await;

        Self::get(state.store(), user_id).await?;
        ProgressRepository::delete(state.store(), user_id).await?;
        ProfileRepository::delete(state.store(), user_id).await?;

        info!(user_id = %user_id, "Profile deleted");
        Ok(())
    }
}
