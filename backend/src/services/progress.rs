//! Daily progress service
//!
//! Owns the current-day progress entry for each user: lazy creation,
//! day rollover, completion toggles and the dashboard summary. Every
//! read-modify-write runs under the user's lock.

use crate::error::ApiError;
use crate::repositories::{KeyValueStore, ProgressRepository};
use crate::services::ProfileService;
use crate::state::AppState;
use chrono::NaiveDate;
use fitsync_shared::health_metrics::bmi_for_profile;
use fitsync_shared::progress::summarize;
use fitsync_shared::types::{DailyProgressResponse, ToggleCompletionResponse};
use fitsync_shared::{daily_quote, derive_meal_plan_for, derive_workout_plan_for, ProgressEntry, UserProfile};
use tracing::{debug, info};
use uuid::Uuid;

/// What a completion toggle refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionTarget {
    Meal,
    Workout,
}

impl CompletionTarget {
    fn as_str(self) -> &'static str {
        match self {
            CompletionTarget::Meal => "meal",
            CompletionTarget::Workout => "workout",
        }
    }
}

/// Progress service for business logic
pub struct ProgressService;

impl ProgressService {
    /// Today's entry for `profile`. A missing entry, or one left over from an
    /// earlier day, is replaced by a fresh one and persisted.
    ///
    /// The caller must hold the user's lock.
    async fn current_entry(
        store: &dyn KeyValueStore,
        profile: &UserProfile,
        today: NaiveDate,
    ) -> Result<ProgressEntry, ApiError> {
        match ProgressRepository::find(store, profile.id).await? {
            Some(entry) if entry.is_for(today) => Ok(entry),
            stale => {
                if let Some(old) = stale {
                    debug!(user_id = %profile.id, from = %old.date, to = %today, "Rolling over progress entry");
                }
                let entry = ProgressEntry::for_profile(profile, today);
                ProgressRepository::save(store, &entry).await?;
                Ok(entry)
            }
        }
    }

    /// Dashboard payload for `today`
    pub async fn daily(state: &AppState, user_id: Uuid, today: NaiveDate) -> Result<DailyProgressResponse, ApiError> {
        let _guard = state.locks().lock(user_id).await;

        let profile = ProfileService::get(state.store(), user_id).await?;
        let entry = Self::current_entry(state.store(), &profile, today).await?;

        let meal_plan = derive_meal_plan_for(&profile);
        let workout_plan = derive_workout_plan_for(&profile);
        let summary = summarize(&entry, &profile.goal, &meal_plan, &workout_plan);

        Ok(DailyProgressResponse {
            bmi: bmi_for_profile(&profile),
            quote: daily_quote(today),
            summary,
            progress: entry,
            profile,
        })
    }

    /// Check or uncheck a meal item or exercise from the user's derived plans.
    ///
    /// Calories come from the plan, never from the client. Ids not in the
    /// plan are rejected with not-found.
    pub async fn toggle(
        state: &AppState,
        user_id: Uuid,
        target: CompletionTarget,
        item_id: &str,
        completed: bool,
        today: NaiveDate,
    ) -> Result<ToggleCompletionResponse, ApiError> {
        let _guard = state.locks().lock(user_id).await;

        let profile = ProfileService::get(state.store(), user_id).await?;

        let calories = match target {
            CompletionTarget::Meal => derive_meal_plan_for(&profile)
                .find_item(item_id)
                .map(|item| item.calories)
                .ok_or_else(|| ApiError::NotFound("Meal not found in today's plan".to_string()))?,
            CompletionTarget::Workout => derive_workout_plan_for(&profile)
                .find_exercise(item_id)
                .map(|exercise| exercise.calories)
                .ok_or_else(|| ApiError::NotFound("Exercise not found in today's plan".to_string()))?,
        };

        let mut entry = Self::current_entry(state.store(), &profile, today).await?;
        let events = match target {
            CompletionTarget::Meal => entry.set_meal_completed(item_id, calories, completed),
            CompletionTarget::Workout => entry.set_workout_completed(item_id, calories, completed),
        };

        if !events.is_empty() {
            ProgressRepository::save(state.store(), &entry).await?;
            state.events().publish(user_id, &events);
            info!(
                user_id = %user_id,
                target = target.as_str(),
                item_id,
                completed,
                "Progress updated"
            );
        }

        metrics::counter!(
            "progress_toggles_total",
            "target" => target.as_str(),
            "changed" => if events.is_empty() { "false" } else { "true" }
        )
        .increment(1);

        Ok(ToggleCompletionResponse { progress: entry, events })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::repositories::{MemoryStore, ProfileRepository};
    use chrono::{Days, Utc};
    use fitsync_shared::{ActivityLevel, Gender, Goal, WorkoutType};
    use std::sync::Arc;

    async fn state_with_profile() -> (AppState, UserProfile) {
        let state = AppState::new(Arc::new(MemoryStore::new()), AppConfig::default());
        let profile = UserProfile {
            id: Uuid::new_v4(),
            name: "Ravi".to_string(),
            age: 40,
            gender: Gender::Male,
            height: 178.0,
            weight: 81.0,
            goal: Goal::WeightLoss,
            activity_level: ActivityLevel::Beginner,
            workout_type: WorkoutType::Home,
            created_at: Utc::now(),
        };
        ProfileRepository::save(state.store(), &profile).await.unwrap();
        (state, profile)
    }

    #[tokio::test]
    async fn test_stale_entry_is_replaced_on_new_day() {
        let (state, profile) = state_with_profile().await;
        let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let yesterday = today.checked_sub_days(Days::new(1)).unwrap();

        let response = ProgressService::toggle(&state, profile.id, CompletionTarget::Meal, "b1", true, yesterday)
            .await
            .unwrap();
        assert_eq!(response.progress.calories_consumed, 130);
        let old_id = response.progress.id;

        let daily = ProgressService::daily(&state, profile.id, today).await.unwrap();
        assert_eq!(daily.progress.date, today);
        assert_ne!(daily.progress.id, old_id);
        assert_eq!(daily.progress.calories_consumed, 0);
        assert!(daily.progress.completed_meals.is_empty());
        assert_eq!(daily.progress.water_glasses, 6);

        let stored = ProgressRepository::find(state.store(), profile.id).await.unwrap().unwrap();
        assert_eq!(stored.date, today);
    }

    #[tokio::test]
    async fn test_same_day_entry_is_kept() {
        let (state, profile) = state_with_profile().await;
        let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();

        ProgressService::toggle(&state, profile.id, CompletionTarget::Workout, "h_c1", true, today)
            .await
            .unwrap();
        let daily = ProgressService::daily(&state, profile.id, today).await.unwrap();

        assert_eq!(daily.progress.completed_workouts, vec!["h_c1".to_string()]);
        assert_eq!(daily.summary.workouts_completed, 1);
        assert_eq!(daily.quote, daily_quote(today));
    }

    #[tokio::test]
    async fn test_toggle_publishes_events() {
        let (state, profile) = state_with_profile().await;
        let mut receiver = state.events().subscribe();
        let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();

        ProgressService::toggle(&state, profile.id, CompletionTarget::Workout, "h_c1", true, today)
            .await
            .unwrap();

        let first = receiver.recv().await.unwrap();
        assert_eq!(first.user_id, profile.id);
        assert_eq!(first.event.kind(), "workout_logged");
        assert_eq!(receiver.recv().await.unwrap().event.kind(), "achievement_unlocked");
    }

    #[tokio::test]
    async fn test_unknown_user_leaves_no_lock_behind() {
        let (state, _) = state_with_profile().await;
        let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();

        for _ in 0..50 {
            let result = ProgressService::daily(&state, Uuid::new_v4(), today).await;
            assert!(matches!(result, Err(ApiError::NotFound(_))));
        }

        assert_eq!(state.locks().tracked(), 0);
    }
}
