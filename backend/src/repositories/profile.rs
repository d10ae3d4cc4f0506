//! Profile and progress persistence
//!
//! Each user owns two blobs: the signup profile and the current day's
//! progress entry. Keys are the user id joined with a fixed blob name.

use super::store::KeyValueStore;
use anyhow::{Context, Result};
use fitsync_shared::{ProgressEntry, UserProfile};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// Blob name for the signup profile
pub const PROFILE_KEY: &str = "fitSyncProfile";

/// Blob name for the current progress entry
pub const PROGRESS_KEY: &str = "fitSyncProgress";

fn scoped_key(user_id: Uuid, blob: &str) -> String {
    format!("{}:{}", user_id, blob)
}

async fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    match store.get(key).await? {
        Some(raw) => {
            let value = serde_json::from_str(&raw)
                .with_context(|| format!("Corrupt blob under key {}", key))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

async fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, raw).await
}

/// Repository for signup profiles
pub struct ProfileRepository;

impl ProfileRepository {
    pub async fn find(store: &dyn KeyValueStore, user_id: Uuid) -> Result<Option<UserProfile>> {
        load_json(store, &scoped_key(user_id, PROFILE_KEY)).await
    }

    pub async fn save(store: &dyn KeyValueStore, profile: &UserProfile) -> Result<()> {
        save_json(store, &scoped_key(profile.id, PROFILE_KEY), profile).await
    }

    pub async fn delete(store: &dyn KeyValueStore, user_id: Uuid) -> Result<()> {
        store.remove(&scoped_key(user_id, PROFILE_KEY)).await
    }
}

/// Repository for daily progress entries
pub struct ProgressRepository;

impl ProgressRepository {
    pub async fn find(store: &dyn KeyValueStore, user_id: Uuid) -> Result<Option<ProgressEntry>> {
        load_json(store, &scoped_key(user_id, PROGRESS_KEY)).await
    }

    pub async fn save(store: &dyn KeyValueStore, entry: &ProgressEntry) -> Result<()> {
        save_json(store, &scoped_key(entry.user_id, PROGRESS_KEY), entry).await
    }

    pub async fn delete(store: &dyn KeyValueStore, user_id: Uuid) -> Result<()> {
        store.remove(&scoped_key(user_id, PROGRESS_KEY)).await
    }
}
