//! Per-user serialization
//!
//! Progress updates are load-modify-save against the key-value store. Two
//! concurrent toggles for the same user would otherwise both read the same
//! entry and one write would be lost, so each user gets an async mutex.
//!
//! A user's mutex only lives in the map while someone holds or waits for it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

type LockMap = HashMap<Uuid, Arc<Mutex<()>>>;

#[derive(Clone, Default)]
pub struct UserLocks {
    locks: Arc<StdMutex<LockMap>>,
}

/// Exclusive access to one user. Dropping it releases the lock and forgets
/// the user's mutex when nobody else is waiting on it.
pub struct UserLockGuard {
    user_id: Uuid,
    lock: Arc<Mutex<()>>,
    guard: Option<OwnedMutexGuard<()>>,
    locks: Arc<StdMutex<LockMap>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `user_id`
    pub async fn lock(&self, user_id: Uuid) -> UserLockGuard {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            locks.entry(user_id).or_default().clone()
        };
        let guard = lock.clone().lock_owned().await;

        UserLockGuard {
            user_id,
            lock,
            guard: Some(guard),
            locks: self.locks.clone(),
        }
    }

    /// Users with a live mutex
    pub fn tracked(&self) -> usize {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Drop for UserLockGuard {
    fn drop(&mut self) {
        self.guard.take();

        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = locks.get(&self.user_id) {
            // The map's handle plus ours; any other handle belongs to a waiter
            if Arc::ptr_eq(entry, &self.lock) && Arc::strong_count(entry) == 2 {
                locks.remove(&self.user_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_same_user_is_serialized() {
        let locks = UserLocks::new();
        let user_id = Uuid::new_v4();

        let guard = locks.lock(user_id).await;
        let contender = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _guard = locks.lock(user_id).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!contender.is_finished());

        drop(guard);
        contender.await.unwrap();
        assert_eq!(locks.tracked(), 0);
    }

    #[tokio::test]
    async fn test_different_users_do_not_block() {
        let locks = UserLocks::new();
        let _first = locks.lock(Uuid::new_v4()).await;
        let second = tokio::time::timeout(Duration::from_millis(100), locks.lock(Uuid::new_v4())).await;
        assert!(second.is_ok());
        assert_eq!(locks.tracked(), 2);
    }

    #[tokio::test]
    async fn test_released_locks_are_forgotten() {
        let locks = UserLocks::new();

        for _ in 0..1000 {
            let _guard = locks.lock(Uuid::new_v4()).await;
        }

        assert_eq!(locks.tracked(), 0);
    }

    #[tokio::test]
    async fn test_entry_survives_while_waiter_queued() {
        let locks = UserLocks::new();
        let user_id = Uuid::new_v4();

        let guard = locks.lock(user_id).await;
        let waiter = {
            let locks = locks.clone();
            tokio::spawn(async move { locks.lock(user_id).await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        drop(guard);
        assert_eq!(locks.tracked(), 1);

        // The waiter now holds the same mutex
        let held = waiter.await.unwrap();
        let blocked = tokio::time::timeout(Duration::from_millis(50), locks.lock(user_id)).await;
        assert!(blocked.is_err());

        drop(held);
        assert_eq!(locks.tracked(), 0);
    }
}
