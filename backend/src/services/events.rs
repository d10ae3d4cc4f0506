//! Progress event delivery
//!
//! Progress mutations publish their domain events on a broadcast channel.
//! Presentation concerns (toasts, popups, push notifications) subscribe
//! independently; the server itself only runs a logging subscriber.

use fitsync_shared::ProgressEvent;
use serde::Serialize;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// A progress event tagged with the user it belongs to
#[derive(Debug, Clone, Serialize)]
pub struct UserEvent {
    pub user_id: Uuid,
    pub event: ProgressEvent,
}

/// Fan-out channel for [`UserEvent`]s
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<UserEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UserEvent> {
        self.sender.subscribe()
    }

    /// Publish events in order. Having no subscribers is not an error.
    pub fn publish(&self, user_id: Uuid, events: &[ProgressEvent]) {
        for event in events {
            metrics::counter!("progress_events_total", "kind" => event.kind()).increment(1);
            if self
                .sender
                .send(UserEvent {
                    user_id,
                    event: event.clone(),
                })
                .is_err()
            {
                debug!(user_id = %user_id, kind = event.kind(), "No event subscribers");
            }
        }
    }
}

/// Spawn a subscriber that writes every event to the log
pub fn spawn_event_logger(bus: &EventBus) -> JoinHandle<()> {
    let mut receiver = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match receiver.recv().await {
                Ok(UserEvent { user_id, event }) => match &event {
                    ProgressEvent::AchievementUnlocked { achievement } => info!(
                        user_id = %user_id,
                        achievement = %achievement.id,
                        points = achievement.points,
                        "Achievement unlocked: {}",
                        achievement.title
                    ),
                    other => debug!(user_id = %user_id, kind = other.kind(), "Progress event"),
                },
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Event logger fell behind; events dropped");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitsync_shared::Achievement;

    #[tokio::test]
    async fn test_subscribers_receive_events_in_order() {
        let bus = EventBus::new(16);
        let mut receiver = bus.subscribe();
        let user_id = Uuid::new_v4();

        bus.publish(
            user_id,
            &[
                ProgressEvent::WorkoutLogged {
                    exercise_id: "g_s1".to_string(),
                    calories: 156,
                },
                ProgressEvent::AchievementUnlocked {
                    achievement: Achievement::first_workout(),
                },
            ],
        );

        let first = receiver.recv().await.unwrap();
        assert_eq!(first.user_id, user_id);
        assert_eq!(first.event.kind(), "workout_logged");
        let second = receiver.recv().await.unwrap();
        assert_eq!(second.event.kind(), "achievement_unlocked");
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_harmless() {
        let bus = EventBus::new(0);
        bus.publish(
            Uuid::new_v4(),
            &[ProgressEvent::MealRemoved {
                item_id: "b1".to_string(),
                calories: 130,
            }],
        );
    }
}
