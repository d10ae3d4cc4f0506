//! Business logic services
//!
//! Services sit between the HTTP handlers and the repositories. They own
//! validation, locking and event publication.

pub mod events;
pub mod locks;
pub mod plans;
pub mod profile;
pub mod progress;

pub use events::{spawn_event_logger, EventBus, UserEvent};
pub use locks::{UserLockGuard, UserLocks};
pub use plans::PlanService;
pub use profile::ProfileService;
pub use progress::{CompletionTarget, ProgressService};
