//! Data access layer
//!
//! Key-value persistence for profiles and progress, plus the read-only
//! plan catalog.

pub mod plans;
pub mod profile;
pub mod store;

pub use plans::PlanCatalog;
pub use profile::{ProfileRepository, ProgressRepository};
pub use store::{KeyValueStore, MemoryStore, RedisStore};
