//! FitSync Shared Library
//!
//! Domain types, static catalogs and the pure plan engine, shared by the
//! backend service and the WASM module.

pub mod catalog;
pub mod errors;
pub mod health_metrics;
pub mod meal_plans;
pub mod models;
pub mod progress;
pub mod quotes;
pub mod types;
pub mod validation;
pub mod workout_plans;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::{calculate_bmi, calculate_bmi_result, BmiCategory, BmiResult};
pub use meal_plans::{derive_meal_plan, derive_meal_plan_for};
pub use models::*;
pub use progress::{Achievement, ProgressEntry, ProgressEvent, ProgressSummary};
pub use quotes::daily_quote;
pub use workout_plans::{derive_workout_plan, derive_workout_plan_for};
