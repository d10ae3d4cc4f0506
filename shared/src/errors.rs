//! Error types for the FitSync application

use thiserror::Error;

use crate::validation::ValidationError;

/// Application-wide error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Lookups against the fixed exercise catalogs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown workout type '{0}'. Must be one of: home, gym, yoga")]
    UnknownWorkoutType(String),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::user_message)
        .collect::<Vec<_>>()
        .join("; ")
}
