//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fitsync_shared::validation::ValidationError;
use fitsync_shared::AppError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error")]
    Validation(Vec<ValidationError>),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(errors) => ApiError::Validation(errors),
            AppError::Catalog(err) => ApiError::BadRequest(err.to_string()),
        }
    }
}

/// Error response body. `message` is always present so clients can show it
/// directly.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldErrorDetail>,
}

/// Per-field validation failure
#[derive(Serialize)]
pub struct FieldErrorDetail {
    pub field: String,
    pub label: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, errors) = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Profile validation failed".to_string(),
                errors
                    .into_iter()
                    .map(|e| FieldErrorDetail {
                        field: e.field,
                        label: e.display_label,
                        message: e.message,
                    })
                    .collect(),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, Vec::new()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, Vec::new()),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    Vec::new(),
                )
            }
        };

        let body = Json(ErrorResponse {
            message,
            code: code.to_string(),
            errors,
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use fitsync_shared::CatalogError;

    #[test]
    fn test_validation_error_status() {
        let error = ApiError::Validation(vec![ValidationError::new("age", "too young")]);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_status() {
        let error = ApiError::NotFound("Meal plan not found".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_status() {
        let error = ApiError::Internal(anyhow::anyhow!("store offline"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_catalog_error_maps_to_bad_request() {
        let error: ApiError = AppError::from(CatalogError::UnknownWorkoutType("pool".into())).into();
        assert!(matches!(error, ApiError::BadRequest(_)));
    }
}
