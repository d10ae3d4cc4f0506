//! Health check endpoints
//!
//! - /health: process is up, reports which profile store is in use
//! - /health/ready: pings the profile store, 503 when it is unreachable
//! - /health/live: always OK while the server runs

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreCheck>,
}

/// Profile store status
#[derive(Serialize)]
pub struct StoreCheck {
    pub backend: &'static str,
    /// Only set when the store was actually pinged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reachable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    fn new(status: &'static str, store: Option<StoreCheck>) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            store,
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new(
        "healthy",
        Some(StoreCheck {
            backend: state.store().name(),
            reachable: None,
            error: None,
        }),
    ))
}

pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store = state.store();
    match store.ping().await {
        Ok(()) => Ok(Json(HealthResponse::new(
            "ready",
            Some(StoreCheck {
                backend: store.name(),
                reachable: Some(true),
                error: None,
            }),
        ))),
        Err(e) => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse::new(
                "not_ready",
                Some(StoreCheck {
                    backend: store.name(),
                    reachable: Some(false),
                    error: Some(e.to_string()),
                }),
            )),
        )),
    }
}

pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("alive", None))
}
