//! Common test utilities for integration tests
//!
//! Every test app runs against a fresh in-memory store.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fitsync_backend::{config::AppConfig, repositories::MemoryStore, routes, state::AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

impl TestApp {
    /// App with default configuration: only seeded plan keys resolve
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// App whose plan lookups fall through to the derivation engine
    pub fn deriving() -> Self {
        let mut config = AppConfig::default();
        config.plans.derive_on_miss = true;
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(Arc::new(MemoryStore::new()), config);
        let app = routes::create_router(state.clone());
        Self { app, state }
    }

    async fn send(&self, method: &str, path: &str, body: Option<String>) -> (StatusCode, String) {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.send("GET", path, None).await
    }

    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send("POST", path, Some(body.to_string())).await
    }

    pub async fn put(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send("PUT", path, Some(body.to_string())).await
    }

    pub async fn delete(&self, path: &str) -> (StatusCode, String) {
        self.send("DELETE", path, None).await
    }

    /// Submit a valid signup form and return the stored profile id
    pub async fn create_profile(&self, goal: &str, activity_level: &str, workout_type: &str) -> String {
        let body = signup_body(goal, activity_level, workout_type);
        let (status, body) = self.post("/api/profile", &body.to_string()).await;
        assert_eq!(status, StatusCode::CREATED, "signup failed: {}", body);
        json_body(&body)["id"].as_str().unwrap().to_string()
    }

    /// Toggle a meal item and return the parsed response
    pub async fn toggle_meal(&self, id: &str, meal_id: &str, completed: bool) -> (StatusCode, Value) {
        let path = format!("/api/profile/{}/progress/meals/{}", id, meal_id);
        let (status, body) = self.put(&path, &json!({ "completed": completed }).to_string()).await;
        (status, json_body(&body))
    }

    /// Toggle an exercise and return the parsed response
    pub async fn toggle_workout(&self, id: &str, exercise_id: &str, completed: bool) -> (StatusCode, Value) {
        let path = format!("/api/profile/{}/progress/workouts/{}", id, exercise_id);
        let (status, body) = self.put(&path, &json!({ "completed": completed }).to_string()).await;
        (status, json_body(&body))
    }
}

pub fn signup_body(goal: &str, activity_level: &str, workout_type: &str) -> Value {
    json!({
        "name": "Priya Sharma",
        "age": 29,
        "gender": "female",
        "height": 165.0,
        "weight": 62.5,
        "goal": goal,
        "activityLevel": activity_level,
        "workoutType": workout_type,
    })
}

pub fn json_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|e| panic!("invalid JSON ({}): {}", e, body))
}

/// Event `type` tags in order
pub fn event_types(response: &Value) -> Vec<String> {
    response["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["type"].as_str().unwrap().to_string())
        .collect()
}
