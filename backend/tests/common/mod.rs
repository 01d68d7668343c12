//! Common test utilities for integration tests
//!
//! This module provides shared setup for driving the full routers in
//! memory, with a tempdir-backed store and model artifact per test app.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use carelog_backend::{
    config::AppConfig, model::LinearScorer, repositories::JsonFileStore, routes,
    state::{PremiumState, RecordsState},
};
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    // Keeps the backing files alive for the duration of the test
    _tmp: TempDir,
}

impl TestApp {
    /// Create a record store app backed by a fresh temp file
    pub fn records() -> Self {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let store = JsonFileStore::new(tmp.path().join("patients.json"));

        let state = RecordsState::new(Arc::new(store), AppConfig::default());
        let app = routes::records_router(state);

        Self { app, _tmp: tmp }
    }

    /// Create a classifier app with a freshly written model artifact
    pub fn premium() -> Self {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let model_path = tmp.path().join("premium_model.json");
        std::fs::write(
            &model_path,
            serde_json::to_vec_pretty(&test_artifact()).unwrap(),
        )
        .expect("Failed to write model artifact");

        let model = LinearScorer::load(&model_path).expect("Model should load for tests");
        let state = PremiumState::new(Arc::new(model), AppConfig::default());
        let app = routes::premium_router(state);

        Self { app, _tmp: tmp }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Make a PUT request with JSON body
    pub async fn put(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("PUT")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("DELETE")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

/// Artifact with the full level tables the scorer validates against
fn test_artifact() -> serde_json::Value {
    json!({
        "classes": ["Low", "Medium", "High"],
        "intercepts": [0.40, 0.10, -0.50],
        "numeric_weights": {
            "bmi": [-0.035, 0.010, 0.025],
            "income_lpa": [0.012, 0.004, -0.016]
        },
        "categorical_weights": {
            "age_group": {
                "child": [0.25, -0.05, -0.20],
                "adult": [0.00, 0.05, -0.05],
                "senior": [-0.30, 0.00, 0.30]
            },
            "lifestyle_risk": {
                "low": [0.30, -0.05, -0.25],
                "medium": [-0.05, 0.10, -0.05],
                "high": [-0.35, -0.05, 0.40]
            },
            "city_tier": {
                "tier_1": [-0.05, 0.00, 0.05],
                "tier_2": [0.00, 0.02, -0.02],
                "tier_3": [0.05, 0.00, -0.05]
            },
            "occupation": {
                "retired": [-0.10, 0.00, 0.10],
                "employed": [0.05, 0.00, -0.05],
                "unemployed": [0.05, -0.02, -0.03],
                "freelancer": [0.00, 0.00, 0.00],
                "student": [0.15, -0.05, -0.10],
                "business_owner": [-0.05, 0.00, 0.05]
            }
        }
    })
}
