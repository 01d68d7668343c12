//! Health check endpoints
//!
//! Provides Kubernetes-compatible health check endpoints for both
//! services:
//! - /health - Basic health check
//! - /health/ready - Readiness probe (checks the service's collaborator)
//! - /health/live - Liveness probe (always returns OK if server is running)

use crate::state::{PremiumState, RecordsState};
use axum::{extract::State, http::StatusCode, Json};
use carelog_shared::risk::{AgeGroup, CityTier, FeatureVector, LifestyleRisk, Occupation};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

/// Individual health checks
#[derive(Serialize)]
pub struct HealthChecks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<CheckStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<CheckStatus>,
}

/// Status of an individual check
#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    })
}

/// Liveness probe - checks if the service is alive
/// Always returns OK if the server is running
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    })
}

/// Readiness probe for the record store - checks the patient file loads
pub async fn records_readiness(
    State(state): State<RecordsState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage_check = match state.store().load().await {
        Ok(_) => CheckStatus {
            status: "healthy".to_string(),
            message: None,
        },
        Err(e) => CheckStatus {
            status: "unhealthy".to_string(),
            message: Some(e.to_string()),
        },
    };

    readiness_response(HealthChecks {
        storage: Some(storage_check),
        model: None,
    })
}

/// Readiness probe for the classifier - runs a sentinel prediction
pub async fn premium_readiness(
    State(state): State<PremiumState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let sentinel = FeatureVector {
        bmi: 22.0,
        age_group: AgeGroup::Adult,
        lifestyle_risk: LifestyleRisk::Low,
        city_tier: CityTier::Tier3,
        income_lpa: 5.0,
        occupation: Occupation::Employed,
    };

    let model_check = match state.model().predict(&sentinel) {
        Ok(_) => CheckStatus {
            status: "healthy".to_string(),
            message: None,
        },
        Err(e) => CheckStatus {
            status: "unhealthy".to_string(),
            message: Some(e.to_string()),
        },
    };

    readiness_response(HealthChecks {
        storage: None,
        model: Some(model_check),
    })
}

fn readiness_response(
    checks: HealthChecks,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let is_healthy = checks
        .storage
        .iter()
        .chain(checks.model.iter())
        .all(|check| check.status == "healthy");

    let response = HealthResponse {
        status: if is_healthy { "ready" } else { "not_ready" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
    };

    if is_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
