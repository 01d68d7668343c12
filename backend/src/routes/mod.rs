//! Route definitions for both CareLog services
//!
//! This module organizes the per-service routers and applies the shared
//! middleware stack.

use crate::state::{PremiumState, RecordsState};
use axum::{
    http::{header, Method},
    routing::{delete, get, post, put},
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod health;
mod patients;
mod premium;

/// Create the patient record store router
pub fn records_router(state: RecordsState) -> Router {
    let router = Router::new()
        .route("/", get(patients::root))
        .route("/about", get(patients::about))
        .route("/view", get(patients::view))
        .route("/patient/:id", get(patients::get_patient))
        .route("/create", post(patients::create_patient))
        .route("/edit/:id", put(patients::edit_patient))
        .route("/delete/:id", delete(patients::delete_patient))
        .route("/sort", get(patients::sort_patients))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .route("/health/ready", get(health::records_readiness));

    with_middleware(router).with_state(state)
}

/// Create the premium classifier router
pub fn premium_router(state: PremiumState) -> Router {
    let router = Router::new()
        .route("/predict", post(premium::predict))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .route("/health/ready", get(health::premium_readiness));

    with_middleware(router).with_state(state)
}

/// Apply the shared middleware stack
fn with_middleware<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
}
