//! Premium classifier service
//!
//! Loads the trained model artifact once at startup and serves
//! POST /predict. A missing or invalid artifact is fatal: the service
//! refuses to start rather than degrade silently.

use anyhow::{Context, Result};
use carelog_backend::{bootstrap, config::AppConfig, model::LinearScorer, routes, state::PremiumState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    bootstrap::init_tracing();

    // Load configuration
    let config = AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        model_path = %config.premium.model_path,
        "Starting Premium Classifier API"
    );

    // Load the model once; failure here must abort startup
    let model = LinearScorer::load(&config.premium.model_path)
        .with_context(|| format!("premium model unavailable at {}", config.premium.model_path))?;

    // Create application state
    let addr = format!("{}:{}", config.premium.host, config.premium.port);
    let state = PremiumState::new(Arc::new(model), config);

    // Build application
    let app = routes::premium_router(state);

    // Start server
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(bootstrap::shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
