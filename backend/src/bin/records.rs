//! Patient record store service
//!
//! CRUD + sort API over a whole-collection JSON file store. BMI and the
//! health verdict are derived on every read, never persisted.

use anyhow::Result;
use carelog_backend::{bootstrap, config::AppConfig, repositories::JsonFileStore, routes, state::RecordsState};
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
        data_path = %config.records.data_path,
        "Starting Patient Records API"
    );

    // Create the storage collaborator
    let store = Arc::new(JsonFileStore::new(&config.records.data_path));

    // Create application state
    let addr = format!("{}:{}", config.records.host, config.records.port);
    let state = RecordsState::new(store, config);

    // Build application
    let app = routes::records_router(state);

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
