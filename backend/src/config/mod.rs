//! Configuration management for the CareLog backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: CARELOG__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
///
/// Both service binaries load the same configuration; each reads only its
/// own section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub records: RecordsConfig,
    pub premium: PremiumConfig,
}

/// Patient record store service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsConfig {
    pub host: String,
    pub port: u16,
    /// Path of the JSON file holding the whole patient collection
    pub data_path: String,
}

/// Premium classifier service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumConfig {
    pub host: String,
    pub port: u16,
    /// Path of the trained model artifact
    pub model_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            records: RecordsConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                data_path: "data/patients.json".to_string(),
            },
            premium: PremiumConfig {
                host: "127.0.0.1".to_string(),
                port: 8081,
                model_path: "models/premium_model.json".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with CARELOG__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (CARELOG__ prefix)
            // e.g., CARELOG__RECORDS__PORT=9000 sets records.port
            .add_source(config::Environment::with_prefix("CARELOG").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
