//! Application state management
//!
//! Each service binary builds its own state, passed to handlers via
//! Axum's state extraction.
//!
//! # Design Principles
//!
//! 1. **Pre-compute expensive resources**: the model artifact is loaded and
//!    validated once at startup
//! 2. **Cheap cloning**: all fields are Arc-wrapped
//! 3. **Immutable after creation**: state is read-only during request
//!    handling

use crate::config::AppConfig;
use crate::model::PremiumModel;
use crate::repositories::PatientStore;
use std::sync::Arc;

/// Shared state of the patient record store service
#[derive(Clone)]
pub struct RecordsState {
    store: Arc<dyn PatientStore>,
    config: Arc<AppConfig>,
}

impl RecordsState {
    pub fn new(store: Arc<dyn PatientStore>, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Get the storage collaborator
    #[inline]
    pub fn store(&self) -> &dyn PatientStore {
        self.store.as_ref()
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Shared state of the premium classifier service
#[derive(Clone)]
pub struct PremiumState {
    model: Arc<dyn PremiumModel>,
    config: Arc<AppConfig>,
}

impl PremiumState {
    pub fn new(model: Arc<dyn PremiumModel>, config: AppConfig) -> Self {
        Self {
            model,
            config: Arc::new(config),
        }
    }

    /// Get the loaded model collaborator
    #[inline]
    pub fn model(&self) -> &dyn PremiumModel {
        self.model.as_ref()
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
