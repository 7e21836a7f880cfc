//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::store::{JsonFileRateStore, RateStore};

/// Shared application state.
///
/// Contains the engine configuration and the rate store. The store is
/// held behind the [`RateStore`] trait so file, spreadsheet, or database
/// backends are interchangeable without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<EngineConfig>,
    /// The rate persistence backend.
    rate_store: Arc<dyn RateStore + Send + Sync>,
}

impl AppState {
    /// Creates a new application state from a configuration and a store.
    pub fn new<S>(config: EngineConfig, rate_store: S) -> Self
    where
        S: RateStore + Send + Sync + 'static,
    {
        Self {
            config: Arc::new(config),
            rate_store: Arc::new(rate_store),
        }
    }

    /// Creates state backed by the JSON-file store at the configured
    /// `rates_path`.
    pub fn from_config(config: EngineConfig) -> Self {
        let store = JsonFileRateStore::new(&config.rates_path);
        Self {
            config: Arc::new(config),
            rate_store: Arc::new(store),
        }
    }

    /// Returns a reference to the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns a reference to the rate store.
    pub fn rate_store(&self) -> &(dyn RateStore + Send + Sync) {
        self.rate_store.as_ref()
    }
}
