//! Shared application state for request handlers.

use std::sync::Arc;

use serde_json::Value;

use crate::config::AppConfig;
use crate::routes::api_docs;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Everything in here is immutable after startup; handlers never need locks.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Pre-rendered OpenAPI document
    pub api_docs: Arc<Value>,
}

impl AppState {
    /// Creates a new application state from the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let api_docs = api_docs::build_document(&config.api_docs);
        Self {
            config: Arc::new(config),
            api_docs: Arc::new(api_docs),
        }
    }
}
