//! Shared application state

use crate::config::ServiceConfig;
use crate::core::engine::RecordEngine;
use crate::storage::RecordStore;
use std::sync::Arc;

/// State shared by every handler.
///
/// The engine is store-agnostic; tests hand in their own
/// [`RecordStore`] doubles through the same constructor the binary uses.
#[derive(Clone)]
pub struct AppState {
    pub engine: RecordEngine<dyn RecordStore>,
    pub config: ServiceConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, config: ServiceConfig) -> Self {
        Self {
            engine: RecordEngine::new(store),
            config,
        }
    }
}
