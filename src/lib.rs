pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;
pub mod storage;

use std::sync::Arc;

use crate::services::pattern_store::PatternStore;

/// Shared application state passed to all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PatternStore>,
    pub config: config::AppConfig,
}
