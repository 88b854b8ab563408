pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use store::RecordStore;

/// Shared application state passed to all Axum handlers.
///
/// The record store is loaded once at startup and never mutated, so handlers
/// only ever take shared references to it.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub config: config::AppConfig,
}
