//! Route definitions for the placedash API.

pub mod companies;
pub mod health;
pub mod stats;

use axum::{routing::get, Router};

use crate::AppState;

/// Assemble the full API router. State and middleware layers are attached
/// by the caller.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .route("/api/stats/summary", get(stats::summary))
        .route("/api/companies", get(companies::list))
        .route("/api/companies/{name}", get(companies::get_by_name))
}
