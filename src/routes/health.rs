//! Health check endpoints for liveness and readiness probes.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::ApiResponse;
use crate::AppState;

/// Readiness probe detail.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub companies_loaded: usize,
}

/// Liveness probe — always returns OK if the process is running.
pub async fn live() -> &'static str {
    "OK"
}

/// Readiness probe — reports how many companies the store holds. An empty
/// store still reports ok: a failed load degrades to zero records, not to
/// an unready server.
pub async fn ready(State(state): State<AppState>) -> Json<ApiResponse<HealthStatus>> {
    if state.store.is_empty() {
        tracing::warn!("Record store is empty");
    }
    ApiResponse::success(HealthStatus {
        status: "ok".to_string(),
        companies_loaded: state.store.len(),
    })
}
