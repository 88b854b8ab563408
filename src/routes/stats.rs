//! Summary statistics route for the dashboard overview.

use axum::{extract::State, Json};

use crate::errors::ApiResponse;
use crate::services::stats::{self, SummaryStats};
use crate::AppState;

/// GET /api/stats/summary — aggregated placement statistics.
pub async fn summary(State(state): State<AppState>) -> Json<ApiResponse<SummaryStats>> {
    ApiResponse::success(stats::summarize(state.store.records()))
}
