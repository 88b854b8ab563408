//! Company listing and detail routes.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::company::CompanyRecord;
use crate::services::query::{self, CompanyFilters, SortParams};
use crate::AppState;

/// GET /api/companies — list companies with optional filters and sorting.
pub async fn list(
    State(state): State<AppState>,
    Query(filters): Query<CompanyFilters>,
    Query(sort): Query<SortParams>,
) -> Json<ApiResponse<Vec<CompanyRecord>>> {
    let companies = query::filter_and_sort(state.store.records(), &filters, &sort.spec());
    ApiResponse::success(companies)
}

/// GET /api/companies/{name} — company detail, case-insensitive name match.
/// Axum percent-decodes the path segment before it reaches the lookup.
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<CompanyRecord>>, AppError> {
    let company = query::find_by_name(state.store.records(), &name)
        .ok_or_else(|| AppError::NotFound("Company not found".to_string()))?;
    Ok(ApiResponse::success(company.clone()))
}
