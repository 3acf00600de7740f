//! Company Handlers
//!
//! HTTP handlers for company search and fundamentals endpoints.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::domain::models::company::Symbol;
use crate::infrastructure::driving_adapters::api_rest::dto::company::{
    CompanyHistoryResponseDto, CompanySearchResponseDto, CompanySnapshotDto, HistoryParams,
    SearchCompaniesParams,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for company endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(search_companies))
        .route("/{symbol}/snapshot", get(company_snapshot))
        .route("/{symbol}/history", get(company_history))
}

/// GET /companies/search - Search for companies by name or symbol
///
/// # Responses
///
/// * 200 OK - Matching companies
/// * 400 Bad Request - Validation error
/// * 502 Bad Gateway - Upstream provider failure
#[axum::debug_handler]
async fn search_companies(
    State(state): State<AppState>,
    Query(params): Query<SearchCompaniesParams>,
) -> Result<Json<CompanySearchResponseDto>, ApiError> {
    // Validate query parameters
    params.validate()?;

    // Execute use case
    let hits = state
        .search_companies_use_case
        .execute(&params.q, params.limit)
        .await?;

    // Return response
    Ok(Json(CompanySearchResponseDto::from(hits)))
}

/// GET /companies/:symbol/snapshot - Latest fundamentals snapshot
///
/// # Responses
///
/// * 200 OK - Snapshot assembled from the latest annual statements
/// * 400 Bad Request - Invalid ticker symbol
/// * 404 Not Found - Company profile does not exist upstream
/// * 502 Bad Gateway - Upstream provider failure
#[axum::debug_handler]
async fn company_snapshot(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<CompanySnapshotDto>, ApiError> {
    // Parse symbol
    let symbol = Symbol::parse(&symbol)?;

    // Execute use case
    let snapshot = state.get_company_snapshot_use_case.execute(&symbol).await?;

    // Return response
    Ok(Json(CompanySnapshotDto::from(snapshot)))
}

/// GET /companies/:symbol/history - Revenue / net income history
///
/// # Responses
///
/// * 200 OK - Annual history points, newest first
/// * 400 Bad Request - Invalid ticker symbol or years out of range
/// * 404 Not Found - No income statement data upstream
/// * 502 Bad Gateway - Upstream provider failure
#[axum::debug_handler]
async fn company_history(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<CompanyHistoryResponseDto>, ApiError> {
    // Validate query parameters
    params.validate()?;

    // Parse symbol
    let symbol = Symbol::parse(&symbol)?;

    // Execute use case
    let history = state
        .get_company_history_use_case
        .execute(&symbol, params.years)
        .await?;

    // Return response
    Ok(Json(CompanyHistoryResponseDto::from(history)))
}
