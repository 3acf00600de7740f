//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use crate::application::use_cases::companies::{
    GetCompanyHistoryUseCase, GetCompanySnapshotUseCase, SearchCompaniesUseCase,
};
use crate::infrastructure::driven_adapters::config::AppConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub search_companies_use_case: Arc<SearchCompaniesUseCase>,
    pub get_company_snapshot_use_case: Arc<GetCompanySnapshotUseCase>,
    pub get_company_history_use_case: Arc<GetCompanyHistoryUseCase>,
}
