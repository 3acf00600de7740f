//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a wiremock stand-in for the
//! FMP API and creating a test application.

use std::sync::Arc;

use axum::routing::get;
use axum::{middleware, Router};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use wiremock::MockServer;

use company_fundamentals::application::use_cases::companies::{
    GetCompanyHistoryUseCase, GetCompanySnapshotUseCase, SearchCompaniesUseCase,
};
use company_fundamentals::infrastructure::driven_adapters::config::AppConfig;
use company_fundamentals::infrastructure::driven_adapters::fundamentals_provider::FmpFundamentalsProvider;
use company_fundamentals::infrastructure::driven_adapters::http;
use company_fundamentals::infrastructure::driving_adapters::api_rest::handlers::{
    companies, health,
};
use company_fundamentals::infrastructure::driving_adapters::api_rest::middleware::request_id_middleware;
use company_fundamentals::infrastructure::driving_adapters::api_rest::AppState;

/// API key injected into the test configuration
pub const TEST_API_KEY: &str = "test-api-key";

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub fmp: MockServer,
}

impl TestApp {
    /// Create a new test application backed by a fresh mock FMP server
    pub async fn new() -> Self {
        // Start the mock upstream
        let fmp = MockServer::start().await;

        // Create test config pointing at the mock server
        let config = create_test_config(&fmp.uri());

        // Create upstream client and provider
        let client = http::build_client(&config.fmp).expect("Failed to build HTTP client");
        let fundamentals_provider = Arc::new(FmpFundamentalsProvider::new(
            client,
            &config.fmp.base_url,
            &config.fmp.api_key,
        ));

        // Create use cases
        let search_companies_use_case =
            Arc::new(SearchCompaniesUseCase::new(fundamentals_provider.clone()));
        let get_company_snapshot_use_case =
            Arc::new(GetCompanySnapshotUseCase::new(fundamentals_provider.clone()));
        let get_company_history_use_case =
            Arc::new(GetCompanyHistoryUseCase::new(fundamentals_provider.clone()));

        // Create application state
        let app_state = AppState {
            config: Arc::new(config),
            search_companies_use_case,
            get_company_snapshot_use_case,
            get_company_history_use_case,
        };

        // Build router
        let router = Router::new()
            .route("/health", get(health::health_check))
            .nest("/companies", companies::router())
            .layer(middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        Self { router, fmp }
    }
}

/// Create a test configuration
fn create_test_config(fmp_base_url: &str) -> AppConfig {
    use config::{Config, File, FileFormat};

    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0

[fmp]
base_url = "{fmp_base_url}"
api_key = "{TEST_API_KEY}"
timeout_secs = 5
"#
    );

    Config::builder()
        .add_source(File::from_str(&config_str, FileFormat::Toml))
        .build()
        .expect("Failed to build test config")
        .try_deserialize()
        .expect("Failed to deserialize test config")
}

/// Search response structure for deserialization
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct SearchResponse {
    pub results: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct SearchItem {
    pub symbol: String,
    pub name: String,
    pub exchange: Option<String>,
    pub currency: Option<String>,
}

/// History response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct HistoryResponse {
    pub symbol: String,
    pub points: Vec<HistoryPoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct HistoryPoint {
    pub date: String,
    pub revenue: Option<f64>,
    pub net_income: Option<f64>,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
