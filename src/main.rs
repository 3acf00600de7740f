//! Company Fundamentals API - Main Entry Point

use std::sync::Arc;

use axum::routing::get;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use company_fundamentals::application::use_cases::companies::{
    GetCompanyHistoryUseCase, GetCompanySnapshotUseCase, SearchCompaniesUseCase,
};
use company_fundamentals::infrastructure::driven_adapters::config::AppConfig;
use company_fundamentals::infrastructure::driven_adapters::fundamentals_provider::FmpFundamentalsProvider;
use company_fundamentals::infrastructure::driven_adapters::http;
use company_fundamentals::infrastructure::driving_adapters::api_rest::handlers::{companies, health};
use company_fundamentals::infrastructure::driving_adapters::api_rest::middleware::request_id_middleware;
use company_fundamentals::infrastructure::driving_adapters::api_rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "company_fundamentals=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    if config.fmp.api_key.is_empty() {
        anyhow::bail!(
            "fmp.api_key is not set. Configure it in config/ or via the APP__FMP__API_KEY environment variable."
        );
    }

    // Create upstream HTTP client
    let client = http::build_client(&config.fmp)?;
    tracing::info!(base_url = %config.fmp.base_url, "Upstream HTTP client created");

    // Create fundamentals provider
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
        config: Arc::new(config.clone()),
        search_companies_use_case,
        get_company_snapshot_use_case,
        get_company_history_use_case,
    };

    // Build router
    let app = Router::new()
        .route("/health", get(health::health_check))
        .nest("/companies", companies::router())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
