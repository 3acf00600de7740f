//! Health Handler
//!
//! Liveness probe endpoint.

use axum::Json;
use serde::Serialize;

/// Health check response body
#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
}

/// GET /health - Liveness probe
///
/// # Responses
///
/// * 200 OK - `{"status":"ok"}`
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto { status: "ok" })
}
