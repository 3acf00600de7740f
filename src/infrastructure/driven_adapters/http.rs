//! HTTP Client Management
//!
//! Utilities for creating the shared upstream HTTP client.

use std::time::Duration;

use super::config::FmpConfig;

/// Create a reqwest client configured for the upstream API
pub fn build_client(config: &FmpConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
}
