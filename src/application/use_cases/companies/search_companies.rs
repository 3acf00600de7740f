//! Search Companies Use Case
//!
//! Searches companies by name or ticker symbol.

use std::sync::Arc;

use crate::domain::gateways::FundamentalsProvider;
use crate::domain::models::company::CompanySearchHit;
use crate::shared::errors::UseCaseError;

/// Use case for searching companies
pub struct SearchCompaniesUseCase {
    fundamentals_provider: Arc<dyn FundamentalsProvider>,
}

impl SearchCompaniesUseCase {
    /// Create a new SearchCompaniesUseCase
    #[must_use]
    pub fn new(fundamentals_provider: Arc<dyn FundamentalsProvider>) -> Self {
        Self {
            fundamentals_provider,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Provider` if the upstream request fails.
    pub async fn execute(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<CompanySearchHit>, UseCaseError> {
        tracing::debug!(query, limit, "Searching companies");

        let hits = self.fundamentals_provider.search(query, limit).await?;

        tracing::debug!(count = hits.len(), "Search completed");
        Ok(hits)
    }
}
