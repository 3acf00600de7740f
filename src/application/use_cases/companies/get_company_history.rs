//! Get Company History Use Case
//!
//! Builds the annual revenue / net income series for charting.

use std::sync::Arc;

use crate::domain::gateways::FundamentalsProvider;
use crate::domain::models::company::{CompanyHistory, StatementPeriod, Symbol};
use crate::shared::errors::UseCaseError;

/// Use case for getting the revenue / net income history of a company
pub struct GetCompanyHistoryUseCase {
    fundamentals_provider: Arc<dyn FundamentalsProvider>,
}

impl GetCompanyHistoryUseCase {
    /// Create a new GetCompanyHistoryUseCase
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
    /// Returns `UseCaseError::NotFound` if the upstream has no income
    /// statements for the symbol.
    /// Returns `UseCaseError::Provider` if the upstream request fails.
    pub async fn execute(
        &self,
        symbol: &Symbol,
        years: u32,
    ) -> Result<CompanyHistory, UseCaseError> {
        tracing::debug!(%symbol, years, "Getting company history");

        let rows = self
            .fundamentals_provider
            .income_statements(symbol, StatementPeriod::Annual, years)
            .await?;

        if rows.is_empty() {
            tracing::warn!(%symbol, "No income statement data found");
            return Err(UseCaseError::NotFound {
                resource: "Income statements".to_string(),
                id: symbol.to_string(),
            });
        }

        let history = CompanyHistory::from_rows(symbol.clone(), rows);

        tracing::debug!(%symbol, points = history.points().len(), "History built");
        Ok(history)
    }
}
