//! Get Company Snapshot Use Case
//!
//! Assembles the latest annual fundamentals snapshot for a company.

use std::sync::Arc;

use crate::domain::gateways::FundamentalsProvider;
use crate::domain::models::company::{CompanySnapshot, StatementPeriod, Symbol};
use crate::shared::errors::UseCaseError;

/// Use case for getting the latest fundamentals snapshot
pub struct GetCompanySnapshotUseCase {
    fundamentals_provider: Arc<dyn FundamentalsProvider>,
}

impl GetCompanySnapshotUseCase {
    /// Create a new GetCompanySnapshotUseCase
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
    /// Returns `UseCaseError::NotFound` if the upstream has no profile for the symbol.
    /// Returns `UseCaseError::Provider` if an upstream request fails.
    pub async fn execute(&self, symbol: &Symbol) -> Result<CompanySnapshot, UseCaseError> {
        tracing::debug!(%symbol, "Getting company snapshot");

        let profile = self
            .fundamentals_provider
            .profile(symbol)
            .await?
            .ok_or_else(|| {
                tracing::warn!(%symbol, "Company profile not found");
                UseCaseError::NotFound {
                    resource: "Company profile".to_string(),
                    id: symbol.to_string(),
                }
            })?;

        // The three statements are independent reads, fetch them together.
        let (income, balance_sheet, cash_flow) = tokio::try_join!(
            self.fundamentals_provider
                .income_statements(symbol, StatementPeriod::Annual, 1),
            self.fundamentals_provider
                .balance_sheets(symbol, StatementPeriod::Annual, 1),
            self.fundamentals_provider
                .cash_flow_statements(symbol, StatementPeriod::Annual, 1),
        )?;

        let snapshot = CompanySnapshot::assemble(
            symbol.clone(),
            profile,
            income.into_iter().next(),
            balance_sheet.into_iter().next(),
            cash_flow.into_iter().next(),
        );

        tracing::debug!(%symbol, as_of = ?snapshot.as_of(), "Snapshot assembled");
        Ok(snapshot)
    }
}
