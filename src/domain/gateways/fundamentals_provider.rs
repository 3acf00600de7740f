//! Fundamentals Provider Gateway
//!
//! Abstract trait defining the contract for fetching company fundamentals
//! from an upstream data vendor.

use async_trait::async_trait;

use crate::domain::models::company::{
    BalanceSheetRow, CashFlowRow, CompanyProfile, CompanySearchHit, IncomeStatementRow,
    StatementPeriod, Symbol,
};
use crate::shared::errors::ProviderError;

/// Gateway trait for company fundamentals data
#[async_trait]
pub trait FundamentalsProvider: Send + Sync {
    /// Search companies by name or ticker symbol
    async fn search(&self, query: &str, limit: u32)
        -> Result<Vec<CompanySearchHit>, ProviderError>;

    /// Fetch the company profile, if the symbol is known upstream
    async fn profile(&self, symbol: &Symbol) -> Result<Option<CompanyProfile>, ProviderError>;

    /// Fetch income statement rows, newest first
    async fn income_statements(
        &self,
        symbol: &Symbol,
        period: StatementPeriod,
        limit: u32,
    ) -> Result<Vec<IncomeStatementRow>, ProviderError>;

    /// Fetch balance sheet rows, newest first
    async fn balance_sheets(
        &self,
        symbol: &Symbol,
        period: StatementPeriod,
        limit: u32,
    ) -> Result<Vec<BalanceSheetRow>, ProviderError>;

    /// Fetch cash flow statement rows, newest first
    async fn cash_flow_statements(
        &self,
        symbol: &Symbol,
        period: StatementPeriod,
        limit: u32,
    ) -> Result<Vec<CashFlowRow>, ProviderError>;
}
