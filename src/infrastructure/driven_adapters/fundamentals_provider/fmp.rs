//! Financial Modeling Prep Provider Implementation
//!
//! Implements the FundamentalsProvider trait against the FMP stable API
//! using reqwest.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::gateways::FundamentalsProvider;
use crate::domain::models::company::{
    BalanceSheetRow, CashFlowRow, CompanyProfile, CompanySearchHit, IncomeStatementRow,
    StatementPeriod, Symbol,
};
use crate::shared::errors::ProviderError;

/// Exchange filter applied to symbol searches
const SEARCH_EXCHANGE_FILTER: &str = "NASDAQ,NYSE,AMEX";

/// Maximum number of upstream body characters kept in error messages
const ERROR_BODY_LIMIT: usize = 200;

/// Wire row for the search-symbol endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchRow {
    symbol: Option<String>,
    name: Option<String>,
    company_name: Option<String>,
    stock_exchange: Option<String>,
    currency: Option<String>,
}

impl SearchRow {
    /// Map the row to a search hit, dropping rows without a symbol or name
    fn into_hit(self) -> Option<CompanySearchHit> {
        let symbol = self.symbol?;
        let name = self.name.or(self.company_name)?;
        Some(CompanySearchHit {
            symbol,
            name,
            exchange: self.stock_exchange,
            currency: self.currency,
        })
    }
}

/// Wire row for the profile endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileRow {
    company_name: Option<String>,
    name: Option<String>,
    currency: Option<String>,
    exchange_short_name: Option<String>,
    exchange: Option<String>,
}

impl From<ProfileRow> for CompanyProfile {
    fn from(row: ProfileRow) -> Self {
        Self {
            name: row.company_name.or(row.name),
            currency: row.currency,
            exchange: row.exchange_short_name.or(row.exchange),
        }
    }
}

/// Wire row for the income-statement endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IncomeRow {
    date: Option<String>,
    revenue: Option<f64>,
    #[serde(rename = "revenueTTM")]
    revenue_ttm: Option<f64>,
    net_income: Option<f64>,
    #[serde(rename = "netIncomeTTM")]
    net_income_ttm: Option<f64>,
}

impl From<IncomeRow> for IncomeStatementRow {
    fn from(row: IncomeRow) -> Self {
        Self {
            date: row.date,
            revenue: row.revenue.or(row.revenue_ttm),
            net_income: row.net_income.or(row.net_income_ttm),
        }
    }
}

/// Wire row for the balance-sheet-statement endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BalanceRow {
    date: Option<String>,
    total_assets: Option<f64>,
    total_liabilities: Option<f64>,
}

impl From<BalanceRow> for BalanceSheetRow {
    fn from(row: BalanceRow) -> Self {
        Self {
            date: row.date,
            total_assets: row.total_assets,
            total_liabilities: row.total_liabilities,
        }
    }
}

/// Wire row for the cash-flow-statement endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CashRow {
    date: Option<String>,
    operating_cash_flow: Option<f64>,
    #[serde(rename = "operatingCashFlowTTM")]
    operating_cash_flow_ttm: Option<f64>,
}

impl From<CashRow> for CashFlowRow {
    fn from(row: CashRow) -> Self {
        Self {
            date: row.date,
            operating_cash_flow: row.operating_cash_flow.or(row.operating_cash_flow_ttm),
        }
    }
}

/// FMP implementation of FundamentalsProvider
pub struct FmpFundamentalsProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FmpFundamentalsProvider {
    /// Create a new FmpFundamentalsProvider
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Perform a GET against an FMP endpoint and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        tracing::debug!(endpoint, "Requesting FMP endpoint");
        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(ERROR_BODY_LIMIT)
                .collect();
            tracing::warn!(endpoint, status = status.as_u16(), "FMP request failed");
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(ProviderError::from)
    }

    /// Common parameters for statement endpoints
    async fn statement_rows<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        symbol: &Symbol,
        period: StatementPeriod,
        limit: u32,
    ) -> Result<Vec<T>, ProviderError> {
        let limit = limit.to_string();
        self.get_json(
            endpoint,
            &[
                ("symbol", symbol.as_str()),
                ("period", period.as_str()),
                ("limit", &limit),
            ],
        )
        .await
    }
}

#[async_trait]
impl FundamentalsProvider for FmpFundamentalsProvider {
    async fn search(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<CompanySearchHit>, ProviderError> {
        let limit = limit.to_string();
        let rows: Vec<SearchRow> = self
            .get_json(
                "search-symbol",
                &[
                    ("query", query),
                    ("limit", &limit),
                    ("exchange", SEARCH_EXCHANGE_FILTER),
                ],
            )
            .await?;

        Ok(rows.into_iter().filter_map(SearchRow::into_hit).collect())
    }

    async fn profile(&self, symbol: &Symbol) -> Result<Option<CompanyProfile>, ProviderError> {
        let rows: Vec<ProfileRow> = self
            .get_json("profile", &[("symbol", symbol.as_str())])
            .await?;

        Ok(rows.into_iter().next().map(CompanyProfile::from))
    }

    async fn income_statements(
        &self,
        symbol: &Symbol,
        period: StatementPeriod,
        limit: u32,
    ) -> Result<Vec<IncomeStatementRow>, ProviderError> {
        let rows: Vec<IncomeRow> = self
            .statement_rows("income-statement", symbol, period, limit)
            .await?;

        Ok(rows.into_iter().map(IncomeStatementRow::from).collect())
    }

    async fn balance_sheets(
        &self,
        symbol: &Symbol,
        period: StatementPeriod,
        limit: u32,
    ) -> Result<Vec<BalanceSheetRow>, ProviderError> {
        let rows: Vec<BalanceRow> = self
            .statement_rows("balance-sheet-statement", symbol, period, limit)
            .await?;

        Ok(rows.into_iter().map(BalanceSheetRow::from).collect())
    }

    async fn cash_flow_statements(
        &self,
        symbol: &Symbol,
        period: StatementPeriod,
        limit: u32,
    ) -> Result<Vec<CashFlowRow>, ProviderError> {
        let rows: Vec<CashRow> = self
            .statement_rows("cash-flow-statement", symbol, period, limit)
            .await?;

        Ok(rows.into_iter().map(CashFlowRow::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer) -> FmpFundamentalsProvider {
        FmpFundamentalsProvider::new(reqwest::Client::new(), &server.uri(), "test-api-key")
    }

    #[tokio::test]
    async fn search_maps_rows_and_passes_filters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search-symbol"))
            .and(query_param("query", "apple"))
            .and(query_param("limit", "10"))
            .and(query_param("exchange", "NASDAQ,NYSE,AMEX"))
            .and(query_param("apikey", "test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "symbol": "AAPL",
                    "name": "Apple Inc.",
                    "stockExchange": "NASDAQ",
                    "currency": "USD"
                },
                {
                    "symbol": "APLE",
                    "companyName": "Apple Hospitality REIT, Inc.",
                    "stockExchange": "NYSE",
                    "currency": "USD"
                }
            ])))
            .mount(&server)
            .await;

        let hits = provider(&server).search("apple", 10).await.unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].symbol, "AAPL");
        assert_eq!(hits[0].name, "Apple Inc.");
        // name falls back to companyName
        assert_eq!(hits[1].name, "Apple Hospitality REIT, Inc.");
    }

    #[tokio::test]
    async fn search_drops_rows_without_symbol_or_name() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search-symbol"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"symbol": "AAPL", "name": "Apple Inc."},
                {"name": "No Symbol Corp."},
                {"symbol": "NONAME"}
            ])))
            .mount(&server)
            .await;

        let hits = provider(&server).search("a", 10).await.unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].symbol, "AAPL");
    }

    #[tokio::test]
    async fn profile_returns_first_row_with_fallbacks() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/profile"))
            .and(query_param("symbol", "AAPL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "companyName": "Apple Inc.",
                    "currency": "USD",
                    "exchangeShortName": "NASDAQ"
                }
            ])))
            .mount(&server)
            .await;

        let symbol = Symbol::parse("AAPL").unwrap();
        let profile = provider(&server).profile(&symbol).await.unwrap().unwrap();

        assert_eq!(profile.name.as_deref(), Some("Apple Inc."));
        assert_eq!(profile.exchange.as_deref(), Some("NASDAQ"));
    }

    #[tokio::test]
    async fn profile_returns_none_on_empty_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let symbol = Symbol::parse("ZZZZ").unwrap();
        let profile = provider(&server).profile(&symbol).await.unwrap();

        assert!(profile.is_none());
    }

    #[tokio::test]
    async fn income_statements_apply_ttm_fallbacks() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/income-statement"))
            .and(query_param("symbol", "AAPL"))
            .and(query_param("period", "annual"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "date": "2024-09-28",
                    "revenueTTM": 391035000000.0,
                    "netIncomeTTM": 93736000000.0
                }
            ])))
            .mount(&server)
            .await;

        let symbol = Symbol::parse("AAPL").unwrap();
        let rows = provider(&server)
            .income_statements(&symbol, StatementPeriod::Annual, 1)
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].revenue, Some(391_035_000_000.0));
        assert_eq!(rows[0].net_income, Some(93_736_000_000.0));
    }

    #[tokio::test]
    async fn upstream_error_carries_status_and_truncated_body() {
        let server = MockServer::start().await;

        let long_body = "x".repeat(500);
        Mock::given(method("GET"))
            .and(path("/profile"))
            .respond_with(ResponseTemplate::new(403).set_body_string(long_body))
            .mount(&server)
            .await;

        let symbol = Symbol::parse("AAPL").unwrap();
        let err = provider(&server).profile(&symbol).await.unwrap_err();

        match err {
            ProviderError::Upstream { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body.len(), 200);
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn base_url_trailing_slash_is_trimmed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cash-flow-statement"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"date": "2024-09-28", "operatingCashFlow": 118254000000.0}
            ])))
            .mount(&server)
            .await;

        let base = format!("{}/", server.uri());
        let provider = FmpFundamentalsProvider::new(reqwest::Client::new(), &base, "test-api-key");

        let symbol = Symbol::parse("AAPL").unwrap();
        let rows = provider
            .cash_flow_statements(&symbol, StatementPeriod::Annual, 1)
            .await
            .unwrap();

        assert_eq!(rows[0].operating_cash_flow, Some(118_254_000_000.0));
    }
}
