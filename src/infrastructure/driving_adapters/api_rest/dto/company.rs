//! Company DTOs
//!
//! Data transfer objects for company API endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::company::{CompanyHistory, CompanySearchHit, CompanySnapshot};

/// Default result count for company search
fn default_search_limit() -> u32 {
    10
}

/// Default number of years returned by the history endpoint
fn default_history_years() -> u32 {
    5
}

/// Query parameters for company search
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchCompaniesParams {
    #[validate(length(min = 1, max = 100, message = "q must be between 1 and 100 characters"))]
    pub q: String,

    #[serde(default = "default_search_limit")]
    #[validate(range(min = 1, max = 50, message = "limit must be between 1 and 50"))]
    pub limit: u32,
}

/// Query parameters for company history
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HistoryParams {
    #[serde(default = "default_history_years")]
    #[validate(range(min = 1, max = 20, message = "years must be between 1 and 20"))]
    pub years: u32,
}

/// One company search result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySearchItemDto {
    pub symbol: String,
    pub name: String,
    pub exchange: Option<String>,
    pub currency: Option<String>,
}

impl From<CompanySearchHit> for CompanySearchItemDto {
    fn from(hit: CompanySearchHit) -> Self {
        Self {
            symbol: hit.symbol,
            name: hit.name,
            exchange: hit.exchange,
            currency: hit.currency,
        }
    }
}

/// Company search response
#[derive(Debug, Clone, Serialize)]
pub struct CompanySearchResponseDto {
    pub results: Vec<CompanySearchItemDto>,
}

impl From<Vec<CompanySearchHit>> for CompanySearchResponseDto {
    fn from(hits: Vec<CompanySearchHit>) -> Self {
        Self {
            results: hits.into_iter().map(CompanySearchItemDto::from).collect(),
        }
    }
}

/// Income highlights in a snapshot response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSnapshotDto {
    pub revenue: Option<f64>,
    pub net_income: Option<f64>,
}

/// Balance sheet highlights in a snapshot response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetSnapshotDto {
    pub total_assets: Option<f64>,
    pub total_liabilities: Option<f64>,
}

/// Cash flow highlights in a snapshot response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSnapshotDto {
    pub operating_cash_flow: Option<f64>,
}

/// Company snapshot response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySnapshotDto {
    pub symbol: String,
    pub name: Option<String>,
    pub currency: Option<String>,
    pub exchange: Option<String>,
    pub as_of: Option<String>,
    pub income: IncomeSnapshotDto,
    pub balance_sheet: BalanceSheetSnapshotDto,
    pub cash_flow: CashFlowSnapshotDto,
}

impl From<CompanySnapshot> for CompanySnapshotDto {
    fn from(snapshot: CompanySnapshot) -> Self {
        Self {
            symbol: snapshot.symbol().to_string(),
            name: snapshot.name().map(str::to_string),
            currency: snapshot.currency().map(str::to_string),
            exchange: snapshot.exchange().map(str::to_string),
            as_of: snapshot.as_of().map(str::to_string),
            income: IncomeSnapshotDto {
                revenue: snapshot.income().revenue,
                net_income: snapshot.income().net_income,
            },
            balance_sheet: BalanceSheetSnapshotDto {
                total_assets: snapshot.balance_sheet().total_assets,
                total_liabilities: snapshot.balance_sheet().total_liabilities,
            },
            cash_flow: CashFlowSnapshotDto {
                operating_cash_flow: snapshot.cash_flow().operating_cash_flow,
            },
        }
    }
}

/// One point in a history response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPointDto {
    pub date: String,
    pub revenue: Option<f64>,
    pub net_income: Option<f64>,
}

/// Company history response
#[derive(Debug, Clone, Serialize)]
pub struct CompanyHistoryResponseDto {
    pub symbol: String,
    pub points: Vec<HistoryPointDto>,
}

impl From<CompanyHistory> for CompanyHistoryResponseDto {
    fn from(history: CompanyHistory) -> Self {
        Self {
            symbol: history.symbol().to_string(),
            points: history
                .points()
                .iter()
                .map(|p| HistoryPointDto {
                    date: p.date.clone(),
                    revenue: p.revenue,
                    net_income: p.net_income,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_defaults() {
        let params: SearchCompaniesParams = serde_json::from_str(r#"{"q":"apple"}"#).unwrap();
        assert_eq!(params.limit, 10);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_search_params_rejects_empty_query() {
        let params: SearchCompaniesParams = serde_json::from_str(r#"{"q":""}"#).unwrap();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_search_params_rejects_out_of_range_limit() {
        let params: SearchCompaniesParams =
            serde_json::from_str(r#"{"q":"apple","limit":0}"#).unwrap();
        assert!(params.validate().is_err());

        let params: SearchCompaniesParams =
            serde_json::from_str(r#"{"q":"apple","limit":51}"#).unwrap();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_history_params_defaults_and_bounds() {
        let params: HistoryParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.years, 5);
        assert!(params.validate().is_ok());

        let params: HistoryParams = serde_json::from_str(r#"{"years":21}"#).unwrap();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_snapshot_dto_serializes_camel_case() {
        use crate::domain::models::company::{
            CompanyProfile, IncomeStatementRow, Symbol,
        };

        let snapshot = CompanySnapshot::assemble(
            Symbol::parse("AAPL").unwrap(),
            CompanyProfile {
                name: Some("Apple Inc.".to_string()),
                currency: Some("USD".to_string()),
                exchange: Some("NASDAQ".to_string()),
            },
            Some(IncomeStatementRow {
                date: Some("2024-09-28".to_string()),
                revenue: Some(391_035_000_000.0),
                net_income: Some(93_736_000_000.0),
            }),
            None,
            None,
        );

        let value = serde_json::to_value(CompanySnapshotDto::from(snapshot)).unwrap();
        assert_eq!(value["symbol"], "AAPL");
        assert_eq!(value["asOf"], "2024-09-28");
        assert_eq!(value["income"]["netIncome"], 93_736_000_000.0);
        assert_eq!(value["balanceSheet"]["totalAssets"], serde_json::Value::Null);
        assert_eq!(
            value["cashFlow"]["operatingCashFlow"],
            serde_json::Value::Null
        );
    }
}
