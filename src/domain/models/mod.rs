//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod company;

pub use company::{
    BalanceSheetRow, CashFlowRow, CompanyHistory, CompanyProfile, CompanySearchHit,
    CompanySnapshot, HistoryPoint, IncomeStatementRow, StatementPeriod, Symbol,
};
