//! Company Domain Model
//!
//! Represents companies and their fundamentals data as served by the API.

use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::errors::DomainError;

lazy_static! {
    /// Regex for validating ticker symbols (letters, digits, dots, dashes)
    static ref SYMBOL_REGEX: Regex = Regex::new(r"^[A-Za-z0-9.\-]{1,10}$").expect("valid regex");
}

/// Newtype wrapper for ticker symbols providing type safety
///
/// Symbols are normalized to uppercase on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Parse and normalize a raw ticker symbol
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSymbol` when the input is empty, longer
    /// than 10 characters, or contains characters outside `[A-Za-z0-9.-]`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if !SYMBOL_REGEX.is_match(trimmed) {
            return Err(DomainError::InvalidSymbol(raw.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Get the symbol as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Symbol {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// Statement reporting period understood by the fundamentals provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementPeriod {
    Annual,
    Quarter,
}

impl StatementPeriod {
    /// Query-parameter value for this period
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
        }
    }
}

impl std::fmt::Display for StatementPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single company search result
#[derive(Debug, Clone)]
pub struct CompanySearchHit {
    pub symbol: String,
    pub name: String,
    pub exchange: Option<String>,
    pub currency: Option<String>,
}

/// Company profile as reported by the fundamentals provider
#[derive(Debug, Clone, Default)]
pub struct CompanyProfile {
    pub name: Option<String>,
    pub currency: Option<String>,
    pub exchange: Option<String>,
}

/// One income statement row (one reporting period)
#[derive(Debug, Clone, Default)]
pub struct IncomeStatementRow {
    pub date: Option<String>,
    pub revenue: Option<f64>,
    pub net_income: Option<f64>,
}

/// One balance sheet row (one reporting period)
#[derive(Debug, Clone, Default)]
pub struct BalanceSheetRow {
    pub date: Option<String>,
    pub total_assets: Option<f64>,
    pub total_liabilities: Option<f64>,
}

/// One cash flow statement row (one reporting period)
#[derive(Debug, Clone, Default)]
pub struct CashFlowRow {
    pub date: Option<String>,
    pub operating_cash_flow: Option<f64>,
}

/// Income highlights carried in a snapshot
#[derive(Debug, Clone, Default)]
pub struct IncomeFigures {
    pub revenue: Option<f64>,
    pub net_income: Option<f64>,
}

/// Balance sheet highlights carried in a snapshot
#[derive(Debug, Clone, Default)]
pub struct BalanceSheetFigures {
    pub total_assets: Option<f64>,
    pub total_liabilities: Option<f64>,
}

/// Cash flow highlights carried in a snapshot
#[derive(Debug, Clone, Default)]
pub struct CashFlowFigures {
    pub operating_cash_flow: Option<f64>,
}

/// Latest fundamentals snapshot for a company
#[derive(Debug, Clone)]
pub struct CompanySnapshot {
    symbol: Symbol,
    name: Option<String>,
    currency: Option<String>,
    exchange: Option<String>,
    as_of: Option<String>,
    income: IncomeFigures,
    balance_sheet: BalanceSheetFigures,
    cash_flow: CashFlowFigures,
}

impl CompanySnapshot {
    /// Assemble a snapshot from a profile and the latest statement rows
    ///
    /// `as_of` is taken from the first statement that carries a date, in the
    /// order income, balance sheet, cash flow. Missing statements leave their
    /// figures unset.
    #[must_use]
    pub fn assemble(
        symbol: Symbol,
        profile: CompanyProfile,
        income: Option<IncomeStatementRow>,
        balance_sheet: Option<BalanceSheetRow>,
        cash_flow: Option<CashFlowRow>,
    ) -> Self {
        let income = income.unwrap_or_default();
        let balance_sheet = balance_sheet.unwrap_or_default();
        let cash_flow = cash_flow.unwrap_or_default();

        let as_of = income
            .date
            .clone()
            .or_else(|| balance_sheet.date.clone())
            .or_else(|| cash_flow.date.clone());

        Self {
            symbol,
            name: profile.name,
            currency: profile.currency,
            exchange: profile.exchange,
            as_of,
            income: IncomeFigures {
                revenue: income.revenue,
                net_income: income.net_income,
            },
            balance_sheet: BalanceSheetFigures {
                total_assets: balance_sheet.total_assets,
                total_liabilities: balance_sheet.total_liabilities,
            },
            cash_flow: CashFlowFigures {
                operating_cash_flow: cash_flow.operating_cash_flow,
            },
        }
    }

    // Getters

    #[must_use]
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    #[must_use]
    pub fn exchange(&self) -> Option<&str> {
        self.exchange.as_deref()
    }

    #[must_use]
    pub fn as_of(&self) -> Option<&str> {
        self.as_of.as_deref()
    }

    #[must_use]
    pub fn income(&self) -> &IncomeFigures {
        &self.income
    }

    #[must_use]
    pub fn balance_sheet(&self) -> &BalanceSheetFigures {
        &self.balance_sheet
    }

    #[must_use]
    pub fn cash_flow(&self) -> &CashFlowFigures {
        &self.cash_flow
    }
}

/// One point of the revenue / net income history series
#[derive(Debug, Clone)]
pub struct HistoryPoint {
    pub date: String,
    pub revenue: Option<f64>,
    pub net_income: Option<f64>,
}

/// Revenue / net income history for a company
#[derive(Debug, Clone)]
pub struct CompanyHistory {
    symbol: Symbol,
    points: Vec<HistoryPoint>,
}

impl CompanyHistory {
    /// Build a history series from income statement rows
    ///
    /// Rows without a date cannot be charted and are skipped. Row order is
    /// preserved (the provider reports newest first).
    #[must_use]
    pub fn from_rows(symbol: Symbol, rows: Vec<IncomeStatementRow>) -> Self {
        let points = rows
            .into_iter()
            .filter_map(|row| {
                row.date.map(|date| HistoryPoint {
                    date,
                    revenue: row.revenue,
                    net_income: row.net_income,
                })
            })
            .collect();

        Self { symbol, points }
    }

    #[must_use]
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    #[must_use]
    pub fn points(&self) -> &[HistoryPoint] {
        &self.points
    }
}
