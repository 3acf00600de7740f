//! Company Use Cases
//!
//! Business logic for searching companies and reading their fundamentals.

mod get_company_history;
mod get_company_snapshot;
mod search_companies;

pub use get_company_history::GetCompanyHistoryUseCase;
pub use get_company_snapshot::GetCompanySnapshotUseCase;
pub use search_companies::SearchCompaniesUseCase;
