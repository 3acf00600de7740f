//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod company;

pub use company::{
    CompanyHistoryResponseDto, CompanySearchItemDto, CompanySearchResponseDto, CompanySnapshotDto,
    HistoryParams, SearchCompaniesParams,
};
