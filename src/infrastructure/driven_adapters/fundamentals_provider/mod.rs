//! Fundamentals Provider Adapters
//!
//! Driven adapters implementing the `FundamentalsProvider` gateway.

pub mod fmp;

pub use fmp::FmpFundamentalsProvider;
