//! Company Fundamentals API
//!
//! A Rust-based microservice wrapping Financial Modeling Prep fundamentals
//! endpoints, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
