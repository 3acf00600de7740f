//! API Handlers
//!
//! HTTP handlers for the REST API.

pub mod companies;
pub mod health;
