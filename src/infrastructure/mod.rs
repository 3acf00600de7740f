//! Infrastructure Layer
//!
//! Contains all external concerns: driving adapters (HTTP handlers) and
//! driven adapters (upstream API clients, configuration).

pub mod driven_adapters;
pub mod driving_adapters;
