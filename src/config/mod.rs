//! Transport Configuration Module
//!
//! Provides the immutable configuration shared by the transit time model,
//! the decision engine, the synthesis harness and the HTTP service.
//!
//! ## Loading Order
//!
//! 1. `ORGAN_ROUTE_CONFIG` environment variable (path to TOML file)
//! 2. `transport_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! There is no global instance: callers load a `TransportConfig` once and
//! pass it (or an `Arc` of it) into the components that need it.

mod transport_config;
pub mod defaults;
pub mod validation;

pub use transport_config::*;
