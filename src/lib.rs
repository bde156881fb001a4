//! organ-route: Deadline-Constrained Transport Selection
//!
//! Chooses ground, commercial air or dedicated air for an organ shipment
//! given its distance, ischemia window and urgency tier.
//!
//! ## Architecture
//!
//! - **Transit Time Model**: Pure per-mode door-to-door estimates
//! - **Decision Engine**: Feasibility filter, time/cost sort, long-haul
//!   override and fallback
//! - **Availability Providers**: Injected availability, cost and airport
//!   transfer inputs (fixed or simulated)
//! - **Synthesis**: Parallel generation of labelled training records
//! - **API**: Axum service exposing decisions and config reload

pub mod api;
pub mod config;
pub mod decision;
pub mod geo;
pub mod provider;
pub mod synthesis;
pub mod transit;
pub mod types;

// Re-export configuration
pub use config::{ConfigError, TransportConfig};

// Re-export core components
pub use decision::DecisionEngine;
pub use transit::{TransitRisk, TransitTimeModel};

// Re-export commonly used types
pub use types::{
    AvailabilitySnapshot, Decision, DecisionBranch, DecisionError, DecisionTrace, GroundLegs,
    ModeCandidate, ModeInputs, Objective, ShipmentRequest, TransitHours, TransportMode,
};
