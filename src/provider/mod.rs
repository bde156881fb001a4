//! Availability providers
//!
//! The decision core never computes availability, cost or airport
//! transfer times itself. A provider supplies them per request:
//!
//! - `FixedAvailability`: caller-supplied values (HTTP requests, tests)
//! - `SimulatedAvailability`: seeded random model for dataset synthesis

mod fixed;
mod simulated;

pub use fixed::FixedAvailability;
pub use simulated::SimulatedAvailability;

use crate::types::{AvailabilitySnapshot, ShipmentRequest};

/// Source of per-mode availability for a shipment.
pub trait AvailabilityProvider: Send {
    /// Availability, cost and ground legs for all three modes.
    fn snapshot(&mut self, request: &ShipmentRequest) -> AvailabilitySnapshot;

    /// Human-readable name for logging (e.g. "fixed", "simulated").
    fn provider_name(&self) -> &str;
}
