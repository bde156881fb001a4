//! Shared data structures for transport mode selection
//!
//! - `TransportMode` / `TransitHours`: modes and the saturating time sentinel
//! - `ShipmentRequest`, `AvailabilitySnapshot`: validated inputs
//! - `ModeCandidate`, `Decision`, `DecisionTrace`: engine outputs
//! - `DecisionError`: input validation failures

mod decision;
mod error;
mod mode;
mod shipment;

pub use decision::*;
pub use error::*;
pub use mode::*;
pub use shipment::*;
