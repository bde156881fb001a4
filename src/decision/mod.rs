//! Decision Engine
//!
//! Picks exactly one transport mode per shipment:
//!
//! 1. Feasibility filter: available and within the ischemia window
//! 2. Primary sort over the feasible set, by time for urgent tiers
//!    (or when cost is not tracked) and by cost otherwise
//! 3. Long-haul override of a ground pick above the distance threshold
//! 4. Fallback to the fastest available mode, or ground when nothing is
//!    available
//!
//! The engine holds no state between decisions; invalid input is rejected
//! before the algorithm runs.

mod engine;
mod long_haul;
mod options;

pub use engine::DecisionEngine;
pub use options::{OptionSummary, overall_assessment};
