use super::AvailabilityProvider;
use crate::types::{AvailabilitySnapshot, ShipmentRequest};

/// Returns the same snapshot for every request.
#[derive(Debug, Clone, Copy)]
pub struct FixedAvailability {
    snapshot: AvailabilitySnapshot,
}

impl FixedAvailability {
    pub const fn new(snapshot: AvailabilitySnapshot) -> Self {
        Self { snapshot }
    }
}

impl AvailabilityProvider for FixedAvailability {
    fn snapshot(&mut self, _request: &ShipmentRequest) -> AvailabilitySnapshot {
        self.snapshot
    }

    fn provider_name(&self) -> &str {
        "fixed"
    }
}
