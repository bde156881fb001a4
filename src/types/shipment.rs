//! Shipment requests and the per-mode inputs supplied by availability providers

use serde::{Deserialize, Serialize};

use super::{DecisionError, TransportMode};

/// Most urgent tier.
pub const URGENCY_TIER_MIN: u8 = 1;
/// Least urgent tier.
pub const URGENCY_TIER_MAX: u8 = 5;

/// One organ shipment to route. Immutable once validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShipmentRequest {
    distance_km: f64,
    max_ischemia_hours: f64,
    urgency_tier: u8,
}

impl ShipmentRequest {
    /// Validate and build a request.
    ///
    /// Rejects non-positive or non-finite distance and ischemia window, and
    /// urgency tiers outside `1..=5`.
    pub fn new(
        distance_km: f64,
        max_ischemia_hours: f64,
        urgency_tier: u8,
    ) -> Result<Self, DecisionError> {
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(DecisionError::invalid(
                "distance_km",
                format!("must be a finite value > 0 (got {distance_km})"),
            ));
        }
        if !max_ischemia_hours.is_finite() || max_ischemia_hours <= 0.0 {
            return Err(DecisionError::invalid(
                "max_ischemia_hours",
                format!("must be a finite value > 0 (got {max_ischemia_hours})"),
            ));
        }
        if !(URGENCY_TIER_MIN..=URGENCY_TIER_MAX).contains(&urgency_tier) {
            return Err(DecisionError::invalid(
                "urgency_tier",
                format!("must be in {URGENCY_TIER_MIN}..={URGENCY_TIER_MAX} (got {urgency_tier})"),
            ));
        }
        Ok(Self {
            distance_km,
            max_ischemia_hours,
            urgency_tier,
        })
    }

    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub const fn max_ischemia_hours(&self) -> f64 {
        self.max_ischemia_hours
    }

    pub const fn urgency_tier(&self) -> u8 {
        self.urgency_tier
    }
}

/// Hospital ↔ airport transfer durations for an air mode (hours).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GroundLegs {
    pub to_origin_airport_hours: f64,
    pub from_destination_airport_hours: f64,
}

impl GroundLegs {
    pub const fn new(to_origin_airport_hours: f64, from_destination_airport_hours: f64) -> Self {
        Self {
            to_origin_airport_hours,
            from_destination_airport_hours,
        }
    }

    pub fn total(&self) -> f64 {
        self.to_origin_airport_hours + self.from_destination_airport_hours
    }

    fn validate(&self) -> Result<(), DecisionError> {
        for value in [self.to_origin_airport_hours, self.from_destination_airport_hours] {
            if !value.is_finite() || value < 0.0 {
                return Err(DecisionError::invalid(
                    "ground_legs",
                    format!("transfer durations must be finite and >= 0 (got {value})"),
                ));
            }
        }
        Ok(())
    }
}

/// What a provider knows about one mode for one request.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModeInputs {
    /// Capacity / schedule allow this mode at all
    pub available: bool,
    /// Present only in cost-aware variants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    /// Airport transfers; ignored for ground
    #[serde(default)]
    pub ground_legs: GroundLegs,
}

impl ModeInputs {
    pub const fn available(ground_legs: GroundLegs) -> Self {
        Self {
            available: true,
            estimated_cost: None,
            ground_legs,
        }
    }

    pub const fn unavailable() -> Self {
        Self {
            available: false,
            estimated_cost: None,
            ground_legs: GroundLegs::new(0.0, 0.0),
        }
    }

    #[must_use]
    pub const fn with_cost(mut self, cost: f64) -> Self {
        self.estimated_cost = Some(cost);
        self
    }
}

/// Availability, cost and transfer inputs for all three modes of one request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySnapshot {
    pub ground: ModeInputs,
    pub commercial_air: ModeInputs,
    pub dedicated_air: ModeInputs,
    /// Commercial route exists at all (before schedule check)
    #[serde(default)]
    pub commercial_offered: bool,
    /// Estimated departure falls inside the operating window
    #[serde(default)]
    pub commercial_schedule_ok: bool,
}

impl AvailabilitySnapshot {
    /// Snapshot from already-combined per-mode inputs. The commercial
    /// schedule flags mirror `commercial_air.available`.
    pub const fn from_modes(ground: ModeInputs, commercial_air: ModeInputs, dedicated_air: ModeInputs) -> Self {
        Self {
            ground,
            commercial_air,
            dedicated_air,
            commercial_offered: commercial_air.available,
            commercial_schedule_ok: commercial_air.available,
        }
    }

    pub const fn get(&self, mode: TransportMode) -> &ModeInputs {
        match mode {
            TransportMode::Ground => &self.ground,
            TransportMode::CommercialAir => &self.commercial_air,
            TransportMode::DedicatedAir => &self.dedicated_air,
        }
    }

    /// Reject negative or non-finite provider values.
    pub fn validate(&self) -> Result<(), DecisionError> {
        for mode in TransportMode::ALL {
            let inputs = self.get(mode);
            inputs.ground_legs.validate()?;
            if let Some(cost) = inputs.estimated_cost {
                if !cost.is_finite() || cost < 0.0 {
                    return Err(DecisionError::invalid(
                        "estimated_cost",
                        format!("{mode} cost must be finite and >= 0 (got {cost})"),
                    ));
                }
            }
        }
        Ok(())
    }
}
