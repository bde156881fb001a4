//! Random availability model used to synthesize training data.
//!
//! - Commercial flights exist only above a minimum distance and are
//!   rejected with a distance-dependent probability
//! - An offered flight is usable when the estimated departure falls inside
//!   the operating window, or by a small off-window chance
//! - Charter availability accumulates situational bonuses up to a cap
//! - Ground is always available; airport transfers are uniform per leg

use rand::prelude::*;

use super::AvailabilityProvider;
use crate::config::TransportConfig;
use crate::types::{AvailabilitySnapshot, GroundLegs, ModeInputs, ShipmentRequest, TransportMode};

pub struct SimulatedAvailability<'a, R: Rng = StdRng> {
    config: &'a TransportConfig,
    rng: R,
}

impl<'a> SimulatedAvailability<'a, StdRng> {
    /// Reproducible provider.
    pub fn seeded(config: &'a TransportConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<'a, R: Rng> SimulatedAvailability<'a, R> {
    pub fn with_rng(config: &'a TransportConfig, rng: R) -> Self {
        Self { config, rng }
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if lo.is_finite() && hi.is_finite() && hi > lo {
            self.rng.gen_range(lo..=hi)
        } else {
            lo
        }
    }

    fn ground_leg(&mut self) -> f64 {
        let config = self.config;
        let s = &config.synthesis;
        self.uniform(s.ground_leg_min_hours, s.ground_leg_max_hours)
    }

    /// (route offered, departure fits the schedule)
    fn commercial(&mut self, distance_km: f64) -> (bool, bool) {
        let config = self.config;
        let c = &config.synthesis.commercial;
        let rejection = if distance_km < c.short_haul_km {
            c.short_haul_rejection
        } else {
            c.long_haul_rejection
        };
        let offered = distance_km > c.min_distance_km && self.rng.gen::<f64>() > rejection;

        // Clock and prep time are drawn even when no route is offered
        let now = f64::from(self.rng.gen_range(0u8..24));
        let departure = (now + self.uniform(c.prep_min_hours, c.prep_max_hours)) % 24.0;

        let schedule_ok = offered
            && ((c.window_start_hour..c.window_end_hour).contains(&departure)
                || self.rng.gen::<f64>() < c.off_window_acceptance);
        (offered, schedule_ok)
    }

    fn dedicated_chance(&self, request: &ShipmentRequest, commercial_usable: bool) -> f64 {
        let d = &self.config.synthesis.dedicated;
        let distance = request.distance_km();
        let deadline = request.max_ischemia_hours();

        let mut chance = d.base_chance;
        if distance > d.medium_distance_km {
            chance += d.medium_distance_bonus;
        }
        if distance > d.long_distance_km {
            chance += d.long_distance_bonus;
        }
        if request.urgency_tier() <= self.config.selection.urgent_tier_max {
            chance += d.urgent_bonus;
        }
        if deadline <= d.tight_deadline_hours {
            chance += d.tight_deadline_bonus;
        }
        if !commercial_usable
            && (distance > d.no_commercial_distance_km || deadline <= d.no_commercial_deadline_hours)
        {
            chance += d.no_commercial_bonus;
        }
        chance.min(d.max_chance)
    }

    fn cost(&self, mode: TransportMode, distance_km: f64) -> Option<f64> {
        self.config
            .selection
            .cost_aware
            .then(|| self.config.synthesis.costs.estimate(mode, distance_km))
    }
}

impl<R: Rng + Send> AvailabilityProvider for SimulatedAvailability<'_, R> {
    fn snapshot(&mut self, request: &ShipmentRequest) -> AvailabilitySnapshot {
        let distance = request.distance_km();
        let legs = GroundLegs::new(self.ground_leg(), self.ground_leg());

        let (offered, schedule_ok) = self.commercial(distance);
        let dedicated_chance = self.dedicated_chance(request, offered && schedule_ok);
        let dedicated = self.rng.gen::<f64>() < dedicated_chance;

        let inputs = |available: bool, legs: GroundLegs, mode: TransportMode| ModeInputs {
            available,
            estimated_cost: self.cost(mode, distance),
            ground_legs: legs,
        };

        AvailabilitySnapshot {
            ground: inputs(true, GroundLegs::default(), TransportMode::Ground),
            commercial_air: inputs(offered && schedule_ok, legs, TransportMode::CommercialAir),
            dedicated_air: inputs(dedicated, legs, TransportMode::DedicatedAir),
            commercial_offered: offered,
            commercial_schedule_ok: schedule_ok,
        }
    }

    fn provider_name(&self) -> &str {
        "simulated"
    }
}
