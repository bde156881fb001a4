//! Transit Time Model
//!
//! Deterministic door-to-door time estimates per transport mode.
//! All math here is pure: no state, no randomness. Ground-leg durations
//! for the air modes are supplied by the caller.
//!
//! - Ground: `distance / ground.speed_kmh`
//! - Air: `leg_to_origin + distance / cruise_speed + handling + leg_from_destination`
//!
//! Unknown wire codes estimate to `TransitHours::Unavailable`, never an error.

mod risk;

pub use risk::TransitRisk;

use serde::Serialize;

use crate::config::TransportConfig;
use crate::types::{GroundLegs, TransitHours, TransportMode};

/// Itemized transit estimate for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitBreakdown {
    pub mode: TransportMode,
    pub distance_km: f64,
    /// Speed used for the distance component (km/h)
    pub speed_kmh: f64,
    /// Hospital ↔ airport transfers, zero for ground
    pub ground_legs_hours: f64,
    /// Fixed airport overhead, zero for ground
    pub handling_hours: f64,
    /// Distance component: driving or flying time
    pub travel_hours: f64,
    pub total: TransitHours,
}

impl TransitBreakdown {
    /// Human-readable summary of the components.
    pub fn details(&self) -> String {
        match self.mode {
            TransportMode::Ground => format!(
                "Distance: {:.1} km. Average speed: {:.0} km/h.",
                self.distance_km, self.speed_kmh
            ),
            TransportMode::CommercialAir | TransportMode::DedicatedAir => format!(
                "Airport transfers (total): {:.2}h. Airport handling: {:.2}h. Flight ({:.1} km @ {:.0} km/h): {:.2}h.",
                self.ground_legs_hours,
                self.handling_hours,
                self.distance_km,
                self.speed_kmh,
                self.travel_hours
            ),
        }
    }
}

/// Mode timing model bound to one configuration snapshot.
#[derive(Debug, Clone, Copy)]
pub struct TransitTimeModel<'a> {
    config: &'a TransportConfig,
}

impl<'a> TransitTimeModel<'a> {
    pub const fn new(config: &'a TransportConfig) -> Self {
        Self { config }
    }

    /// Estimated total hours for `mode`. Legs are ignored for ground.
    pub fn estimate(&self, mode: TransportMode, distance_km: f64, legs: &GroundLegs) -> TransitHours {
        self.breakdown(mode, distance_km, legs).total
    }

    /// Estimate by raw mode code (0 = ground, 1 = commercial, 2 = dedicated).
    pub fn estimate_code(&self, code: u8, distance_km: f64, legs: &GroundLegs) -> TransitHours {
        match TransportMode::from_code(code) {
            Some(mode) => self.estimate(mode, distance_km, legs),
            None => TransitHours::Unavailable,
        }
    }

    /// Component-wise estimate.
    pub fn breakdown(&self, mode: TransportMode, distance_km: f64, legs: &GroundLegs) -> TransitBreakdown {
        let (speed_kmh, ground_legs_hours, handling_hours) = match mode {
            TransportMode::Ground => (self.config.ground.speed_kmh, 0.0, 0.0),
            TransportMode::CommercialAir => (
                self.config.commercial_air.cruise_speed_kmh,
                legs.total(),
                self.config.commercial_air.ground_handling_hours,
            ),
            TransportMode::DedicatedAir => (
                self.config.dedicated_air.cruise_speed_kmh,
                legs.total(),
                self.config.dedicated_air.ground_handling_hours,
            ),
        };

        let travel_hours = distance_km / speed_kmh;
        TransitBreakdown {
            mode,
            distance_km,
            speed_kmh,
            ground_legs_hours,
            handling_hours,
            travel_hours,
            total: TransitHours::from_hours(ground_legs_hours + handling_hours + travel_hours),
        }
    }

    /// Risk label from the spare time left inside the ischemia window.
    pub fn classify_risk(&self, hours: TransitHours, max_ischemia_hours: f64) -> TransitRisk {
        TransitRisk::classify(hours, max_ischemia_hours, &self.config.risk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: TransitHours, b: f64) -> bool {
        a.hours().is_some_and(|h| (h - b).abs() < 1e-9)
    }

    #[test]
    fn ground_is_distance_over_speed() {
        let config = TransportConfig::default();
        let model = TransitTimeModel::new(&config);
        let legs = GroundLegs::new(5.0, 5.0);
        assert!(approx(model.estimate(TransportMode::Ground, 800.0, &legs), 10.0));
    }

    #[test]
    fn air_modes_add_legs_and_handling() {
        let config = TransportConfig::default();
        let model = TransitTimeModel::new(&config);
        let legs = GroundLegs::new(0.5, 0.5);
        // 1.0 legs + 1600/800 + 1.0 handling
        assert!(approx(model.estimate(TransportMode::CommercialAir, 1600.0, &legs), 4.0));
        // 1.0 legs + 1400/700 + 0.75 handling
        assert!(approx(model.estimate(TransportMode::DedicatedAir, 1400.0, &legs), 3.75));
    }

    #[test]
    fn unknown_code_is_unavailable() {
        let config = TransportConfig::default();
        let model = TransitTimeModel::new(&config);
        let legs = GroundLegs::default();
        assert_eq!(model.estimate_code(7, 100.0, &legs), TransitHours::Unavailable);
        assert!(approx(model.estimate_code(0, 160.0, &legs), 2.0));
    }

    #[test]
    fn monotonic_in_distance() {
        let config = TransportConfig::default();
        let model = TransitTimeModel::new(&config);
        let legs = GroundLegs::new(0.4, 0.6);
        for mode in TransportMode::ALL {
            let mut prev = TransitHours::Finite(0.0);
            for km in (0..40).map(|i| f64::from(i) * 100.0) {
                let h = model.estimate(mode, km, &legs);
                assert!(h >= prev, "{mode} not monotonic at {km} km");
                prev = h;
            }
        }
    }

    #[test]
    fn breakdown_components_sum_to_total() {
        let config = TransportConfig::default();
        let model = TransitTimeModel::new(&config);
        let b = model.breakdown(TransportMode::CommercialAir, 2000.0, &GroundLegs::new(0.3, 0.7));
        let sum = b.ground_legs_hours + b.handling_hours + b.travel_hours;
        assert!(approx(b.total, sum));
        assert!(b.details().contains("2000.0 km @ 800 km/h"));
    }

    #[test]
    fn zero_speed_saturates() {
        let mut config = TransportConfig::default();
        config.ground.speed_kmh = 0.0;
        let model = TransitTimeModel::new(&config);
        assert_eq!(
            model.estimate(TransportMode::Ground, 100.0, &GroundLegs::default()),
            TransitHours::Unavailable
        );
    }
}
