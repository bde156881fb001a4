//! Long-haul override: keep ground transport from winning on distances
//! where it is operationally implausible.

use std::cmp::Ordering;

use crate::config::LongHaulConfig;
use crate::types::{ModeCandidate, ShipmentRequest, TransportMode};

/// Order by transit time, then intrinsic priority.
pub(crate) fn by_time(a: &ModeCandidate, b: &ModeCandidate) -> Ordering {
    a.estimated_hours
        .cmp(&b.estimated_hours)
        .then_with(|| a.intrinsic_priority.cmp(&b.intrinsic_priority))
}

/// Air candidate that should replace a ground pick, if any.
///
/// Applies only when `pick` is ground and the distance is strictly above the
/// threshold. The fastest feasible air candidate replaces ground when it is
/// strictly faster, or when it is within the margin and the shipment is
/// pressing (tight deadline or urgent tier).
pub(crate) fn override_ground(
    rule: &LongHaulConfig,
    request: &ShipmentRequest,
    pick: &ModeCandidate,
    feasible: &[ModeCandidate],
) -> Option<ModeCandidate> {
    if pick.mode != TransportMode::Ground || request.distance_km() <= rule.distance_threshold_km {
        return None;
    }
    let ground_hours = pick.estimated_hours.hours()?;

    let air = feasible
        .iter()
        .filter(|c| c.mode.is_air())
        .min_by(|a, b| by_time(a, b))?;
    let air_hours = air.estimated_hours.hours()?;

    let pressing = request.max_ischemia_hours() < rule.tight_deadline_hours
        || request.urgency_tier() <= rule.urgent_tier_max;
    let within_margin = air_hours < ground_hours + rule.margin.allowance(ground_hours);

    if air_hours < ground_hours || (within_margin && pressing) {
        Some(*air)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverrideMargin;
    use crate::types::TransitHours;

    fn candidate(mode: TransportMode, hours: f64, deadline: f64, priority: u8) -> ModeCandidate {
        ModeCandidate::new(mode, true, TransitHours::Finite(hours), deadline, priority)
    }

    #[test]
    fn ignores_non_ground_pick() {
        let rule = LongHaulConfig::default();
        let request = ShipmentRequest::new(2000.0, 30.0, 1).unwrap();
        let dedicated = candidate(TransportMode::DedicatedAir, 9.0, 30.0, 2);
        assert!(override_ground(&rule, &request, &dedicated, &[dedicated]).is_none());
    }

    #[test]
    fn threshold_is_exclusive() {
        let rule = LongHaulConfig::default();
        let request = ShipmentRequest::new(750.0, 30.0, 1).unwrap();
        let ground = candidate(TransportMode::Ground, 10.0, 30.0, 3);
        let air = candidate(TransportMode::DedicatedAir, 10.5, 30.0, 2);
        assert!(override_ground(&rule, &request, &ground, &[ground, air]).is_none());

        let request = ShipmentRequest::new(751.0, 30.0, 1).unwrap();
        let chosen = override_ground(&rule, &request, &ground, &[ground, air]).unwrap();
        assert_eq!(chosen.mode, TransportMode::DedicatedAir);
    }

    #[test]
    fn margin_requires_pressing_shipment() {
        let rule = LongHaulConfig::default();
        let ground = candidate(TransportMode::Ground, 10.0, 30.0, 3);
        let air = candidate(TransportMode::CommercialAir, 10.6, 30.0, 1);

        let relaxed = ShipmentRequest::new(751.0, 30.0, 4).unwrap();
        assert!(override_ground(&rule, &relaxed, &ground, &[ground, air]).is_none());

        let tight = ShipmentRequest::new(751.0, 17.0, 4).unwrap();
        let ground_tight = candidate(TransportMode::Ground, 10.0, 17.0, 3);
        let air_tight = candidate(TransportMode::CommercialAir, 10.6, 17.0, 1);
        assert!(override_ground(&rule, &tight, &ground_tight, &[ground_tight, air_tight]).is_some());
    }

    #[test]
    fn margin_edge_is_strict() {
        let rule = LongHaulConfig::default();
        let request = ShipmentRequest::new(1000.0, 30.0, 1).unwrap();
        let ground = candidate(TransportMode::Ground, 10.0, 30.0, 3);
        let air = candidate(TransportMode::DedicatedAir, 11.0, 30.0, 2);
        assert!(override_ground(&rule, &request, &ground, &[ground, air]).is_none());
    }

    #[test]
    fn relative_margin_scales_with_ground_time() {
        let rule = LongHaulConfig {
            margin: OverrideMargin::Relative { fraction: 0.1 },
            ..LongHaulConfig::default()
        };
        let request = ShipmentRequest::new(1600.0, 30.0, 1).unwrap();
        let ground = candidate(TransportMode::Ground, 20.0, 30.0, 3);
        let air = candidate(TransportMode::DedicatedAir, 21.5, 30.0, 2);
        assert!(override_ground(&rule, &request, &ground, &[ground, air]).is_some());
        let slower = candidate(TransportMode::DedicatedAir, 22.5, 30.0, 2);
        assert!(override_ground(&rule, &request, &ground, &[ground, slower]).is_none());
    }

    #[test]
    fn picks_fastest_air_with_priority_tiebreak() {
        let rule = LongHaulConfig::default();
        let request = ShipmentRequest::new(1000.0, 30.0, 1).unwrap();
        let ground = candidate(TransportMode::Ground, 12.5, 30.0, 3);
        let commercial = candidate(TransportMode::CommercialAir, 13.0, 30.0, 1);
        let dedicated = candidate(TransportMode::DedicatedAir, 13.0, 30.0, 2);
        let chosen = override_ground(&rule, &request, &ground, &[ground, commercial, dedicated]).unwrap();
        assert_eq!(chosen.mode, TransportMode::CommercialAir);
    }
}
