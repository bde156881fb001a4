//! Decision Engine Property Tests
//!
//! Exercises the selector through its public API over grids of availability,
//! distance and deadline rather than single hand-picked cases.

use organ_route::config::{OverrideMargin, TransportConfig};
use organ_route::{
    AvailabilitySnapshot, DecisionBranch, DecisionEngine, GroundLegs, ModeCandidate, ModeInputs,
    Objective, ShipmentRequest, TransitHours, TransportMode,
};

const LEGS: GroundLegs = GroundLegs::new(0.5, 0.5);

fn request(distance: f64, deadline: f64, urgency: u8) -> ShipmentRequest {
    ShipmentRequest::new(distance, deadline, urgency).unwrap()
}

fn inputs(available: bool) -> ModeInputs {
    if available {
        ModeInputs::available(LEGS)
    } else {
        ModeInputs::unavailable()
    }
}

/// Every combination of (ground, commercial, dedicated) availability.
fn availability_grid() -> Vec<[bool; 3]> {
    (0u8..8)
        .map(|bits| [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0])
        .collect()
}

fn snapshot(flags: [bool; 3]) -> AvailabilitySnapshot {
    AvailabilitySnapshot::from_modes(inputs(flags[0]), inputs(flags[1]), inputs(flags[2]))
}

/// Candidates with explicit hours; `None` marks the mode unavailable.
fn fixed(config: &TransportConfig, req: &ShipmentRequest, hours: [Option<f64>; 3]) -> [ModeCandidate; 3] {
    TransportMode::ALL.map(|mode| {
        let h = hours[mode.index()];
        ModeCandidate::new(
            mode,
            h.is_some(),
            h.map_or(TransitHours::Unavailable, TransitHours::Finite),
            req.max_ischemia_hours(),
            config.intrinsic_priority(mode),
        )
    })
}

// ============================================================================
// Totality and feasibility
// ============================================================================

#[test]
fn every_input_yields_exactly_one_mode() {
    let config = TransportConfig::default();
    let engine = DecisionEngine::new(&config);

    for flags in availability_grid() {
        for distance in [60.0, 400.0, 751.0, 1500.0, 3900.0] {
            for deadline in [2.0, 6.0, 12.0, 24.0, 48.0] {
                for urgency in 1..=5 {
                    let req = request(distance, deadline, urgency);
                    let d = engine.evaluate(&req, &snapshot(flags)).unwrap();

                    let any_feasible = !d.trace.feasible_modes.is_empty();
                    if any_feasible {
                        assert!(
                            d.trace.feasible_modes.contains(&d.mode),
                            "{flags:?} {distance} {deadline} {urgency}: {} not feasible",
                            d.mode
                        );
                        assert_ne!(d.branch(), DecisionBranch::Fallback);
                    } else {
                        assert_eq!(d.branch(), DecisionBranch::Fallback);
                    }

                    let selected = d.selected().unwrap();
                    assert_eq!(selected.mode, d.mode);
                    if flags.iter().any(|f| *f) {
                        assert!(selected.available);
                        assert!(!d.trace.defaulted_to_ground);
                    }
                }
            }
        }
    }
}

#[test]
fn nothing_available_defaults_to_ground() {
    let config = TransportConfig::default();
    let engine = DecisionEngine::new(&config);
    let req = request(1200.0, 6.0, 1);

    let d = engine.evaluate(&req, &snapshot([false, false, false])).unwrap();
    assert_eq!(d.mode, TransportMode::Ground);
    assert_eq!(d.branch(), DecisionBranch::Fallback);
    assert!(d.trace.defaulted_to_ground);
    assert!(d.trace.feasible_modes.is_empty());
}

#[test]
fn time_objective_without_override_picks_fastest_available() {
    // At or below the long-haul threshold the override never fires, so under
    // the time objective the deadline only decides the branch, never the mode.
    let config = TransportConfig::default();
    let engine = DecisionEngine::new(&config);

    for flags in availability_grid().into_iter().filter(|f| f.iter().any(|a| *a)) {
        for distance in [80.0, 300.0, 600.0, 750.0] {
            let reference = engine.evaluate(&request(distance, 48.0, 1), &snapshot(flags)).unwrap();
            for deadline in [0.5, 1.0, 2.0, 4.0, 8.0, 12.0, 24.0] {
                let req = request(distance, deadline, 1);
                let d = engine.evaluate(&req, &snapshot(flags)).unwrap();
                assert_eq!(d.trace.objective, Objective::Time);
                assert_eq!(
                    d.mode, reference.mode,
                    "{flags:?} at {distance} km changed mode with deadline {deadline}"
                );
                assert_ne!(d.branch(), DecisionBranch::LongHaulOverride);
            }
        }
    }
}

#[test]
fn larger_deadline_never_shrinks_feasible_set() {
    let config = TransportConfig::default();
    let engine = DecisionEngine::new(&config);
    let all = snapshot([true, true, true]);

    for distance in [100.0, 700.0, 2500.0] {
        let mut previous = 0;
        for deadline in [1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0] {
            let d = engine.evaluate(&request(distance, deadline, 3), &all).unwrap();
            assert!(d.trace.feasible_modes.len() >= previous);
            previous = d.trace.feasible_modes.len();
        }
    }
}

// ============================================================================
// Worked scenarios
// ============================================================================

#[test]
fn urgent_long_distance_picks_dedicated() {
    let config = TransportConfig::default();
    let engine = DecisionEngine::new(&config);
    let req = request(2000.0, 8.0, 1);

    let d = engine.decide(&req, &fixed(&config, &req, [Some(25.7), Some(6.5), Some(5.2)]));
    assert_eq!(d.mode, TransportMode::DedicatedAir);
    assert_eq!(d.branch(), DecisionBranch::FeasibleSort);
    assert_eq!(
        d.trace.feasible_modes,
        vec![TransportMode::CommercialAir, TransportMode::DedicatedAir]
    );
}

#[test]
fn fallback_picks_fastest_infeasible() {
    let config = TransportConfig::default();
    let engine = DecisionEngine::new(&config);
    let req = request(3000.0, 4.0, 3);

    let d = engine.decide(&req, &fixed(&config, &req, [Some(42.8), Some(5.5), Some(5.8)]));
    assert_eq!(d.mode, TransportMode::CommercialAir);
    assert_eq!(d.branch(), DecisionBranch::Fallback);
    assert!(!d.trace.defaulted_to_ground);
}

#[test]
fn faster_air_beats_ground_on_long_haul() {
    let config = TransportConfig::default();
    let engine = DecisionEngine::new(&config);
    let req = request(751.0, 12.0, 1);

    // Time sort already prefers the faster flight; no override involved
    let d = engine.decide(&req, &fixed(&config, &req, [Some(10.0), None, Some(9.5)]));
    assert_eq!(d.mode, TransportMode::DedicatedAir);
    assert_eq!(d.branch(), DecisionBranch::FeasibleSort);
    assert_eq!(d.trace.primary_pick, TransportMode::DedicatedAir);
}

#[test]
fn slower_air_within_margin_replaces_ground_for_urgent_tier() {
    let config = TransportConfig::default();
    let engine = DecisionEngine::new(&config);
    let req = request(800.0, 30.0, 1);

    let d = engine.decide(&req, &fixed(&config, &req, [Some(10.0), None, Some(10.6)]));
    assert_eq!(d.trace.objective, Objective::Time);
    assert_eq!(d.mode, TransportMode::DedicatedAir);
    assert_eq!(d.branch(), DecisionBranch::LongHaulOverride);
    assert_eq!(d.trace.primary_pick, TransportMode::Ground);
}

#[test]
fn slower_air_keeps_ground_for_relaxed_shipment() {
    let config = TransportConfig::default();
    let engine = DecisionEngine::new(&config);
    let req = request(800.0, 30.0, 4);

    let d = engine.decide(&req, &fixed(&config, &req, [Some(10.0), None, Some(10.6)]));
    assert_eq!(d.trace.objective, Objective::Time);
    assert_eq!(d.mode, TransportMode::Ground);
    assert_eq!(d.branch(), DecisionBranch::FeasibleSort);
}

#[test]
fn unavailable_candidates_carry_no_transit_time() {
    let config = TransportConfig::default();
    let engine = DecisionEngine::new(&config);
    let req = request(900.0, 12.0, 2);

    // Hand-built candidate flipped to unavailable after construction
    let mut candidates = fixed(&config, &req, [Some(11.25), Some(3.1), Some(3.0)]);
    candidates[2].available = false;

    let d = engine.decide(&req, &candidates);
    assert_eq!(d.mode, TransportMode::CommercialAir);
    let dedicated = &d.trace.candidates[TransportMode::DedicatedAir.index()];
    assert_eq!(dedicated.estimated_hours, TransitHours::Unavailable);
    assert!(!dedicated.feasible);
}

// ============================================================================
// Long-haul override through the cost objective
// ============================================================================

fn cost_aware() -> TransportConfig {
    let mut config = TransportConfig::default();
    config.selection.cost_aware = true;
    config
}

/// Ground cheapest, commercial faster.
fn priced_snapshot() -> AvailabilitySnapshot {
    AvailabilitySnapshot::from_modes(
        ModeInputs::available(GroundLegs::default()).with_cost(100.0),
        ModeInputs::available(LEGS).with_cost(2000.0),
        ModeInputs::unavailable(),
    )
}

#[test]
fn override_requires_distance_strictly_above_threshold() {
    let config = cost_aware();
    let engine = DecisionEngine::new(&config);

    let at = engine.evaluate(&request(750.0, 12.0, 5), &priced_snapshot()).unwrap();
    assert_eq!(at.trace.objective, Objective::Cost);
    assert_eq!(at.mode, TransportMode::Ground);
    assert_eq!(at.branch(), DecisionBranch::FeasibleSort);

    let above = engine.evaluate(&request(751.0, 12.0, 5), &priced_snapshot()).unwrap();
    assert_eq!(above.mode, TransportMode::CommercialAir);
    assert_eq!(above.branch(), DecisionBranch::LongHaulOverride);
    assert_eq!(above.trace.primary_pick, TransportMode::Ground);
}

#[test]
fn urgent_tiers_ignore_cost() {
    let config = cost_aware();
    let engine = DecisionEngine::new(&config);

    let d = engine.evaluate(&request(500.0, 12.0, 2), &priced_snapshot()).unwrap();
    assert_eq!(d.trace.objective, Objective::Time);
    assert_eq!(d.mode, TransportMode::CommercialAir);
}

#[test]
fn margin_rule_needs_tight_deadline_or_urgent_tier() {
    // Air 0.6h slower than ground: only the margin clause can replace ground.
    let mut config = cost_aware();
    config.selection.long_haul.margin = OverrideMargin::Absolute { hours: 1.0 };
    let engine = DecisionEngine::new(&config);

    let relaxed = request(800.0, 30.0, 4);
    let mut candidates = fixed(&config, &relaxed, [Some(10.0), None, Some(10.6)]);
    candidates[0] = candidates[0].with_cost(Some(500.0));
    candidates[2] = candidates[2].with_cost(Some(9000.0));
    assert_eq!(engine.decide(&relaxed, &candidates).mode, TransportMode::Ground);

    let tight = request(800.0, 17.0, 4);
    let mut candidates = fixed(&config, &tight, [Some(10.0), None, Some(10.6)]);
    candidates[0] = candidates[0].with_cost(Some(500.0));
    candidates[2] = candidates[2].with_cost(Some(9000.0));
    let d = engine.decide(&tight, &candidates);
    assert_eq!(d.mode, TransportMode::DedicatedAir);
    assert_eq!(d.branch(), DecisionBranch::LongHaulOverride);
}
