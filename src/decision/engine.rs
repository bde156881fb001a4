//! Core DecisionEngine: selects exactly one transport mode per shipment

use std::cmp::Ordering;

use tracing::debug;

use super::long_haul::{by_time, override_ground};
use super::options::{OptionSummary, describe_options};
use crate::config::TransportConfig;
use crate::transit::TransitTimeModel;
use crate::types::{
    AvailabilitySnapshot, Decision, DecisionBranch, DecisionError, DecisionTrace, ModeCandidate,
    Objective, ShipmentRequest, TransitHours, TransportMode,
};

/// Order by cost (missing costs last), then time, then priority.
fn by_cost(a: &ModeCandidate, b: &ModeCandidate) -> Ordering {
    let cost = match (a.estimated_cost, b.estimated_cost) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    cost.then_with(|| by_time(a, b))
}

/// Stateless selector bound to one configuration snapshot.
///
/// `Send + Sync`; share one engine across threads or build one per request.
#[derive(Debug, Clone, Copy)]
pub struct DecisionEngine<'a> {
    config: &'a TransportConfig,
    transit: TransitTimeModel<'a>,
}

impl<'a> DecisionEngine<'a> {
    pub const fn new(config: &'a TransportConfig) -> Self {
        Self {
            config,
            transit: TransitTimeModel::new(config),
        }
    }

    /// Objective for a request's urgency tier.
    pub fn objective(&self, request: &ShipmentRequest) -> Objective {
        let selection = &self.config.selection;
        if selection.cost_aware && request.urgency_tier() > selection.urgent_tier_max {
            Objective::Cost
        } else {
            Objective::Time
        }
    }

    /// Select a mode from three prepared candidates. Total: never fails.
    ///
    /// Feasibility is re-derived from the request's deadline, and unavailable
    /// candidates are reset to `TransitHours::Unavailable`.
    pub fn decide(&self, request: &ShipmentRequest, candidates: &[ModeCandidate; 3]) -> Decision {
        let deadline = request.max_ischemia_hours();
        let candidates = candidates.map(|c| {
            let estimated_hours = if c.available {
                c.estimated_hours
            } else {
                TransitHours::Unavailable
            };
            ModeCandidate {
                estimated_hours,
                feasible: c.available && estimated_hours.within(deadline),
                ..c
            }
        });
        let feasible: Vec<ModeCandidate> = candidates.iter().copied().filter(|c| c.feasible).collect();
        let feasible_modes: Vec<TransportMode> = feasible.iter().map(|c| c.mode).collect();
        let objective = self.objective(request);

        let ordering: fn(&ModeCandidate, &ModeCandidate) -> Ordering = match objective {
            Objective::Time => by_time,
            Objective::Cost => by_cost,
        };

        let (mode, branch, primary_pick, defaulted_to_ground) =
            match feasible.iter().min_by(|a, b| ordering(a, b)) {
                Some(pick) => {
                    match override_ground(&self.config.selection.long_haul, request, pick, &feasible) {
                        Some(air) => {
                            debug!(
                                distance_km = request.distance_km(),
                                ground = %pick.estimated_hours,
                                air = %air.estimated_hours,
                                "Long-haul override: {} replaces Ground",
                                air.mode
                            );
                            (air.mode, DecisionBranch::LongHaulOverride, pick.mode, false)
                        }
                        None => (pick.mode, DecisionBranch::FeasibleSort, pick.mode, false),
                    }
                }
                None => {
                    let fastest = candidates
                        .iter()
                        .filter(|c| c.available)
                        .min_by(|a, b| by_time(a, b));
                    match fastest {
                        Some(c) => (c.mode, DecisionBranch::Fallback, c.mode, false),
                        None => (TransportMode::Ground, DecisionBranch::Fallback, TransportMode::Ground, true),
                    }
                }
            };

        debug!(
            mode = %mode,
            branch = %branch,
            objective = ?objective,
            feasible = feasible_modes.len(),
            "Transport mode selected"
        );

        Decision {
            mode,
            trace: DecisionTrace {
                branch,
                objective,
                primary_pick,
                defaulted_to_ground,
                feasible_modes,
                candidates,
            },
        }
    }

    /// Build the three candidates for a request from provider inputs.
    pub fn candidates(
        &self,
        request: &ShipmentRequest,
        snapshot: &AvailabilitySnapshot,
    ) -> [ModeCandidate; 3] {
        TransportMode::ALL.map(|mode| {
            let inputs = snapshot.get(mode);
            let hours = self.transit.estimate(mode, request.distance_km(), &inputs.ground_legs);
            ModeCandidate::new(
                mode,
                inputs.available,
                hours,
                request.max_ischemia_hours(),
                self.config.intrinsic_priority(mode),
            )
            .with_cost(inputs.estimated_cost)
        })
    }

    /// Validate provider inputs, estimate each mode and decide.
    pub fn evaluate(
        &self,
        request: &ShipmentRequest,
        snapshot: &AvailabilitySnapshot,
    ) -> Result<Decision, DecisionError> {
        snapshot.validate()?;
        Ok(self.decide(request, &self.candidates(request, snapshot)))
    }

    /// Per-mode listing: estimate breakdown, risk label and feasibility.
    pub fn options(
        &self,
        request: &ShipmentRequest,
        snapshot: &AvailabilitySnapshot,
    ) -> Result<Vec<OptionSummary>, DecisionError> {
        snapshot.validate()?;
        Ok(describe_options(&self.transit, request, snapshot))
    }
}
