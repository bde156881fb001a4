//! Per-mode option listing shown alongside a decision

use serde::Serialize;

use crate::transit::{TransitRisk, TransitTimeModel};
use crate::types::{AvailabilitySnapshot, Decision, ShipmentRequest, TransitHours, TransportMode};

/// One row of the option listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionSummary {
    pub mode: TransportMode,
    pub available: bool,
    pub estimated_hours: TransitHours,
    pub feasible: bool,
    pub risk: TransitRisk,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
}

pub(crate) fn describe_options(
    transit: &TransitTimeModel<'_>,
    request: &ShipmentRequest,
    snapshot: &AvailabilitySnapshot,
) -> Vec<OptionSummary> {
    let deadline = request.max_ischemia_hours();
    TransportMode::ALL
        .iter()
        .map(|&mode| {
            let inputs = snapshot.get(mode);
            if !inputs.available {
                return OptionSummary {
                    mode,
                    available: false,
                    estimated_hours: TransitHours::Unavailable,
                    feasible: false,
                    risk: TransitRisk::NotApplicable,
                    details: unavailable_reason(mode, snapshot).to_string(),
                    estimated_cost: inputs.estimated_cost,
                };
            }

            let breakdown = transit.breakdown(mode, request.distance_km(), &inputs.ground_legs);
            OptionSummary {
                mode,
                available: true,
                estimated_hours: breakdown.total,
                feasible: breakdown.total.within(deadline),
                risk: transit.classify_risk(breakdown.total, deadline),
                details: breakdown.details(),
                estimated_cost: inputs.estimated_cost,
            }
        })
        .collect()
}

fn unavailable_reason(mode: TransportMode, snapshot: &AvailabilitySnapshot) -> &'static str {
    match mode {
        TransportMode::CommercialAir
            if snapshot.commercial_offered && !snapshot.commercial_schedule_ok =>
        {
            "Available, but outside the compatible flight window."
        }
        _ => "Unavailable.",
    }
}

/// One-line verdict over the listing and the selected mode.
pub fn overall_assessment(decision: &Decision, options: &[OptionSummary]) -> String {
    if !options.iter().any(|o| o.feasible) {
        return "ALERT: no transport option fits within the maximum ischemia time.".to_string();
    }
    match options.iter().find(|o| o.mode == decision.mode) {
        Some(o) => format!("Selected option ({}) has risk: {}.", o.mode, o.risk),
        None => format!("Selected option ({}).", decision.mode),
    }
}
