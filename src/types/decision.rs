//! Candidates, decisions and the audit trace

use serde::{Deserialize, Serialize};

use super::{TransitHours, TransportMode};

/// One mode as seen by the decision engine for a single request.
///
/// Built fresh per request; never mutated or reused.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeCandidate {
    pub mode: TransportMode,
    pub available: bool,
    pub estimated_hours: TransitHours,
    pub feasible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    /// Tie-break rank, 1 = preferred
    pub intrinsic_priority: u8,
}

impl ModeCandidate {
    /// Build a candidate, deriving `feasible` from the deadline.
    ///
    /// An unavailable mode always carries `TransitHours::Unavailable`.
    pub fn new(
        mode: TransportMode,
        available: bool,
        estimated_hours: TransitHours,
        max_ischemia_hours: f64,
        intrinsic_priority: u8,
    ) -> Self {
        let estimated_hours = if available {
            estimated_hours
        } else {
            TransitHours::Unavailable
        };
        Self {
            mode,
            available,
            estimated_hours,
            feasible: available && estimated_hours.within(max_ischemia_hours),
            estimated_cost: None,
            intrinsic_priority,
        }
    }

    #[must_use]
    pub const fn with_cost(mut self, cost: Option<f64>) -> Self {
        self.estimated_cost = cost;
        self
    }
}

/// Which part of the algorithm produced the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionBranch {
    /// Best feasible candidate by the active objective
    FeasibleSort,
    /// Ground pick replaced by an air candidate on a long haul
    LongHaulOverride,
    /// Nothing met the deadline; fastest available (or ground) chosen
    Fallback,
}

impl std::fmt::Display for DecisionBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecisionBranch::FeasibleSort => write!(f, "feasible_sort"),
            DecisionBranch::LongHaulOverride => write!(f, "long_haul_override"),
            DecisionBranch::Fallback => write!(f, "fallback"),
        }
    }
}

/// Sort objective used for the feasible set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    Time,
    Cost,
}

/// Audit record of how a decision was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTrace {
    pub branch: DecisionBranch,
    pub objective: Objective,
    /// Mode chosen by the primary sort before any override
    pub primary_pick: TransportMode,
    /// Fallback found no available mode and defaulted to ground
    pub defaulted_to_ground: bool,
    pub feasible_modes: Vec<TransportMode>,
    pub candidates: [ModeCandidate; 3],
}

/// Selected mode plus its trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub mode: TransportMode,
    pub trace: DecisionTrace,
}

impl Decision {
    pub const fn branch(&self) -> DecisionBranch {
        self.trace.branch
    }

    /// Candidate entry for the selected mode.
    pub fn selected(&self) -> Option<&ModeCandidate> {
        self.trace.candidates.iter().find(|c| c.mode == self.mode)
    }
}
