//! Risk labels for a transit estimate against the ischemia window

use serde::{Deserialize, Serialize};

use crate::config::RiskConfig;
use crate::types::TransitHours;

/// How close an option runs to the viability deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitRisk {
    Low,
    Moderate,
    High,
    ExceedsIschemia,
    /// No estimate (mode unavailable)
    NotApplicable,
}

impl TransitRisk {
    pub fn classify(hours: TransitHours, max_ischemia_hours: f64, bands: &RiskConfig) -> Self {
        let Some(h) = hours.hours() else {
            return TransitRisk::NotApplicable;
        };
        let margin = max_ischemia_hours - h;
        if margin < 0.0 {
            TransitRisk::ExceedsIschemia
        } else if margin < bands.high_margin_hours {
            TransitRisk::High
        } else if margin < bands.moderate_margin_hours {
            TransitRisk::Moderate
        } else {
            TransitRisk::Low
        }
    }
}

impl std::fmt::Display for TransitRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitRisk::Low => write!(f, "Low"),
            TransitRisk::Moderate => write!(f, "Moderate"),
            TransitRisk::High => write!(f, "High"),
            TransitRisk::ExceedsIschemia => write!(f, "Very High (exceeds ischemia)"),
            TransitRisk::NotApplicable => write!(f, "N/A"),
        }
    }
}
