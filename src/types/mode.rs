//! Transport modes and the saturating transit-time sentinel

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The three ways an organ can travel between facilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    /// Road transport, hospital to hospital
    Ground,
    /// Scheduled commercial flight (cargo hold / courier)
    CommercialAir,
    /// Chartered aircraft dedicated to the shipment
    DedicatedAir,
}

impl TransportMode {
    /// All modes in label-code order.
    pub const ALL: [TransportMode; 3] = [
        TransportMode::Ground,
        TransportMode::CommercialAir,
        TransportMode::DedicatedAir,
    ];

    /// Numeric label used by the training dataset (0 = ground, 1 = commercial, 2 = dedicated).
    pub const fn code(self) -> u8 {
        match self {
            TransportMode::Ground => 0,
            TransportMode::CommercialAir => 1,
            TransportMode::DedicatedAir => 2,
        }
    }

    /// Inverse of [`TransportMode::code`]. Unknown codes yield `None`.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TransportMode::Ground),
            1 => Some(TransportMode::CommercialAir),
            2 => Some(TransportMode::DedicatedAir),
            _ => None,
        }
    }

    pub const fn is_air(self) -> bool {
        matches!(self, TransportMode::CommercialAir | TransportMode::DedicatedAir)
    }

    /// Position in a `[T; 3]` indexed by mode.
    pub const fn index(self) -> usize {
        self.code() as usize
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportMode::Ground => write!(f, "Ground"),
            TransportMode::CommercialAir => write!(f, "Commercial Air"),
            TransportMode::DedicatedAir => write!(f, "Dedicated Air"),
        }
    }
}

/// Estimated door-to-door transit time.
///
/// `Unavailable` compares greater than every finite duration, so sorting
/// never has to deal with float infinities or NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "hours", rename_all = "snake_case")]
pub enum TransitHours {
    Finite(f64),
    Unavailable,
}

impl TransitHours {
    /// Wrap a computed duration. Negative or non-finite values saturate to `Unavailable`.
    pub fn from_hours(hours: f64) -> Self {
        if hours.is_finite() && hours >= 0.0 {
            TransitHours::Finite(hours)
        } else {
            TransitHours::Unavailable
        }
    }

    pub const fn hours(self) -> Option<f64> {
        match self {
            TransitHours::Finite(h) => Some(h),
            TransitHours::Unavailable => None,
        }
    }

    pub const fn is_finite(self) -> bool {
        matches!(self, TransitHours::Finite(_))
    }

    /// True when this duration fits inside `limit_hours`.
    pub fn within(self, limit_hours: f64) -> bool {
        match self {
            TransitHours::Finite(h) => h <= limit_hours,
            TransitHours::Unavailable => false,
        }
    }
}

impl Eq for TransitHours {}

impl PartialOrd for TransitHours {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TransitHours {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (TransitHours::Finite(a), TransitHours::Finite(b)) => a.total_cmp(b),
            (TransitHours::Finite(_), TransitHours::Unavailable) => Ordering::Less,
            (TransitHours::Unavailable, TransitHours::Finite(_)) => Ordering::Greater,
            (TransitHours::Unavailable, TransitHours::Unavailable) => Ordering::Equal,
        }
    }
}

impl std::fmt::Display for TransitHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitHours::Finite(h) => write!(f, "{h:.2}h"),
            TransitHours::Unavailable => write!(f, "unavailable"),
        }
    }
}
