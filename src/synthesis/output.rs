//! Labelled decision records and their CSV / JSON-lines writers

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::types::{AvailabilitySnapshot, Decision, DecisionBranch, ShipmentRequest};

/// Column order of the training dataset.
pub const CSV_HEADER: &str = "distance_km,max_ischemia_hours,urgency_tier,commercial_available,commercial_schedule_compatible,dedicated_available,best_mode";

/// Six features plus the label for one synthesized shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub distance_km: f64,
    pub max_ischemia_hours: f64,
    pub urgency_tier: u8,
    /// A commercial route was offered (before the schedule check)
    pub commercial_available: bool,
    pub commercial_schedule_compatible: bool,
    pub dedicated_available: bool,
    /// Mode code: 0 = ground, 1 = commercial air, 2 = dedicated air
    pub best_mode: u8,
    pub branch: DecisionBranch,
}

impl DecisionRecord {
    pub fn new(request: &ShipmentRequest, snapshot: &AvailabilitySnapshot, decision: &Decision) -> Self {
        Self {
            distance_km: request.distance_km(),
            max_ischemia_hours: request.max_ischemia_hours(),
            urgency_tier: request.urgency_tier(),
            commercial_available: snapshot.commercial_offered,
            commercial_schedule_compatible: snapshot.commercial_schedule_ok,
            dedicated_available: snapshot.dedicated_air.available,
            best_mode: decision.mode.code(),
            branch: decision.branch(),
        }
    }

    fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.distance_km,
            self.max_ischemia_hours,
            self.urgency_tier,
            u8::from(self.commercial_available),
            u8::from(self.commercial_schedule_compatible),
            u8::from(self.dedicated_available),
            self.best_mode
        )
    }
}

/// Header plus one row per record. Booleans are written as 0/1.
pub fn write_csv<W: Write>(out: &mut W, records: &[DecisionRecord]) -> io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for record in records {
        writeln!(out, "{}", record.csv_row())?;
    }
    out.flush()
}

/// One JSON object per line, including the decision branch.
pub fn write_json_lines<W: Write>(out: &mut W, records: &[DecisionRecord]) -> io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
