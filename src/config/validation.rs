//! Config validation: unknown-key detection with Levenshtein suggestions
//! and range checks.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Unknown keys never break a config.

use std::collections::HashSet;

use super::{OverrideMargin, TransportConfig};

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for TransportConfig.
///
/// Maintained by hand to match the struct hierarchy in transport_config.rs.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [ground]
        "ground",
        "ground.speed_kmh",
        // [commercial_air] / [dedicated_air]
        "commercial_air",
        "commercial_air.cruise_speed_kmh",
        "commercial_air.ground_handling_hours",
        "dedicated_air",
        "dedicated_air.cruise_speed_kmh",
        "dedicated_air.ground_handling_hours",
        // [selection]
        "selection",
        "selection.priority_order",
        "selection.urgent_tier_max",
        "selection.cost_aware",
        "selection.long_haul",
        "selection.long_haul.distance_threshold_km",
        "selection.long_haul.tight_deadline_hours",
        "selection.long_haul.urgent_tier_max",
        "selection.long_haul.margin",
        "selection.long_haul.margin.kind",
        "selection.long_haul.margin.hours",
        "selection.long_haul.margin.fraction",
        // [risk]
        "risk",
        "risk.high_margin_hours",
        "risk.moderate_margin_hours",
        // [synthesis]
        "synthesis",
        "synthesis.distance_min_km",
        "synthesis.distance_max_km",
        "synthesis.ischemia_choices_hours",
        "synthesis.ground_leg_min_hours",
        "synthesis.ground_leg_max_hours",
        "synthesis.commercial",
        "synthesis.commercial.min_distance_km",
        "synthesis.commercial.short_haul_km",
        "synthesis.commercial.short_haul_rejection",
        "synthesis.commercial.long_haul_rejection",
        "synthesis.commercial.window_start_hour",
        "synthesis.commercial.window_end_hour",
        "synthesis.commercial.prep_min_hours",
        "synthesis.commercial.prep_max_hours",
        "synthesis.commercial.off_window_acceptance",
        "synthesis.dedicated",
        "synthesis.dedicated.base_chance",
        "synthesis.dedicated.medium_distance_km",
        "synthesis.dedicated.medium_distance_bonus",
        "synthesis.dedicated.long_distance_km",
        "synthesis.dedicated.long_distance_bonus",
        "synthesis.dedicated.urgent_bonus",
        "synthesis.dedicated.tight_deadline_hours",
        "synthesis.dedicated.tight_deadline_bonus",
        "synthesis.dedicated.no_commercial_bonus",
        "synthesis.dedicated.no_commercial_distance_km",
        "synthesis.dedicated.no_commercial_deadline_hours",
        "synthesis.dedicated.max_chance",
        "synthesis.costs",
        "synthesis.costs.ground_fixed",
        "synthesis.costs.ground_per_km",
        "synthesis.costs.commercial_fixed",
        "synthesis.costs.commercial_per_km",
        "synthesis.costs.dedicated_fixed",
        "synthesis.costs.dedicated_per_km",
        // [server]
        "server",
        "server.addr",
        "server.default_ground_leg_hours",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively collects all dotted key paths of a `toml::Value` tree.
///
/// A table `{ a = { b = 1, c = 2 } }` yields `["a", "a.b", "a.c"]`.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let Some(table) = value.as_table() else {
        return Vec::new();
    };
    let mut keys = Vec::with_capacity(table.len());
    for (k, v) in table {
        let path = if prefix.is_empty() {
            k.clone()
        } else {
            format!("{prefix}.{k}")
        };
        if v.is_table() {
            keys.extend(walk_toml_keys(v, &path));
        }
        keys.push(path);
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Edit distance between two strings, counted in chars.
fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ca != *cb);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }

    row[b.len()]
}

/// Closest known key within edit distance 3, if any.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|k| (*k, levenshtein(unknown, k)))
        .filter(|(_, d)| *d <= 3)
        .min_by(|(ka, da), (kb, db)| da.cmp(db).then_with(|| ka.cmp(kb)))
        .map(|(k, _)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// Parse errors are left for serde to report.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Range Validation
// ============================================================================

fn require_positive(name: &str, value: f64, errors: &mut Vec<String>) {
    if value <= 0.0 {
        errors.push(format!("{name} = {value} must be > 0"));
    }
}

fn require_non_negative(name: &str, value: f64, errors: &mut Vec<String>) {
    if value < 0.0 {
        errors.push(format!("{name} = {value} cannot be negative"));
    }
}

fn require_probability(name: &str, value: f64, errors: &mut Vec<String>) {
    if !(0.0..=1.0).contains(&value) {
        errors.push(format!("{name} = {value} must be a probability in [0, 1]"));
    }
}

fn require_ordered(lo_name: &str, lo: f64, hi_name: &str, hi: f64, errors: &mut Vec<String>) {
    if hi < lo {
        errors.push(format!("{hi_name} ({hi}) must be >= {lo_name} ({lo})"));
    }
}

/// Validate physical ranges on a parsed TransportConfig.
///
/// Returns (errors, warnings): errors are impossible values that must
/// prevent startup; warnings are suspicious but not fatal.
pub fn validate_ranges(config: &TransportConfig) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Speeds are divisors in the transit model
    require_positive("ground.speed_kmh", config.ground.speed_kmh, &mut errors);
    require_positive(
        "commercial_air.cruise_speed_kmh",
        config.commercial_air.cruise_speed_kmh,
        &mut errors,
    );
    require_positive(
        "dedicated_air.cruise_speed_kmh",
        config.dedicated_air.cruise_speed_kmh,
        &mut errors,
    );
    require_non_negative(
        "commercial_air.ground_handling_hours",
        config.commercial_air.ground_handling_hours,
        &mut errors,
    );
    require_non_negative(
        "dedicated_air.ground_handling_hours",
        config.dedicated_air.ground_handling_hours,
        &mut errors,
    );

    if config.commercial_air.ground_handling_hours < config.dedicated_air.ground_handling_hours {
        warnings.push(ValidationWarning {
            field: "commercial_air.ground_handling_hours".to_string(),
            message: format!(
                "commercial handling ({:.2}h) is below dedicated handling ({:.2}h); check-in and customs usually make it larger",
                config.commercial_air.ground_handling_hours,
                config.dedicated_air.ground_handling_hours
            ),
            suggestion: None,
        });
    }

    let lh = &config.selection.long_haul;
    require_positive("selection.long_haul.distance_threshold_km", lh.distance_threshold_km, &mut errors);
    require_positive("selection.long_haul.tight_deadline_hours", lh.tight_deadline_hours, &mut errors);
    if lh.urgent_tier_max > 5 {
        errors.push(format!(
            "selection.long_haul.urgent_tier_max = {} is outside the urgency range (0-5)",
            lh.urgent_tier_max
        ));
    }
    match lh.margin {
        OverrideMargin::Absolute { hours } => {
            require_non_negative("selection.long_haul.margin.hours", hours, &mut errors);
        }
        OverrideMargin::Relative { fraction } => {
            require_probability("selection.long_haul.margin.fraction", fraction, &mut errors);
        }
    }
    if !(700.0..=800.0).contains(&lh.distance_threshold_km) {
        warnings.push(ValidationWarning {
            field: "selection.long_haul.distance_threshold_km".to_string(),
            message: format!(
                "distance_threshold_km = {:.0} is outside the usual range (700-800 km)",
                lh.distance_threshold_km
            ),
            suggestion: None,
        });
    }

    let risk = &config.risk;
    require_non_negative("risk.high_margin_hours", risk.high_margin_hours, &mut errors);
    require_ordered(
        "risk.high_margin_hours",
        risk.high_margin_hours,
        "risk.moderate_margin_hours",
        risk.moderate_margin_hours,
        &mut errors,
    );

    let s = &config.synthesis;
    require_positive("synthesis.distance_min_km", s.distance_min_km, &mut errors);
    if s.distance_max_km <= s.distance_min_km {
        errors.push(format!(
            "synthesis.distance_max_km ({}) must be > distance_min_km ({})",
            s.distance_max_km, s.distance_min_km
        ));
    }
    if s.ischemia_choices_hours.is_empty() {
        errors.push("synthesis.ischemia_choices_hours must not be empty".to_string());
    }
    if s.ischemia_choices_hours.iter().any(|h| *h <= 0.0) {
        errors.push("synthesis.ischemia_choices_hours must all be > 0".to_string());
    }
    require_non_negative("synthesis.ground_leg_min_hours", s.ground_leg_min_hours, &mut errors);
    require_ordered(
        "synthesis.ground_leg_min_hours",
        s.ground_leg_min_hours,
        "synthesis.ground_leg_max_hours",
        s.ground_leg_max_hours,
        &mut errors,
    );

    let c = &s.commercial;
    require_non_negative("synthesis.commercial.min_distance_km", c.min_distance_km, &mut errors);
    require_probability("synthesis.commercial.short_haul_rejection", c.short_haul_rejection, &mut errors);
    require_probability("synthesis.commercial.long_haul_rejection", c.long_haul_rejection, &mut errors);
    require_probability("synthesis.commercial.off_window_acceptance", c.off_window_acceptance, &mut errors);
    if !(0.0..=24.0).contains(&c.window_start_hour)
        || !(0.0..=24.0).contains(&c.window_end_hour)
        || c.window_start_hour >= c.window_end_hour
    {
        errors.push(format!(
            "synthesis.commercial window [{}, {}) must satisfy 0 <= start < end <= 24",
            c.window_start_hour, c.window_end_hour
        ));
    }
    require_non_negative("synthesis.commercial.prep_min_hours", c.prep_min_hours, &mut errors);
    require_ordered(
        "synthesis.commercial.prep_min_hours",
        c.prep_min_hours,
        "synthesis.commercial.prep_max_hours",
        c.prep_max_hours,
        &mut errors,
    );

    let d = &s.dedicated;
    for (name, value) in [
        ("synthesis.dedicated.base_chance", d.base_chance),
        ("synthesis.dedicated.medium_distance_bonus", d.medium_distance_bonus),
        ("synthesis.dedicated.long_distance_bonus", d.long_distance_bonus),
        ("synthesis.dedicated.urgent_bonus", d.urgent_bonus),
        ("synthesis.dedicated.tight_deadline_bonus", d.tight_deadline_bonus),
        ("synthesis.dedicated.no_commercial_bonus", d.no_commercial_bonus),
        ("synthesis.dedicated.max_chance", d.max_chance),
    ] {
        require_probability(name, value, &mut errors);
    }

    let costs = &s.costs;
    for (name, value) in [
        ("synthesis.costs.ground_fixed", costs.ground_fixed),
        ("synthesis.costs.ground_per_km", costs.ground_per_km),
        ("synthesis.costs.commercial_fixed", costs.commercial_fixed),
        ("synthesis.costs.commercial_per_km", costs.commercial_per_km),
        ("synthesis.costs.dedicated_fixed", costs.dedicated_fixed),
        ("synthesis.costs.dedicated_per_km", costs.dedicated_per_km),
    ] {
        require_non_negative(name, value, &mut errors);
    }

    require_non_negative(
        "server.default_ground_leg_hours",
        config.server.default_ground_leg_hours,
        &mut errors,
    );

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================
