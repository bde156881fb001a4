//! Transport Configuration - speeds, handling overheads and selection tunables
//!
//! Every constant the selector depends on lives here as an operator-tunable
//! TOML value. Each struct implements `Default` with the representative
//! configuration, so an absent file yields the stock behaviour.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults::{CONFIG_ENV_VAR, LOCAL_CONFIG_FILE};
use crate::types::TransportMode;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration.
///
/// Load with `TransportConfig::load()` which searches:
/// 1. `$ORGAN_ROUTE_CONFIG` env var
/// 2. `./transport_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Road transport
    #[serde(default)]
    pub ground: GroundConfig,

    /// Scheduled commercial flights
    #[serde(default)]
    pub commercial_air: CommercialAirConfig,

    /// Chartered flights
    #[serde(default)]
    pub dedicated_air: DedicatedAirConfig,

    /// Decision engine tunables
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Margin bands for the per-option risk label
    #[serde(default)]
    pub risk: RiskConfig,

    /// Random data-synthesis harness
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// HTTP service
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            ground: GroundConfig::default(),
            commercial_air: CommercialAirConfig::default(),
            dedicated_air: DedicatedAirConfig::default(),
            selection: SelectionConfig::default(),
            risk: RiskConfig::default(),
            synthesis: SynthesisConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl TransportConfig {
    /// Load configuration using the standard search order:
    /// 1. `$ORGAN_ROUTE_CONFIG` environment variable
    /// 2. `./transport_config.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded transport config from {}", CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {}, falling back", CONFIG_ENV_VAR);
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", CONFIG_ENV_VAR);
            }
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded transport config from ./{}", LOCAL_CONFIG_FILE);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", LOCAL_CONFIG_FILE);
                }
            }
        }

        info!("No {} found, using built-in defaults", LOCAL_CONFIG_FILE);
        Self::default()
    }

    /// First existing file in the search order, if any.
    pub fn search_path() -> Option<PathBuf> {
        std::env::var(CONFIG_ENV_VAR)
            .ok()
            .map(PathBuf::from)
            .into_iter()
            .chain(std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE)))
            .find(|p| p.exists())
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate a TOML document. Unknown keys are logged, not rejected.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }
        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(PathBuf::from("<inline>"), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate internal consistency.
    ///
    /// Rules:
    /// - Every numeric value must be finite
    /// - Priority order must name each mode exactly once
    /// - Speeds and margins must be in their physical ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        for (name, value) in self.numeric_fields() {
            if !value.is_finite() {
                errors.push(format!("{name} must be a finite number (got {value})"));
            }
        }

        let order = &self.selection.priority_order;
        for mode in TransportMode::ALL {
            let count = order.iter().filter(|m| **m == mode).count();
            if count != 1 {
                errors.push(format!(
                    "selection.priority_order must list {mode} exactly once (found {count})"
                ));
            }
        }

        if self.selection.urgent_tier_max > 5 {
            errors.push(format!(
                "selection.urgent_tier_max = {} is outside the urgency range (0-5)",
                self.selection.urgent_tier_max
            ));
        }

        let (range_errors, range_warnings) = super::validation::validate_ranges(self);
        errors.extend(range_errors);
        for w in &range_warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Tie-break rank of a mode (1 = preferred).
    pub fn intrinsic_priority(&self, mode: TransportMode) -> u8 {
        self.selection
            .priority_order
            .iter()
            .position(|m| *m == mode)
            .map_or(u8::MAX, |i| (i + 1) as u8)
    }

    /// Every float in the config with its dotted key, for finiteness checks.
    pub(crate) fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        let s = &self.synthesis;
        let mut fields = vec![
            ("ground.speed_kmh", self.ground.speed_kmh),
            ("commercial_air.cruise_speed_kmh", self.commercial_air.cruise_speed_kmh),
            ("commercial_air.ground_handling_hours", self.commercial_air.ground_handling_hours),
            ("dedicated_air.cruise_speed_kmh", self.dedicated_air.cruise_speed_kmh),
            ("dedicated_air.ground_handling_hours", self.dedicated_air.ground_handling_hours),
            ("selection.long_haul.distance_threshold_km", self.selection.long_haul.distance_threshold_km),
            ("selection.long_haul.tight_deadline_hours", self.selection.long_haul.tight_deadline_hours),
            ("selection.long_haul.margin", self.selection.long_haul.margin.value()),
            ("risk.high_margin_hours", self.risk.high_margin_hours),
            ("risk.moderate_margin_hours", self.risk.moderate_margin_hours),
            ("synthesis.distance_min_km", s.distance_min_km),
            ("synthesis.distance_max_km", s.distance_max_km),
            ("synthesis.ground_leg_min_hours", s.ground_leg_min_hours),
            ("synthesis.ground_leg_max_hours", s.ground_leg_max_hours),
            ("synthesis.commercial.min_distance_km", s.commercial.min_distance_km),
            ("synthesis.commercial.short_haul_km", s.commercial.short_haul_km),
            ("synthesis.commercial.short_haul_rejection", s.commercial.short_haul_rejection),
            ("synthesis.commercial.long_haul_rejection", s.commercial.long_haul_rejection),
            ("synthesis.commercial.window_start_hour", s.commercial.window_start_hour),
            ("synthesis.commercial.window_end_hour", s.commercial.window_end_hour),
            ("synthesis.commercial.prep_min_hours", s.commercial.prep_min_hours),
            ("synthesis.commercial.prep_max_hours", s.commercial.prep_max_hours),
            ("synthesis.commercial.off_window_acceptance", s.commercial.off_window_acceptance),
            ("synthesis.dedicated.base_chance", s.dedicated.base_chance),
            ("synthesis.dedicated.medium_distance_km", s.dedicated.medium_distance_km),
            ("synthesis.dedicated.medium_distance_bonus", s.dedicated.medium_distance_bonus),
            ("synthesis.dedicated.long_distance_km", s.dedicated.long_distance_km),
            ("synthesis.dedicated.long_distance_bonus", s.dedicated.long_distance_bonus),
            ("synthesis.dedicated.urgent_bonus", s.dedicated.urgent_bonus),
            ("synthesis.dedicated.tight_deadline_hours", s.dedicated.tight_deadline_hours),
            ("synthesis.dedicated.tight_deadline_bonus", s.dedicated.tight_deadline_bonus),
            ("synthesis.dedicated.no_commercial_bonus", s.dedicated.no_commercial_bonus),
            ("synthesis.dedicated.no_commercial_distance_km", s.dedicated.no_commercial_distance_km),
            ("synthesis.dedicated.no_commercial_deadline_hours", s.dedicated.no_commercial_deadline_hours),
            ("synthesis.dedicated.max_chance", s.dedicated.max_chance),
            ("synthesis.costs.ground_fixed", s.costs.ground_fixed),
            ("synthesis.costs.ground_per_km", s.costs.ground_per_km),
            ("synthesis.costs.commercial_fixed", s.costs.commercial_fixed),
            ("synthesis.costs.commercial_per_km", s.costs.commercial_per_km),
            ("synthesis.costs.dedicated_fixed", s.costs.dedicated_fixed),
            ("synthesis.costs.dedicated_per_km", s.costs.dedicated_per_km),
            ("server.default_ground_leg_hours", self.server.default_ground_leg_hours),
        ];
        fields.extend(
            s.ischemia_choices_hours
                .iter()
                .map(|h| ("synthesis.ischemia_choices_hours", *h)),
        );
        fields
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config I/O error ({path}): {err}", path = .0.display(), err = .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({path}): {err}", path = .0.display(), err = .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),
}

// ============================================================================
// Mode Timing
// ============================================================================

/// Road transport timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundConfig {
    /// Average door-to-door road speed (km/h)
    #[serde(default = "default_ground_speed")]
    pub speed_kmh: f64,
}

fn default_ground_speed() -> f64 { 80.0 }

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            speed_kmh: default_ground_speed(),
        }
    }
}

/// Scheduled commercial flight timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommercialAirConfig {
    /// Block cruise speed (km/h)
    #[serde(default = "default_commercial_speed")]
    pub cruise_speed_kmh: f64,

    /// Fixed airport overhead: check-in, loading, taxi (hours)
    #[serde(default = "default_commercial_handling")]
    pub ground_handling_hours: f64,
}

fn default_commercial_speed() -> f64 { 800.0 }
fn default_commercial_handling() -> f64 { 1.0 }

impl Default for CommercialAirConfig {
    fn default() -> Self {
        Self {
            cruise_speed_kmh: default_commercial_speed(),
            ground_handling_hours: default_commercial_handling(),
        }
    }
}

/// Chartered flight timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DedicatedAirConfig {
    /// Block cruise speed (km/h)
    #[serde(default = "default_dedicated_speed")]
    pub cruise_speed_kmh: f64,

    /// Fixed airport overhead for a charter (hours)
    #[serde(default = "default_dedicated_handling")]
    pub ground_handling_hours: f64,
}

fn default_dedicated_speed() -> f64 { 700.0 }
fn default_dedicated_handling() -> f64 { 0.75 }

impl Default for DedicatedAirConfig {
    fn default() -> Self {
        Self {
            cruise_speed_kmh: default_dedicated_speed(),
            ground_handling_hours: default_dedicated_handling(),
        }
    }
}

// ============================================================================
// Selection
// ============================================================================

/// Decision engine tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Tie-break order, most preferred first
    #[serde(default = "default_priority_order")]
    pub priority_order: [TransportMode; 3],

    /// Tiers at or below this optimise for time; above it, for cost
    #[serde(default = "default_urgent_tier_max")]
    pub urgent_tier_max: u8,

    /// Whether candidates carry costs and less urgent tiers sort by them
    #[serde(default)]
    pub cost_aware: bool,

    #[serde(default)]
    pub long_haul: LongHaulConfig,
}

fn default_priority_order() -> [TransportMode; 3] {
    [
        TransportMode::CommercialAir,
        TransportMode::DedicatedAir,
        TransportMode::Ground,
    ]
}
fn default_urgent_tier_max() -> u8 { 2 }

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            priority_order: default_priority_order(),
            urgent_tier_max: default_urgent_tier_max(),
            cost_aware: false,
            long_haul: LongHaulConfig::default(),
        }
    }
}

/// Rule that keeps ground transport from winning on long distances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongHaulConfig {
    /// Override only applies strictly above this distance (km)
    #[serde(default = "default_long_haul_distance")]
    pub distance_threshold_km: f64,

    /// Deadlines below this allow a slightly slower air pick (hours)
    #[serde(default = "default_tight_deadline")]
    pub tight_deadline_hours: f64,

    /// Tiers at or below this allow a slightly slower air pick
    #[serde(default = "default_long_haul_urgent_tier")]
    pub urgent_tier_max: u8,

    /// How much slower than ground the air pick may be
    #[serde(default)]
    pub margin: OverrideMargin,
}

fn default_long_haul_distance() -> f64 { 750.0 }
fn default_tight_deadline() -> f64 { 18.0 }
fn default_long_haul_urgent_tier() -> u8 { 2 }

impl Default for LongHaulConfig {
    fn default() -> Self {
        Self {
            distance_threshold_km: default_long_haul_distance(),
            tight_deadline_hours: default_tight_deadline(),
            urgent_tier_max: default_long_haul_urgent_tier(),
            margin: OverrideMargin::default(),
        }
    }
}

/// Tolerated slowdown of the air candidate relative to ground.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OverrideMargin {
    /// Fixed number of hours
    Absolute { hours: f64 },
    /// Fraction of the ground transit time
    Relative { fraction: f64 },
}

impl Default for OverrideMargin {
    fn default() -> Self {
        OverrideMargin::Absolute { hours: 1.0 }
    }
}

impl OverrideMargin {
    /// Allowed extra hours given the ground candidate's time.
    pub fn allowance(&self, ground_hours: f64) -> f64 {
        match *self {
            OverrideMargin::Absolute { hours } => hours,
            OverrideMargin::Relative { fraction } => ground_hours * fraction,
        }
    }

    pub(crate) const fn value(&self) -> f64 {
        match *self {
            OverrideMargin::Absolute { hours } => hours,
            OverrideMargin::Relative { fraction } => fraction,
        }
    }
}

// ============================================================================
// Risk Bands
// ============================================================================

/// Spare-time bands used to label each option's risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Spare time below this is high risk (hours)
    #[serde(default = "default_high_margin")]
    pub high_margin_hours: f64,

    /// Spare time below this is moderate risk (hours)
    #[serde(default = "default_moderate_margin")]
    pub moderate_margin_hours: f64,
}

fn default_high_margin() -> f64 { 1.0 }
fn default_moderate_margin() -> f64 { 2.5 }

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            high_margin_hours: default_high_margin(),
            moderate_margin_hours: default_moderate_margin(),
        }
    }
}

// ============================================================================
// Synthesis
// ============================================================================

/// Random shipment and availability generation for training data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    #[serde(default = "default_distance_min")]
    pub distance_min_km: f64,

    #[serde(default = "default_distance_max")]
    pub distance_max_km: f64,

    /// Organ viability windows drawn uniformly from this list (hours)
    #[serde(default = "default_ischemia_choices")]
    pub ischemia_choices_hours: Vec<f64>,

    /// Per-leg hospital ↔ airport transfer range (hours)
    #[serde(default = "default_leg_min")]
    pub ground_leg_min_hours: f64,

    #[serde(default = "default_leg_max")]
    pub ground_leg_max_hours: f64,

    #[serde(default)]
    pub commercial: CommercialAvailabilityConfig,

    #[serde(default)]
    pub dedicated: DedicatedAvailabilityConfig,

    #[serde(default)]
    pub costs: CostModelConfig,
}

fn default_distance_min() -> f64 { 50.0 }
fn default_distance_max() -> f64 { 4000.0 }
fn default_ischemia_choices() -> Vec<f64> {
    vec![4.0, 6.0, 8.0, 10.0, 12.0, 15.0, 18.0, 24.0, 30.0, 36.0, 48.0]
}
fn default_leg_min() -> f64 { 0.3 }
fn default_leg_max() -> f64 { 0.8 }

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            distance_min_km: default_distance_min(),
            distance_max_km: default_distance_max(),
            ischemia_choices_hours: default_ischemia_choices(),
            ground_leg_min_hours: default_leg_min(),
            ground_leg_max_hours: default_leg_max(),
            commercial: CommercialAvailabilityConfig::default(),
            dedicated: DedicatedAvailabilityConfig::default(),
            costs: CostModelConfig::default(),
        }
    }
}

/// Simulated commercial route and timetable availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommercialAvailabilityConfig {
    /// No commercial route at or below this distance (km)
    #[serde(default = "default_commercial_min_distance")]
    pub min_distance_km: f64,

    /// Boundary between the two rejection rates (km)
    #[serde(default = "default_short_haul_km")]
    pub short_haul_km: f64,

    /// Probability a short-haul route has no seat
    #[serde(default = "default_short_haul_rejection")]
    pub short_haul_rejection: f64,

    /// Probability a long-haul route has no seat
    #[serde(default = "default_long_haul_rejection")]
    pub long_haul_rejection: f64,

    /// Departures are normal inside `[start, end)` (hour of day)
    #[serde(default = "default_window_start")]
    pub window_start_hour: f64,

    #[serde(default = "default_window_end")]
    pub window_end_hour: f64,

    /// Time from now until the earliest departure (hours)
    #[serde(default = "default_prep_min")]
    pub prep_min_hours: f64,

    #[serde(default = "default_prep_max")]
    pub prep_max_hours: f64,

    /// Chance of an off-window departure still being usable
    #[serde(default = "default_off_window_acceptance")]
    pub off_window_acceptance: f64,
}

fn default_commercial_min_distance() -> f64 { 250.0 }
fn default_short_haul_km() -> f64 { 1000.0 }
fn default_short_haul_rejection() -> f64 { 0.25 }
fn default_long_haul_rejection() -> f64 { 0.15 }
fn default_window_start() -> f64 { 6.0 }
fn default_window_end() -> f64 { 22.0 }
fn default_prep_min() -> f64 { 1.5 }
fn default_prep_max() -> f64 { 3.0 }
fn default_off_window_acceptance() -> f64 { 0.10 }

impl Default for CommercialAvailabilityConfig {
    fn default() -> Self {
        Self {
            min_distance_km: default_commercial_min_distance(),
            short_haul_km: default_short_haul_km(),
            short_haul_rejection: default_short_haul_rejection(),
            long_haul_rejection: default_long_haul_rejection(),
            window_start_hour: default_window_start(),
            window_end_hour: default_window_end(),
            prep_min_hours: default_prep_min(),
            prep_max_hours: default_prep_max(),
            off_window_acceptance: default_off_window_acceptance(),
        }
    }
}

/// Simulated charter availability: a base chance plus situational bonuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DedicatedAvailabilityConfig {
    #[serde(default = "default_ded_base")]
    pub base_chance: f64,

    #[serde(default = "default_ded_medium_km")]
    pub medium_distance_km: f64,

    #[serde(default = "default_ded_medium_bonus")]
    pub medium_distance_bonus: f64,

    #[serde(default = "default_ded_long_km")]
    pub long_distance_km: f64,

    #[serde(default = "default_ded_long_bonus")]
    pub long_distance_bonus: f64,

    /// Added when the urgency tier is at or below `selection.urgent_tier_max`
    #[serde(default = "default_ded_urgent_bonus")]
    pub urgent_bonus: f64,

    #[serde(default = "default_ded_tight_deadline")]
    pub tight_deadline_hours: f64,

    #[serde(default = "default_ded_tight_bonus")]
    pub tight_deadline_bonus: f64,

    /// Added when commercial is unusable and the trip is long or tight
    #[serde(default = "default_ded_no_commercial_bonus")]
    pub no_commercial_bonus: f64,

    #[serde(default = "default_ded_no_commercial_km")]
    pub no_commercial_distance_km: f64,

    #[serde(default = "default_ded_no_commercial_deadline")]
    pub no_commercial_deadline_hours: f64,

    /// Upper bound on the accumulated chance
    #[serde(default = "default_ded_max_chance")]
    pub max_chance: f64,
}

fn default_ded_base() -> f64 { 0.05 }
fn default_ded_medium_km() -> f64 { 400.0 }
fn default_ded_medium_bonus() -> f64 { 0.15 }
fn default_ded_long_km() -> f64 { 1200.0 }
fn default_ded_long_bonus() -> f64 { 0.20 }
fn default_ded_urgent_bonus() -> f64 { 0.25 }
fn default_ded_tight_deadline() -> f64 { 8.0 }
fn default_ded_tight_bonus() -> f64 { 0.20 }
fn default_ded_no_commercial_bonus() -> f64 { 0.35 }
fn default_ded_no_commercial_km() -> f64 { 500.0 }
fn default_ded_no_commercial_deadline() -> f64 { 12.0 }
fn default_ded_max_chance() -> f64 { 0.90 }

impl Default for DedicatedAvailabilityConfig {
    fn default() -> Self {
        Self {
            base_chance: default_ded_base(),
            medium_distance_km: default_ded_medium_km(),
            medium_distance_bonus: default_ded_medium_bonus(),
            long_distance_km: default_ded_long_km(),
            long_distance_bonus: default_ded_long_bonus(),
            urgent_bonus: default_ded_urgent_bonus(),
            tight_deadline_hours: default_ded_tight_deadline(),
            tight_deadline_bonus: default_ded_tight_bonus(),
            no_commercial_bonus: default_ded_no_commercial_bonus(),
            no_commercial_distance_km: default_ded_no_commercial_km(),
            no_commercial_deadline_hours: default_ded_no_commercial_deadline(),
            max_chance: default_ded_max_chance(),
        }
    }
}

/// Linear cost model (fixed + per km) used when `selection.cost_aware` is on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostModelConfig {
    #[serde(default)]
    pub ground_fixed: f64,

    #[serde(default = "default_ground_per_km")]
    pub ground_per_km: f64,

    #[serde(default = "default_commercial_fixed")]
    pub commercial_fixed: f64,

    #[serde(default = "default_commercial_per_km")]
    pub commercial_per_km: f64,

    #[serde(default = "default_dedicated_fixed")]
    pub dedicated_fixed: f64,

    #[serde(default = "default_dedicated_per_km")]
    pub dedicated_per_km: f64,
}

fn default_ground_per_km() -> f64 { 2.0 }
fn default_commercial_fixed() -> f64 { 1500.0 }
fn default_commercial_per_km() -> f64 { 1.2 }
fn default_dedicated_fixed() -> f64 { 8000.0 }
fn default_dedicated_per_km() -> f64 { 6.0 }

impl Default for CostModelConfig {
    fn default() -> Self {
        Self {
            ground_fixed: 0.0,
            ground_per_km: default_ground_per_km(),
            commercial_fixed: default_commercial_fixed(),
            commercial_per_km: default_commercial_per_km(),
            dedicated_fixed: default_dedicated_fixed(),
            dedicated_per_km: default_dedicated_per_km(),
        }
    }
}

impl CostModelConfig {
    /// Estimated cost of moving a shipment `distance_km` by `mode`.
    pub fn estimate(&self, mode: TransportMode, distance_km: f64) -> f64 {
        match mode {
            TransportMode::Ground => self.ground_fixed + self.ground_per_km * distance_km,
            TransportMode::CommercialAir => {
                self.commercial_fixed + self.commercial_per_km * distance_km
            }
            TransportMode::DedicatedAir => {
                self.dedicated_fixed + self.dedicated_per_km * distance_km
            }
        }
    }
}

// ============================================================================
// Server
// ============================================================================

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_server_addr")]
    pub addr: String,

    /// Per-leg airport transfer assumed when a request omits it (hours)
    #[serde(default = "default_request_leg")]
    pub default_ground_leg_hours: f64,
}

fn default_server_addr() -> String {
    "0.0.0.0:8080".to_string()
}
fn default_request_leg() -> f64 { 1.0 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
            default_ground_leg_hours: default_request_leg(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
