//! Synthesis Harness
//!
//! Manufactures random shipments and availability, runs the selector, and
//! emits one labelled record per input for model training.
//!
//! Batches run on rayon. Each sample owns an RNG seeded from
//! `(base_seed, index)`, so a batch is identical regardless of how the
//! thread pool schedules it.

mod output;

pub use output::{CSV_HEADER, DecisionRecord, write_csv, write_json_lines};

use rand::prelude::*;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::config::{SynthesisConfig, TransportConfig};
use crate::decision::DecisionEngine;
use crate::provider::{AvailabilityProvider, SimulatedAvailability};
use crate::types::{DecisionError, ShipmentRequest, TransportMode, URGENCY_TIER_MAX, URGENCY_TIER_MIN};

// ============================================================================
// Request Sampling
// ============================================================================

/// Draws shipment requests from the configured ranges.
#[derive(Debug, Clone, Copy)]
pub struct RequestSampler<'a> {
    config: &'a SynthesisConfig,
}

impl<'a> RequestSampler<'a> {
    pub const fn new(config: &'a SynthesisConfig) -> Self {
        Self { config }
    }

    /// Distance uniform in range, deadline from the choice list, uniform tier.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<ShipmentRequest, DecisionError> {
        let (min, max) = (self.config.distance_min_km, self.config.distance_max_km);
        if !(min.is_finite() && max.is_finite() && max > min) {
            return Err(DecisionError::invalid(
                "distance_km",
                format!("sampling range must be finite with max > min (got {min}..{max})"),
            ));
        }
        let distance_km = rng.gen_range(min..max);
        let max_ischemia_hours = self
            .config
            .ischemia_choices_hours
            .choose(rng)
            .copied()
            .ok_or_else(|| DecisionError::invalid("max_ischemia_hours", "no ischemia choices configured"))?;
        let urgency_tier = rng.gen_range(URGENCY_TIER_MIN..=URGENCY_TIER_MAX);
        ShipmentRequest::new(distance_km, max_ischemia_hours, urgency_tier)
    }
}

// ============================================================================
// Batch Generation
// ============================================================================

/// Per-sample seed: base seed mixed with the sample index.
fn sample_seed(base_seed: u64, index: usize) -> u64 {
    let mut z = base_seed ^ (index as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Sample, simulate availability and decide for one index.
pub fn synthesize_one(
    config: &TransportConfig,
    base_seed: u64,
    index: usize,
) -> Result<DecisionRecord, DecisionError> {
    let mut rng = StdRng::seed_from_u64(sample_seed(base_seed, index));
    let request = RequestSampler::new(&config.synthesis).sample(&mut rng)?;

    let mut provider = SimulatedAvailability::with_rng(config, rng);
    let snapshot = provider.snapshot(&request);
    let decision = DecisionEngine::new(config).evaluate(&request, &snapshot)?;

    Ok(DecisionRecord::new(&request, &snapshot, &decision))
}

/// Generate `samples` labelled records in parallel.
pub fn generate(
    config: &TransportConfig,
    samples: usize,
    base_seed: u64,
) -> Result<Vec<DecisionRecord>, DecisionError> {
    info!(samples, seed = base_seed, "Generating synthetic transport decisions");
    (0..samples)
        .into_par_iter()
        .map(|i| synthesize_one(config, base_seed, i))
        .collect()
}

// ============================================================================
// Mode Distribution
// ============================================================================

/// Label counts over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModeDistribution {
    counts: [usize; 3],
}

impl ModeDistribution {
    pub fn from_records(records: &[DecisionRecord]) -> Self {
        let mut counts = [0usize; 3];
        for record in records {
            if let Some(mode) = TransportMode::from_code(record.best_mode) {
                counts[mode.index()] += 1;
            }
        }
        Self { counts }
    }

    pub const fn count(&self, mode: TransportMode) -> usize {
        self.counts[mode.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn fraction(&self, mode: TransportMode) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(mode) as f64 / total as f64,
        }
    }

    pub fn log_summary(&self) {
        info!(total = self.total(), "Mode distribution (0: Ground, 1: Commercial Air, 2: Dedicated Air)");
        for mode in TransportMode::ALL {
            info!(
                code = mode.code(),
                count = self.count(mode),
                "  {:<15} {:>6.2}%",
                mode.to_string(),
                self.fraction(mode) * 100.0
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampler_respects_ranges() {
        let config = SynthesisConfig::default();
        let sampler = RequestSampler::new(&config);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let r = sampler.sample(&mut rng).unwrap();
            assert!((50.0..4000.0).contains(&r.distance_km()));
            assert!(config.ischemia_choices_hours.contains(&r.max_ischemia_hours()));
            assert!((1..=5).contains(&r.urgency_tier()));
        }
    }

    #[test]
    fn empty_choice_list_is_an_error() {
        let config = SynthesisConfig {
            ischemia_choices_hours: Vec::new(),
            ..SynthesisConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let err = RequestSampler::new(&config).sample(&mut rng).unwrap_err();
        assert_eq!(err.field(), "max_ischemia_hours");
    }

    #[test]
    fn degenerate_distance_range_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        for (min, max) in [(100.0, 100.0), (500.0, 50.0), (50.0, f64::INFINITY), (f64::NAN, 10.0)] {
            let config = SynthesisConfig {
                distance_min_km: min,
                distance_max_km: max,
                ..SynthesisConfig::default()
            };
            let err = RequestSampler::new(&config).sample(&mut rng).unwrap_err();
            assert_eq!(err.field(), "distance_km");
        }
    }

    #[test]
    fn generate_reports_unusable_config() {
        let mut config = TransportConfig::default();
        config.synthesis.distance_min_km = 100.0;
        config.synthesis.distance_max_km = 100.0;
        let err = generate(&config, 3, 1).unwrap_err();
        assert_eq!(err.field(), "distance_km");
    }

    #[test]
    fn sample_seeds_differ_per_index() {
        let a = sample_seed(42, 0);
        let b = sample_seed(42, 1);
        let c = sample_seed(43, 0);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, sample_seed(42, 0));
    }

    #[test]
    fn single_sample_is_reproducible() {
        let config = TransportConfig::default();
        assert_eq!(
            synthesize_one(&config, 9, 17).unwrap(),
            synthesize_one(&config, 9, 17).unwrap()
        );
    }

    #[test]
    fn distribution_counts_and_fractions() {
        let config = TransportConfig::default();
        let records = generate(&config, 200, 5).unwrap();
        let dist = ModeDistribution::from_records(&records);
        assert_eq!(dist.total(), 200);
        let sum: f64 = TransportMode::ALL.iter().map(|m| dist.fraction(*m)).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(ModeDistribution::default().fraction(TransportMode::Ground), 0.0);
    }
}
