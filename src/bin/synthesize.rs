//! Synthetic Transport Decision Dataset
//!
//! Samples random shipments, simulates availability, runs the selector and
//! writes one labelled record per sample for model training.
//!
//! # Usage
//! ```bash
//! ./synthesize --samples 5000 --seed 42 --output synthetic_transport_data.csv
//! ./synthesize --samples 100 --format json | jq .
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::prelude::*;
use tracing::info;

use organ_route::config::defaults::DEFAULT_SYNTHESIS_SAMPLES;
use organ_route::config::TransportConfig;
use organ_route::synthesis::{self, ModeDistribution};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "synthesize")]
#[command(about = "Generate labelled transport decisions for model training")]
#[command(version)]
struct Args {
    /// Number of records to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_SYNTHESIS_SAMPLES)]
    samples: usize,

    /// Random seed for reproducibility (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Transport config file (search order applies when omitted)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => TransportConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => TransportConfig::load(),
    };

    let seed = args.seed.unwrap_or_else(|| StdRng::from_entropy().gen());
    info!(seed, cost_aware = config.selection.cost_aware, "Synthesis parameters");

    let records = synthesis::generate(&config, args.samples, seed)
        .context("Synthesis produced an invalid shipment")?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match args.format {
        OutputFormat::Csv => synthesis::write_csv(&mut out, &records),
        OutputFormat::Json => synthesis::write_json_lines(&mut out, &records),
    }
    .context("Failed to write records")?;

    if let Some(path) = &args.output {
        info!(path = %path.display(), records = records.len(), "Dataset written");
    }
    ModeDistribution::from_records(&records).log_summary();
    Ok(())
}
