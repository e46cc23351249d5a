//! Habitable zone calculator
//!
//! Usage: cargo run -p hz-calc -- <TEMPERATURE_K> <LUMINOSITY_LSUN>
//!
//! Prints the conservative and optimistic habitable zone boundaries of a
//! star, following Kopparapu et al. (2013).

mod report;


use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::report::{Report, StarInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human readable table
    Text,
    /// Fluxes and distances as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "hz-calc", version)]
#[command(about = "Habitable zone boundaries from stellar temperature and luminosity")]
#[command(after_help = "Example: hz-calc 5800 1.0")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Stellar effective temperature in Kelvin
    #[arg(value_name = "TEMPERATURE_K")]
    temperature: f64,

    /// Stellar luminosity in solar luminosities
    #[arg(value_name = "LUMINOSITY_LSUN")]
    luminosity: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Install a stderr subscriber so stdout only carries the report
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let star = StarInput::new(args.temperature, args.luminosity)?;
    info!(
        teff_k = star.temperature.to_kelvin(),
        luminosity_lsun = star.luminosity.to_solar(),
        "computing habitable zone"
    );

    let report = Report::compute(star).context("Calculation error")?;

    match args.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
