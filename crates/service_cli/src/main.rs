//! Uncommons CLI - Command Line Tools for the Random Number Generators
//!
//! This is the operational entry point for the uncommons-maths generators.
//!
//! # Commands
//!
//! - `uncommons feed [--output <file>]` - Stream generator output for Diehard-style test suites
//! - `uncommons sample --distribution <name>` - Compare sampler moments with theory
//! - `uncommons algorithms` - List the available generators
//! - `uncommons freeze` / `uncommons thaw --input <file>` - Record and replay a generator
//!
//! # Architecture
//!
//! As the Service layer of the workspace, this crate wires configuration
//! and logging around the maths_random engines and samplers.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::sample::{Distribution, OutputFormat, SampleParameters};
use config::{build_config, CliArgs};

/// Uncommons random number generator CLI
#[derive(Parser)]
#[command(name = "uncommons")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format, default: uncommons.toml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Generator algorithm (see `uncommons algorithms`)
    #[arg(short, long, global = true)]
    algorithm: Option<String>,

    /// Seed as a hex string; drawn from the system when omitted
    #[arg(long, global = true)]
    seed_hex: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write big-endian 64-bit words until the output is closed
    Feed {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stop after this many words
        #[arg(short, long)]
        words: Option<u64>,
    },

    /// Sample a distribution and compare observed and expected moments
    Sample {
        /// Distribution to sample
        #[arg(short, long, value_enum)]
        distribution: Distribution,

        /// Number of values to draw
        #[arg(short, long)]
        samples: Option<usize>,

        /// Binomial trial count
        #[arg(long)]
        n: Option<i32>,

        /// Binomial success probability
        #[arg(long)]
        p: Option<f64>,

        /// Poisson or Gaussian mean
        #[arg(long, allow_hyphen_values = true)]
        mean: Option<f64>,

        /// Exponential rate
        #[arg(long)]
        rate: Option<f64>,

        /// Gaussian standard deviation
        #[arg(long)]
        sd: Option<f64>,

        /// Uniform lower bound
        #[arg(long, allow_hyphen_values = true)]
        min: Option<f64>,

        /// Uniform upper bound
        #[arg(long, allow_hyphen_values = true)]
        max: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List the available generator algorithms
    Algorithms,

    /// Print the configured generator as JSON (algorithm and seed)
    Freeze {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rebuild a frozen generator and print its first words
    Thaw {
        /// Frozen generator JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Number of 32-bit words to print
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
}

fn init_tracing(log_level: &str) {
    // Logs go to stderr so they never mix with fed output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let samples = match &cli.command {
        Commands::Sample { samples, .. } => *samples,
        _ => None,
    };
    let config = build_config(&CliArgs {
        config_file: cli.config,
        algorithm: cli.algorithm,
        log_level: cli.log_level,
        samples,
        seed_hex: cli.seed_hex,
    })?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        algorithm = %config.algorithm,
        log_level = %config.log_level,
        samples = config.samples,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Feed { output, words } => commands::feed::run(&config, output.as_deref(), words),
        Commands::Sample {
            distribution,
            n,
            p,
            mean,
            rate,
            sd,
            min,
            max,
            format,
            ..
        } => {
            let parameters = SampleParameters {
                n,
                p,
                mean,
                rate,
                standard_deviation: sd,
                minimum: min,
                maximum: max,
            };
            commands::sample::run(&config, distribution, &parameters, format)
        }
        Commands::Algorithms => commands::algorithms::run(),
        Commands::Freeze { output } => commands::freeze::run_freeze(&config, output.as_deref()),
        Commands::Thaw { input, count } => commands::freeze::run_thaw(&input, count),
    }
}
