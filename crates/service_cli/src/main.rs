//! Carbon Risk CLI - Command Line Operations for Carbon Transition Risk
//!
//! This is the operational entry point for the carbon transition risk engine.
//!
//! # Commands
//!
//! - `carbon-risk trajectory --input <file>` - Deterministic portfolio cost paths
//! - `carbon-risk simulate --input <file>` - Monte Carlo VaR / CVaR at the horizon
//! - `carbon-risk exposure --input <file>` - Static carbon-price stress
//! - `carbon-risk check` - Validate configuration and input data
//!
//! # Architecture
//!
//! As part of the **S**ervice layer in the A-P-S architecture, this crate
//! orchestrates the adapter and engine crates behind one command line.

use anyhow::Context;
use carbon_core::{HorizonYear, ScenarioKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::CliConfig;
use output::OutputFormat;

/// Carbon transition risk engine CLI
#[derive(Parser)]
#[command(name = "carbon-risk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "carbon_risk.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project deterministic portfolio cost trajectories
    Trajectory {
        /// Company exposure CSV file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Scenario (orderly, disorderly, hothouse); all when omitted
        #[arg(short, long)]
        scenario: Option<ScenarioKind>,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Run the Monte Carlo simulation and report VaR metrics
    Simulate {
        /// Company exposure CSV file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Scenario (orderly, disorderly, hothouse); all when omitted
        #[arg(short, long)]
        scenario: Option<ScenarioKind>,

        /// Number of Monte Carlo paths per scenario
        #[arg(short = 'n', long)]
        num_paths: Option<usize>,

        /// Seed of the random stream
        #[arg(long)]
        seed: Option<u64>,

        /// Horizon year (2030, 2035, 2040)
        #[arg(long)]
        horizon: Option<i32>,

        /// VaR confidence level in (0, 1)
        #[arg(long)]
        confidence: Option<f64>,

        /// Include year-by-year uncertainty bands (CSV: bands replace metrics)
        #[arg(short, long)]
        bands: bool,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Stress the portfolio at flat carbon prices
    Exposure {
        /// Company exposure CSV file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Carbon price used to rank companies (USD/tCO2e)
        #[arg(short, long, default_value = "100")]
        price: f64,

        /// Number of companies to list
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Check configuration and input data
    Check {
        /// Company exposure CSV file to validate
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool, config: &CliConfig) {
    let default_level = if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_or_default(&cli.config)
        .and_then(CliConfig::with_env_override)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    init_tracing(cli.verbose, &config);
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Trajectory {
            input,
            scenario,
            format,
        } => {
            config.validate()?;
            let path = commands::resolve_input(input.as_deref(), &config)?;
            let companies = commands::load_companies(&path)?;
            let format = commands::resolve_format(format, &config)?;
            commands::trajectory::run(
                &mut out,
                &companies,
                &commands::selected_scenarios(scenario),
                format,
            )?;
        }
        Commands::Simulate {
            input,
            scenario,
            num_paths,
            seed,
            horizon,
            confidence,
            bands,
            format,
        } => {
            config.validate()?;
            let mut settings = config.analysis_config()?;
            if let Some(n_paths) = num_paths {
                settings.n_paths = n_paths;
            }
            if let Some(seed) = seed {
                settings.seed = seed;
            }
            if let Some(year) = horizon {
                settings.horizon = HorizonYear::try_from(year)?;
            }
            if let Some(confidence) = confidence {
                settings.confidence = confidence;
            }

            let path = commands::resolve_input(input.as_deref(), &config)?;
            let companies = commands::load_companies(&path)?;
            let format = commands::resolve_format(format, &config)?;
            commands::simulate::run(
                &mut out,
                &companies,
                &settings,
                &commands::selected_scenarios(scenario),
                bands,
                format,
            )?;
        }
        Commands::Exposure {
            input,
            price,
            top,
            format,
        } => {
            config.validate()?;
            let path = commands::resolve_input(input.as_deref(), &config)?;
            let companies = commands::load_companies(&path)?;
            let format = commands::resolve_format(format, &config)?;
            commands::exposure::run(&mut out, &companies, price, top, format)?;
        }
        Commands::Check { input } => {
            let input = input.or_else(|| config.input.clone());
            commands::check::run(&mut out, &config, input.as_deref())?;
        }
    }

    Ok(())
}
