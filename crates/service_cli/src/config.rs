//! CLI configuration management.
//!
//! Handles loading of the `carbon_risk.toml` configuration file with
//! environment variable override support.
//!
//! ```toml
//! horizon = 2040
//! output_format = "table"
//! log_level = "info"
//! input = "data/company_exposure.csv"
//!
//! [simulation]
//! n_paths = 500
//! seed = 42
//! confidence = 0.95
//! ```
//!
//! Precedence, lowest first: built-in defaults, file, environment, command
//! line flags.

use crate::output::OutputFormat;
use carbon_core::HorizonYear;
use carbon_risk::{AnalysisConfig, DEFAULT_CONFIDENCE};
use carbon_simulation::mc::{DEFAULT_PATHS, MAX_PATHS};
use carbon_simulation::rng::lcg::DEFAULT_SEED;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding the path count.
pub const ENV_PATHS: &str = "CARBON_RISK_PATHS";
/// Environment variable overriding the seed.
pub const ENV_SEED: &str = "CARBON_RISK_SEED";
/// Environment variable overriding the horizon year.
pub const ENV_HORIZON: &str = "CARBON_RISK_HORIZON";
/// Environment variable overriding the output format.
pub const ENV_FORMAT: &str = "CARBON_RISK_FORMAT";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Monte Carlo settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSection {
    /// Paths per scenario.
    pub n_paths: usize,
    /// Seed of the reference stream.
    pub seed: u64,
    /// VaR confidence level.
    pub confidence: f64,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            seed: DEFAULT_SEED,
            confidence: DEFAULT_CONFIDENCE,
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Monte Carlo settings.
    pub simulation: SimulationSection,
    /// Horizon year for VaR metrics (2030, 2035 or 2040).
    pub horizon: i32,
    /// Output format name.
    pub output_format: String,
    /// Default log level.
    pub log_level: String,
    /// Default company exposure file.
    pub input: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationSection::default(),
            horizon: HorizonYear::default().year(),
            output_format: OutputFormat::default().to_string(),
            log_level: "info".to_string(),
            input: None,
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "configuration file not found; using defaults");
            Ok(Self::default())
        }
    }

    /// Applies overrides from the process environment.
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_PATHS) {
            self.simulation.n_paths = parse_env(ENV_PATHS, &value)?;
        }
        if let Some(value) = lookup(ENV_SEED) {
            self.simulation.seed = parse_env(ENV_SEED, &value)?;
        }
        if let Some(value) = lookup(ENV_HORIZON) {
            self.horizon = parse_env(ENV_HORIZON, &value)?;
        }
        if let Some(value) = lookup(ENV_FORMAT) {
            self.output_format = value.trim().to_lowercase();
        }
        Ok(self)
    }

    /// Validates the configuration, collecting every violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.simulation.n_paths == 0 || self.simulation.n_paths > MAX_PATHS {
            errors.push(format!(
                "simulation.n_paths {} must be in [1, {}]",
                self.simulation.n_paths, MAX_PATHS
            ));
        }

        let confidence = self.simulation.confidence;
        if !(confidence > 0.0 && confidence < 1.0) {
            errors.push(format!(
                "simulation.confidence {} must be in (0, 1)",
                confidence
            ));
        }

        if let Err(e) = self.horizon_year() {
            errors.push(e.to_string());
        }

        if let Err(e) = self.format() {
            errors.push(e);
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if let Some(input) = &self.input {
            if input.as_os_str().is_empty() {
                errors.push("input cannot be empty".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Horizon as a typed year.
    pub fn horizon_year(&self) -> Result<HorizonYear, carbon_core::ScenarioError> {
        HorizonYear::try_from(self.horizon)
    }

    /// Output format as a typed value.
    pub fn format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }

    /// Analysis settings derived from the configuration.
    pub fn analysis_config(&self) -> Result<AnalysisConfig, carbon_core::ScenarioError> {
        Ok(AnalysisConfig {
            n_paths: self.simulation.n_paths,
            seed: self.simulation.seed,
            horizon: self.horizon_year()?,
            confidence: self.simulation.confidence,
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key,
        value: value.to_string(),
    })
}

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file.
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Parse error in the configuration file.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Unparseable environment override.
    #[error("Invalid value '{value}' for {key}")]
    InvalidEnv {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },

    /// Validation errors.
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
