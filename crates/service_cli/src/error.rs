//! Error types for the CLI.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Company data could not be loaded.
    #[error("Data loading error: {0}")]
    Load(#[from] adapter_loader::LoaderError),

    /// Risk computation error.
    #[error("Risk computation error: {0}")]
    Risk(#[from] carbon_risk::RiskError),

    /// Invalid scenario or horizon selection.
    #[error("Scenario error: {0}")]
    Scenario(#[from] carbon_core::ScenarioError),

    /// Invalid command line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON rendering failed.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV rendering failed.
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
