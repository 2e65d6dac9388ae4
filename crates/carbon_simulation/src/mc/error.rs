//! Error types for the Monte Carlo engine.
//!
//! This module defines structured error types for configuration validation.

use thiserror::Error;

/// Configuration error for the Monte Carlo simulator.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Path count outside valid range [1, 1_000_000].
    #[error("Invalid path count {0}: must be in range [1, 1_000_000]")]
    InvalidPathCount(usize),
    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}
