//! Risk error types.
//!
//! This module provides structured error types for risk metric extraction
//! using `thiserror` for derivation.

use carbon_core::ScenarioError;
use carbon_simulation::ConfigError;
use thiserror::Error;

/// Errors that can occur while extracting risk metrics.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RiskError {
    /// Confidence level outside the open interval (0, 1).
    #[error("Invalid confidence level {0}: must be in (0, 1)")]
    InvalidConfidence(f64),

    /// Horizon year outside the generated scenario range.
    #[error("Horizon year {year} outside scenario range [{first}, {last}]")]
    HorizonOutOfRange {
        /// Requested year.
        year: i32,
        /// First scenario year.
        first: i32,
        /// Last scenario year.
        last: i32,
    },

    /// Invalid scenario or horizon selection.
    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    /// Invalid simulation configuration.
    #[error(transparent)]
    Simulation(#[from] ConfigError),
}

/// Result type for risk operations.
pub type RiskResult<T> = Result<T, RiskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_confidence_display() {
        let err = RiskError::InvalidConfidence(1.0);
        assert_eq!(
            format!("{}", err),
            "Invalid confidence level 1: must be in (0, 1)"
        );
    }

    #[test]
    fn test_horizon_display() {
        let err = RiskError::HorizonOutOfRange {
            year: 2050,
            first: 2025,
            last: 2040,
        };
        assert_eq!(
            format!("{}", err),
            "Horizon year 2050 outside scenario range [2025, 2040]"
        );
    }

    #[test]
    fn test_from_config_error() {
        let err: RiskError = ConfigError::InvalidPathCount(0).into();
        assert!(matches!(err, RiskError::Simulation(_)));
    }
}
