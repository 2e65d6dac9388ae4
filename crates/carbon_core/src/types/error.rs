//! Error types for scenario parsing and validation.

use thiserror::Error;

/// Errors raised when scenario inputs cannot be interpreted.
///
/// # Examples
/// ```
/// use carbon_core::types::ScenarioError;
///
/// let err = ScenarioError::UnknownScenario("baseline".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Unknown scenario: baseline (expected orderly, disorderly or hothouse)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    /// Scenario name outside the closed set.
    #[error("Unknown scenario: {0} (expected orderly, disorderly or hothouse)")]
    UnknownScenario(String),

    /// Horizon year not among the supported risk horizons.
    #[error("Unsupported horizon year: {0} (expected 2030, 2035 or 2040)")]
    UnsupportedHorizon(i32),
}
