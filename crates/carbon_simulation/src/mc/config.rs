//! Monte Carlo simulation configuration.
//!
//! This module provides configuration types and builders for carbon cost
//! simulations.

use super::error::ConfigError;
use crate::rng::lcg::DEFAULT_SEED;
use crate::rng::ShockParams;

/// Default number of simulation paths.
pub const DEFAULT_PATHS: usize = 500;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 1_000_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use carbon_simulation::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(1_000)
///     .seed(7)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 1_000);
/// assert_eq!(config.seed(), 7);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonteCarloConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Seed of the reference stream.
    seed: u64,
    /// Correlated shock parameters.
    shocks: ShockParams,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the seed of the reference stream.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the shock parameters.
    #[inline]
    pub fn shocks(&self) -> &ShockParams {
        &self.shocks
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than 1,000,000
    /// - the shock parameters are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        self.shocks.validate()
    }
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            seed: DEFAULT_SEED,
            shocks: ShockParams::default(),
        }
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Unset fields fall back to 500 paths, seed 42 and the default shock
/// parameters.
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    seed: Option<u64>,
    shocks: Option<ShockParams>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths.
    ///
    /// # Arguments
    ///
    /// * `n_paths` - Number of paths in [1, 1_000_000]
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the shock parameters.
    #[inline]
    pub fn shocks(mut self, shocks: ShockParams) -> Self {
        self.shocks = Some(shocks);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let config = MonteCarloConfig {
            n_paths: self.n_paths.unwrap_or(DEFAULT_PATHS),
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            shocks: self.shocks.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = MonteCarloConfig::builder().build().unwrap();

        assert_eq!(config.n_paths(), 500);
        assert_eq!(config.seed(), 42);
        assert_eq!(config.shocks(), &ShockParams::default());
        assert_eq!(config, MonteCarloConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let shocks = ShockParams::new(0.3, 0.05, 0.0).unwrap();
        let config = MonteCarloConfig::builder()
            .n_paths(10)
            .seed(1)
            .shocks(shocks)
            .build()
            .unwrap();

        assert_eq!(config.n_paths(), 10);
        assert_eq!(config.seed(), 1);
        assert_eq!(config.shocks().price_volatility, 0.3);
    }

    #[test]
    fn test_invalid_zero_paths() {
        let result = MonteCarloConfig::builder().n_paths(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(0))));
    }

    #[test]
    fn test_invalid_too_many_paths() {
        let result = MonteCarloConfig::builder().n_paths(MAX_PATHS + 1).build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(_))));
    }

    #[test]
    fn test_invalid_shocks() {
        let shocks = ShockParams {
            price_volatility: 0.2,
            intensity_volatility: 0.1,
            correlation: -2.0,
        };
        let result = MonteCarloConfig::builder().shocks(shocks).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "correlation",
                ..
            })
        ));
    }
}
