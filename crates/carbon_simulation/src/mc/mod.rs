//! Monte Carlo engine for carbon cost simulation.
//!
//! This module provides:
//! - [`MonteCarloConfig`]: Path count, seed and shock parameters
//! - [`MonteCarloSimulator`]: Path-major simulation over a scenario
//! - [`MonteCarloPath`]: One (path, year) outcome
//! - [`ConfigError`]: Configuration validation errors

pub mod config;
pub mod error;
pub mod simulator;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_PATHS, MAX_PATHS};
pub use error::ConfigError;
pub use simulator::{MonteCarloPath, MonteCarloSimulator};
