//! # carbon_simulation (L2: Engine)
//!
//! Scenario simulation engine for carbon cost projection.
//!
//! This crate provides:
//! - A seeded linear congruential stream with a fixed, reproducible sequence
//! - Correlated price / intensity shock generation (Box-Muller)
//! - Monte Carlo simulation of portfolio carbon cost per path and year
//! - Deterministic company and portfolio trajectories
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         carbon_simulation (L2)          │
//! ├─────────────────────────────────────────┤
//! │  rng/        - ScenarioRng, shocks      │
//! │  mc/         - Config, Simulator, Paths │
//! │  trajectory  - Deterministic paths      │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            carbon_core (L1)             │
//! │  Scenarios, companies, decarbonisation  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Reproducibility
//!
//! The simulator consumes a single stream in path-major, year-minor order.
//! Two runs with the same seed and inputs produce bit-identical populations.
//!
//! ## Example
//!
//! ```
//! use carbon_core::{generate_scenario, CompanyExposure, ScenarioKind};
//! use carbon_simulation::mc::{MonteCarloConfig, MonteCarloSimulator};
//!
//! let companies = vec![
//!     CompanyExposure::new("A", 1000.0, 0.01),
//!     CompanyExposure::new("B", 2000.0, 0.02),
//! ];
//! let scenario = generate_scenario(ScenarioKind::Orderly);
//!
//! let config = MonteCarloConfig::builder().n_paths(100).seed(42).build().unwrap();
//! let paths = MonteCarloSimulator::new(config).run(&companies, &scenario);
//!
//! assert_eq!(paths.len(), 100 * 16);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
pub mod trajectory;

pub use mc::{ConfigError, MonteCarloConfig, MonteCarloPath, MonteCarloSimulator};
pub use rng::{CorrelatedShockGenerator, ScenarioRng, ShockPair, ShockParams, UniformSource};
pub use trajectory::{
    portfolio_trajectory, simulate_company_trajectory, CompanyTrajectory, CompanyYearPoint,
    PortfolioTrajectory, PortfolioYearPoint,
};
