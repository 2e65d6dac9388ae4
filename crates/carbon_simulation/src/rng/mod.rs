//! # Random Number Generation Infrastructure
//!
//! This module provides the random streams driving the Monte Carlo
//! simulation.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: The reference stream is a fixed linear congruential
//!   generator, so a given seed always yields the same shock sequence
//! - **Explicit state**: Generators are values passed into the simulator,
//!   never ambient globals, so tests cannot contaminate one another
//! - **Static dispatch**: The [`UniformSource`] seam is generic, no
//!   `Box<dyn Trait>` in the hot loop
//!
//! ## Module Structure
//!
//! - [`lcg`]: `ScenarioRng`, the reference linear congruential stream
//! - [`source`]: `UniformSource`, implemented for `ScenarioRng` and `StdRng`
//! - [`shocks`]: Box-Muller transform and correlated shock pairs
//!
//! ## Usage Example
//!
//! ```rust
//! use carbon_simulation::rng::{CorrelatedShockGenerator, ScenarioRng, ShockParams};
//!
//! let mut rng = ScenarioRng::new(42);
//! let generator = CorrelatedShockGenerator::new(ShockParams::default());
//!
//! let shock = generator.next_pair(&mut rng);
//! assert!(shock.price.is_finite());
//! ```

pub mod lcg;
pub mod shocks;
pub mod source;

pub use lcg::ScenarioRng;
pub use shocks::{standard_normal_pair, CorrelatedShockGenerator, ShockPair, ShockParams};
pub use source::UniformSource;
