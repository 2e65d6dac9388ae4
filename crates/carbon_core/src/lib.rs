//! # carbon_core: Foundation Types for Carbon Transition Risk
//!
//! ## Layer 1 (Foundation) Role
//!
//! carbon_core is the bottom layer of the engine, providing:
//! - Scenario types: `ScenarioKind`, `ScenarioYearPoint`, `ScenarioPath` (`types::scenario`)
//! - Horizon selection: `HorizonYear` (`types::horizon`)
//! - Company inputs: `CompanyExposure` (`types::company`)
//! - Error types: `ScenarioError` (`types::error`)
//! - Deterministic scenario builder (`scenarios`)
//! - Company decarbonisation model (`decarbonisation`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use carbon_core::scenarios::generate_scenarios;
//! use carbon_core::types::ScenarioKind;
//!
//! let scenarios = generate_scenarios();
//! let orderly = scenarios.get(ScenarioKind::Orderly);
//!
//! assert_eq!(orderly.len(), 16);
//! assert_eq!(orderly.point(0).price, 50.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for scenario and company types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod decarbonisation;
pub mod scenarios;
pub mod types;

pub use decarbonisation::{decarbonisation_rate, DecarbonisationModel, IntensityRange};
pub use scenarios::{generate_scenario, generate_scenarios, ScenarioSet};
pub use types::{
    CompanyExposure, HorizonYear, ScenarioError, ScenarioKind, ScenarioPath, ScenarioYearPoint,
    BASE_YEAR, FINAL_YEAR, HORIZON_YEARS,
};
