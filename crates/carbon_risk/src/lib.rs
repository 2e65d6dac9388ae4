//! # carbon_risk (L3: Application)
//!
//! Risk metric extraction for carbon transition scenarios.
//!
//! This crate provides:
//! - VaR / CVaR and distribution statistics at a horizon year
//! - Year-by-year uncertainty bands around the deterministic path
//! - Static flat-price exposure and company ranking
//! - The complete three-scenario analysis pipeline
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            carbon_risk (L3)             │
//! ├─────────────────────────────────────────┤
//! │  var        - VaR, CVaR, percentiles    │
//! │  bands      - Uncertainty envelopes     │
//! │  exposure   - Static price stress       │
//! │  analysis   - Scenario pipeline         │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │         carbon_simulation (L2)          │
//! │  Monte Carlo engine, trajectories       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Percentiles
//!
//! All percentiles take the order statistic at `⌊q·n⌋` of the ascending
//! sample. There is no interpolation, so results match reference outputs
//! exactly for a fixed seed.
//!
//! ## Example
//!
//! ```
//! use carbon_core::{CompanyExposure, ScenarioKind};
//! use carbon_risk::{run_scenario_analysis, AnalysisConfig};
//!
//! let companies = vec![
//!     CompanyExposure::new("A", 1000.0, 0.01),
//!     CompanyExposure::new("B", 2000.0, 0.03),
//! ];
//! let analysis = run_scenario_analysis(&companies, &AnalysisConfig::default()).unwrap();
//!
//! let orderly = analysis.metrics_for(ScenarioKind::Orderly).unwrap();
//! assert!(orderly.var <= orderly.cvar);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analysis;
pub mod bands;
pub mod error;
pub mod exposure;
mod stats;
pub mod var;

pub use analysis::{
    run_scenario_analysis, run_selected_scenarios, AnalysisConfig, ScenarioAnalysis, ScenarioBands,
};
pub use bands::{uncertainty_bands, UncertaintyBand};
pub use error::{RiskError, RiskResult};
pub use exposure::{
    static_price_exposure, top_companies_by_exposure, StaticPriceExposure, STATIC_PRICE_LEVELS,
};
pub use var::{calculate_var, VarMetrics, DEFAULT_CONFIDENCE};
