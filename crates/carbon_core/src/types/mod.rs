//! Core types for carbon transition scenarios.
//!
//! This module provides:
//! - `ScenarioKind`: The closed set of climate transition scenarios
//! - `ScenarioYearPoint` / `ScenarioPath`: Year-indexed price and intensity trajectories
//! - `HorizonYear`: Supported risk horizons
//! - `CompanyExposure`: Company-level emissions input
//! - `ScenarioError`: Errors from parsing and validation

pub mod company;
pub mod error;
pub mod horizon;
pub mod scenario;

pub use company::CompanyExposure;
pub use error::ScenarioError;
pub use horizon::HorizonYear;
pub use scenario::{ScenarioKind, ScenarioPath, ScenarioYearPoint};

/// First calendar year of every scenario (year index 0).
pub const BASE_YEAR: i32 = 2025;

/// Number of yearly points in every scenario.
pub const HORIZON_YEARS: usize = 16;

/// Last calendar year of every scenario (year index 15).
pub const FINAL_YEAR: i32 = BASE_YEAR + HORIZON_YEARS as i32 - 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_constants() {
        assert_eq!(BASE_YEAR, 2025);
        assert_eq!(FINAL_YEAR, 2040);
        assert_eq!(HORIZON_YEARS, 16);
    }
}
