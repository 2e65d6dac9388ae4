//! Year-by-year uncertainty bands.
//!
//! Each band summarises the simulated cost distribution of one year with
//! the same floor-index percentiles as the VaR metrics.

use crate::stats::SortedSample;
use carbon_core::ScenarioKind;
use carbon_simulation::MonteCarloPath;
use std::collections::BTreeMap;

/// Distribution summary of one simulated year.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UncertaintyBand {
    /// Calendar year.
    pub year: i32,
    /// Mean cost.
    pub mean: f64,
    /// 5th percentile.
    pub p5: f64,
    /// 25th percentile.
    pub p25: f64,
    /// Median.
    pub median: f64,
    /// 75th percentile.
    pub p75: f64,
    /// 95th percentile.
    pub p95: f64,
}

impl UncertaintyBand {
    fn from_costs(year: i32, costs: Vec<f64>) -> Self {
        let sample = SortedSample::new(costs);
        Self {
            year,
            mean: sample.mean(),
            p5: sample.quantile(0.05),
            p25: sample.quantile(0.25),
            median: sample.quantile(0.5),
            p75: sample.quantile(0.75),
            p95: sample.quantile(0.95),
        }
    }

    /// Width of the 90% envelope.
    #[inline]
    pub fn width(&self) -> f64 {
        self.p95 - self.p5
    }
}

/// Computes uncertainty bands for one scenario, ordered by year.
///
/// Years with no path for the scenario are omitted.
///
/// # Examples
///
/// ```
/// use carbon_core::{generate_scenario, CompanyExposure, ScenarioKind};
/// use carbon_risk::uncertainty_bands;
/// use carbon_simulation::{MonteCarloConfig, MonteCarloSimulator};
///
/// let companies = vec![CompanyExposure::new("A", 1000.0, 0.02)];
/// let scenario = generate_scenario(ScenarioKind::Orderly);
/// let paths = MonteCarloSimulator::new(MonteCarloConfig::default()).run(&companies, &scenario);
///
/// let bands = uncertainty_bands(&paths, ScenarioKind::Orderly);
/// assert_eq!(bands.len(), 16);
/// assert!(bands.iter().all(|b| b.p5 <= b.p95));
/// ```
pub fn uncertainty_bands(paths: &[MonteCarloPath], scenario: ScenarioKind) -> Vec<UncertaintyBand> {
    let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for path in paths.iter().filter(|p| p.scenario == scenario) {
        by_year.entry(path.year).or_default().push(path.portfolio_cost);
    }

    by_year
        .into_iter()
        .map(|(year, costs)| UncertaintyBand::from_costs(year, costs))
        .collect()
}
