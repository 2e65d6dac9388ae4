//! Value at Risk and Conditional Value at Risk.
//!
//! Metrics are read off the simulated cost distribution of one scenario at a
//! single horizon year:
//!
//! ```text
//! VaR_α  = cost[⌊α·n⌋]
//! CVaR_α = mean(cost[⌊α·n⌋..n])
//! ```
//!
//! over costs sorted ascending.

use crate::error::{RiskError, RiskResult};
use crate::stats::SortedSample;
use carbon_core::{ScenarioKind, BASE_YEAR, FINAL_YEAR};
use carbon_simulation::MonteCarloPath;
use tracing::debug;

/// Default VaR confidence level.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Risk metrics of one scenario at a horizon year.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VarMetrics {
    /// Scenario the metrics describe.
    pub scenario: ScenarioKind,
    /// Confidence level α.
    pub confidence: f64,
    /// Value at Risk at α.
    pub var: f64,
    /// Conditional Value at Risk (expected shortfall) at α.
    pub cvar: f64,
    /// Mean cost.
    pub mean: f64,
    /// Population standard deviation of cost.
    pub std_dev: f64,
    /// Median cost.
    pub median: f64,
    /// 5th percentile.
    pub p5: f64,
    /// 95th percentile.
    pub p95: f64,
}

impl VarMetrics {
    /// All-zero metrics, returned when no path matches.
    pub fn zero(scenario: ScenarioKind, confidence: f64) -> Self {
        Self {
            scenario,
            confidence,
            var: 0.0,
            cvar: 0.0,
            mean: 0.0,
            std_dev: 0.0,
            median: 0.0,
            p5: 0.0,
            p95: 0.0,
        }
    }

    /// Excess of CVaR over VaR.
    #[inline]
    pub fn tail_spread(&self) -> f64 {
        self.cvar - self.var
    }

    /// Returns true for the degenerate all-zero record.
    pub fn is_zero(&self) -> bool {
        self.var == 0.0 && self.cvar == 0.0 && self.mean == 0.0 && self.std_dev == 0.0
    }
}

/// Checks that the confidence level lies in (0, 1).
pub(crate) fn validate_confidence(confidence: f64) -> RiskResult<()> {
    if confidence > 0.0 && confidence < 1.0 {
        Ok(())
    } else {
        Err(RiskError::InvalidConfidence(confidence))
    }
}

/// Computes VaR metrics for one scenario at a horizon year.
///
/// # Arguments
///
/// * `paths` - Monte Carlo population (any mix of scenarios and years)
/// * `year` - Horizon year, in [2025, 2040]
/// * `scenario` - Scenario to filter on
/// * `confidence` - Confidence level α in (0, 1)
///
/// # Errors
///
/// Returns `RiskError::InvalidConfidence` or `RiskError::HorizonOutOfRange`.
/// A filter that matches no path is not an error: all-zero metrics are
/// returned instead.
///
/// # Examples
///
/// ```
/// use carbon_core::ScenarioKind;
/// use carbon_risk::calculate_var;
///
/// let metrics = calculate_var(&[], 2040, ScenarioKind::Orderly, 0.95).unwrap();
/// assert!(metrics.is_zero());
/// ```
pub fn calculate_var(
    paths: &[MonteCarloPath],
    year: i32,
    scenario: ScenarioKind,
    confidence: f64,
) -> RiskResult<VarMetrics> {
    validate_confidence(confidence)?;
    if !(BASE_YEAR..=FINAL_YEAR).contains(&year) {
        return Err(RiskError::HorizonOutOfRange {
            year,
            first: BASE_YEAR,
            last: FINAL_YEAR,
        });
    }

    let costs: Vec<f64> = paths
        .iter()
        .filter(|p| p.year == year && p.scenario == scenario)
        .map(|p| p.portfolio_cost)
        .collect();

    if costs.is_empty() {
        debug!(%scenario, year, "no paths at horizon; returning zero metrics");
        return Ok(VarMetrics::zero(scenario, confidence));
    }

    let sample = SortedSample::new(costs);
    Ok(VarMetrics {
        scenario,
        confidence,
        var: sample.quantile(confidence),
        cvar: sample.tail_mean(confidence),
        mean: sample.mean(),
        std_dev: sample.population_std_dev(),
        median: sample.quantile(0.5),
        p5: sample.quantile(0.05),
        p95: sample.quantile(0.95),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn population(costs: &[f64], scenario: ScenarioKind, year: i32) -> Vec<MonteCarloPath> {
        costs
            .iter()
            .enumerate()
            .map(|(path_id, &portfolio_cost)| MonteCarloPath {
                path_id,
                scenario,
                year,
                portfolio_cost,
                price: 100.0,
                intensity_factor: 1.0,
            })
            .collect()
    }

    #[test]
    fn test_floor_index_metrics() {
        let costs: Vec<f64> = (1..=20).rev().map(f64::from).collect();
        let paths = population(&costs, ScenarioKind::Orderly, 2040);
        let metrics = calculate_var(&paths, 2040, ScenarioKind::Orderly, 0.95).unwrap();

        // Sorted 1..=20; ⌊0.95 × 20⌋ = 19.
        assert_eq!(metrics.var, 20.0);
        assert_eq!(metrics.cvar, 20.0);
        // ⌊20 / 2⌋ = 10 → 11.
        assert_eq!(metrics.median, 11.0);
        // ⌊0.05 × 20⌋ = 1 → 2.
        assert_eq!(metrics.p5, 2.0);
        assert_eq!(metrics.p95, 20.0);
        assert_relative_eq!(metrics.mean, 10.5);
        assert_relative_eq!(metrics.std_dev, (399.0_f64 / 12.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_cvar_averages_tail() {
        let costs: Vec<f64> = (1..=10).map(f64::from).collect();
        let paths = population(&costs, ScenarioKind::Hothouse, 2030);
        let metrics = calculate_var(&paths, 2030, ScenarioKind::Hothouse, 0.7).unwrap();

        // ⌊0.7 × 10⌋ = 7 → tail [8, 9, 10].
        assert_eq!(metrics.var, 8.0);
        assert_relative_eq!(metrics.cvar, 9.0);
        assert_relative_eq!(metrics.tail_spread(), 1.0);
    }

    #[test]
    fn test_filter_by_scenario_and_year() {
        let mut paths = population(&[1.0, 2.0, 3.0], ScenarioKind::Orderly, 2035);
        paths.extend(population(&[1000.0, 2000.0], ScenarioKind::Disorderly, 2035));
        paths.extend(population(&[500.0], ScenarioKind::Orderly, 2036));

        let metrics = calculate_var(&paths, 2035, ScenarioKind::Orderly, 0.95).unwrap();
        assert_eq!(metrics.var, 3.0);
        assert_relative_eq!(metrics.mean, 2.0);
    }

    #[test]
    fn test_empty_filter_returns_zero() {
        let paths = population(&[1.0, 2.0], ScenarioKind::Orderly, 2030);
        let metrics = calculate_var(&paths, 2040, ScenarioKind::Orderly, 0.95).unwrap();

        assert_eq!(metrics, VarMetrics::zero(ScenarioKind::Orderly, 0.95));
        assert!(metrics.is_zero());
    }

    #[test]
    fn test_invalid_confidence() {
        for confidence in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let result = calculate_var(&[], 2030, ScenarioKind::Orderly, confidence);
            assert!(matches!(result, Err(RiskError::InvalidConfidence(_))));
        }
    }

    #[test]
    fn test_horizon_out_of_range() {
        let result = calculate_var(&[], 2041, ScenarioKind::Orderly, 0.95);
        assert!(matches!(
            result,
            Err(RiskError::HorizonOutOfRange { year: 2041, .. })
        ));
        assert!(calculate_var(&[], 2024, ScenarioKind::Orderly, 0.95).is_err());
    }

    #[test]
    fn test_single_path() {
        let paths = population(&[42.0], ScenarioKind::Disorderly, 2025);
        let metrics = calculate_var(&paths, 2025, ScenarioKind::Disorderly, 0.99).unwrap();

        assert_eq!(metrics.var, 42.0);
        assert_eq!(metrics.cvar, 42.0);
        assert_eq!(metrics.median, 42.0);
        assert_eq!(metrics.std_dev, 0.0);
    }
}
