//! Deterministic company and portfolio cost trajectories.
//!
//! The expected path of a company applies the nominal scenario and its own
//! decarbonisation rate, with no random shocks:
//!
//! ```text
//! emissions(t) = E × I(t) × (1 - d)^t
//! cost(t)      = emissions(t) × P(t)
//! ```

use carbon_core::{CompanyExposure, DecarbonisationModel, ScenarioKind, ScenarioPath};
use tracing::warn;

/// One year of a company trajectory.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompanyYearPoint {
    /// Calendar year.
    pub year: i32,
    /// Projected emissions (tCO2e).
    pub emissions: f64,
    /// Projected carbon cost (USD).
    pub cost: f64,
}

/// Expected emissions and cost of one company under one scenario.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompanyTrajectory {
    /// Company name.
    pub company: String,
    /// Annual decarbonisation rate applied.
    pub decarbonisation_rate: f64,
    /// Per-year points, ordered by year.
    pub points: Vec<CompanyYearPoint>,
}

/// Projects a single company along a scenario.
///
/// # Examples
///
/// ```rust
/// use carbon_core::{generate_scenario, CompanyExposure, ScenarioKind};
/// use carbon_simulation::simulate_company_trajectory;
///
/// let company = CompanyExposure::new("A", 1000.0, 0.02);
/// let scenario = generate_scenario(ScenarioKind::Orderly);
/// let trajectory = simulate_company_trajectory(&company, &scenario, 0.03);
///
/// assert_eq!(trajectory.points.len(), 16);
/// assert_eq!(trajectory.points[0].cost, 50_000.0);
/// ```
pub fn simulate_company_trajectory(
    company: &CompanyExposure,
    scenario: &ScenarioPath,
    decarbonisation_rate: f64,
) -> CompanyTrajectory {
    let retention = 1.0 - decarbonisation_rate;
    let points = scenario
        .iter()
        .enumerate()
        .map(|(t, point)| {
            let emissions =
                company.total_emissions() * point.intensity_factor * retention.powf(t as f64);
            CompanyYearPoint {
                year: point.year,
                emissions,
                cost: emissions * point.price,
            }
        })
        .collect();

    CompanyTrajectory {
        company: company.name().to_string(),
        decarbonisation_rate,
        points,
    }
}

/// One year of the aggregate portfolio trajectory.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PortfolioYearPoint {
    /// Calendar year.
    pub year: i32,
    /// Sum of company costs (USD).
    pub total_cost: f64,
    /// Sum of company emissions (tCO2e).
    pub total_emissions: f64,
    /// Unshocked scenario carbon price.
    pub nominal_price: f64,
}

/// Portfolio-level expected trajectory for one scenario.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PortfolioTrajectory {
    /// Scenario projected.
    pub scenario: ScenarioKind,
    /// Per-year aggregates, ordered by year.
    pub points: Vec<PortfolioYearPoint>,
}

impl PortfolioTrajectory {
    /// Total cost over the whole horizon.
    pub fn cumulative_cost(&self) -> f64 {
        self.points.iter().map(|p| p.total_cost).sum()
    }

    /// Point for a calendar year, if inside the horizon.
    pub fn at_year(&self, year: i32) -> Option<&PortfolioYearPoint> {
        self.points.iter().find(|p| p.year == year)
    }
}

/// Aggregates company trajectories into a portfolio trajectory.
///
/// Decarbonisation rates are derived once from the cohort. An empty company
/// list yields zero cost and emissions at every year.
pub fn portfolio_trajectory(
    companies: &[CompanyExposure],
    scenario: &ScenarioPath,
) -> PortfolioTrajectory {
    let model = DecarbonisationModel::from_cohort(companies);
    if model.is_degenerate() && !companies.is_empty() {
        warn!(
            scenario = %scenario.kind(),
            "no company has positive intensity; using the low decarbonisation target for all"
        );
    }

    let mut points: Vec<PortfolioYearPoint> = scenario
        .iter()
        .map(|point| PortfolioYearPoint {
            year: point.year,
            total_cost: 0.0,
            total_emissions: 0.0,
            nominal_price: point.price,
        })
        .collect();

    for company in companies {
        let trajectory = simulate_company_trajectory(company, scenario, model.rate_for(company));
        for (aggregate, point) in points.iter_mut().zip(&trajectory.points) {
            aggregate.total_cost += point.cost;
            aggregate.total_emissions += point.emissions;
        }
    }

    PortfolioTrajectory {
        scenario: scenario.kind(),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use carbon_core::generate_scenario;

    fn cohort() -> Vec<CompanyExposure> {
        vec![
            CompanyExposure::new("A", 1000.0, 0.01),
            CompanyExposure::new("B", 2000.0, 0.02),
            CompanyExposure::new("C", 3000.0, 0.03),
        ]
    }

    #[test]
    fn test_orderly_base_year_cost() {
        let scenario = generate_scenario(ScenarioKind::Orderly);
        let trajectory = portfolio_trajectory(&cohort(), &scenario);

        let first = trajectory.points[0];
        assert_eq!(first.year, 2025);
        assert_relative_eq!(first.total_cost, 300_000.0);
        assert_relative_eq!(first.total_emissions, 6000.0);
        assert_eq!(first.nominal_price, 50.0);
    }

    #[test]
    fn test_company_trajectory_formula() {
        let scenario = generate_scenario(ScenarioKind::Hothouse);
        let company = CompanyExposure::new("A", 1000.0, 0.02);
        let trajectory = simulate_company_trajectory(&company, &scenario, 0.05);

        assert_eq!(trajectory.company, "A");
        let t = 10;
        let expected_emissions = 1000.0 * 0.99_f64.powf(10.0) * 0.95_f64.powf(10.0);
        assert_relative_eq!(trajectory.points[t].emissions, expected_emissions, epsilon = 1e-9);
        assert_relative_eq!(
            trajectory.points[t].cost,
            expected_emissions * 60.0,
            epsilon = 1e-7
        );
    }

    #[test]
    fn test_portfolio_sums_company_trajectories() {
        let scenario = generate_scenario(ScenarioKind::Disorderly);
        let companies = cohort();
        let portfolio = portfolio_trajectory(&companies, &scenario);
        let model = DecarbonisationModel::from_cohort(&companies);

        let last_year_cost: f64 = companies
            .iter()
            .map(|c| simulate_company_trajectory(c, &scenario, model.rate_for(c)).points[15].cost)
            .sum();
        assert_relative_eq!(portfolio.points[15].total_cost, last_year_cost, max_relative = 1e-12);
        assert_eq!(portfolio.points[15].nominal_price, 56.0 + 20.0 * 7.0);
    }

    #[test]
    fn test_empty_portfolio() {
        let scenario = generate_scenario(ScenarioKind::Orderly);
        let portfolio = portfolio_trajectory(&[], &scenario);

        assert_eq!(portfolio.points.len(), 16);
        assert!(portfolio.points.iter().all(|p| p.total_cost == 0.0));
        assert_eq!(portfolio.cumulative_cost(), 0.0);
    }

    #[test]
    fn test_cumulative_cost_and_lookup() {
        let scenario = generate_scenario(ScenarioKind::Orderly);
        let portfolio = portfolio_trajectory(&cohort(), &scenario);

        let manual: f64 = portfolio.points.iter().map(|p| p.total_cost).sum();
        assert_relative_eq!(portfolio.cumulative_cost(), manual);
        assert_eq!(portfolio.at_year(2030).map(|p| p.year), Some(2030));
        assert!(portfolio.at_year(2041).is_none());
    }
}
