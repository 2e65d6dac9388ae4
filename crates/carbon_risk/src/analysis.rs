//! Full scenario analysis pipeline.
//!
//! Runs every scenario through the deterministic trajectory calculator and
//! the Monte Carlo simulator, then extracts VaR metrics at the horizon and
//! per-year uncertainty bands. Each scenario's simulation starts from the
//! same seed.

use crate::bands::{uncertainty_bands, UncertaintyBand};
use crate::error::RiskResult;
use crate::var::{calculate_var, validate_confidence, VarMetrics, DEFAULT_CONFIDENCE};
use carbon_core::{generate_scenarios, CompanyExposure, HorizonYear, ScenarioKind};
use carbon_simulation::mc::{MonteCarloConfig, MonteCarloPath, MonteCarloSimulator, DEFAULT_PATHS};
use carbon_simulation::rng::lcg::DEFAULT_SEED;
use carbon_simulation::{portfolio_trajectory, PortfolioTrajectory};
use tracing::info;

/// Settings of a scenario analysis run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisConfig {
    /// Monte Carlo paths per scenario.
    pub n_paths: usize,
    /// Seed of every scenario's reference stream.
    pub seed: u64,
    /// Horizon year for VaR metrics.
    pub horizon: HorizonYear,
    /// VaR confidence level.
    pub confidence: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            seed: DEFAULT_SEED,
            horizon: HorizonYear::default(),
            confidence: DEFAULT_CONFIDENCE,
        }
    }
}

/// Uncertainty bands of one scenario.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioBands {
    /// Scenario described.
    pub scenario: ScenarioKind,
    /// Bands ordered by year.
    pub bands: Vec<UncertaintyBand>,
}

/// Output of [`run_scenario_analysis`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioAnalysis {
    /// Deterministic portfolio trajectory per scenario.
    pub trajectories: Vec<PortfolioTrajectory>,
    /// Monte Carlo population of all scenarios, scenario by scenario.
    pub paths: Vec<MonteCarloPath>,
    /// VaR metrics at the horizon per scenario.
    pub var_metrics: Vec<VarMetrics>,
    /// Uncertainty bands per scenario.
    pub bands: Vec<ScenarioBands>,
}

impl ScenarioAnalysis {
    /// Returns true when no company was analysed.
    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    /// VaR metrics of a scenario.
    pub fn metrics_for(&self, scenario: ScenarioKind) -> Option<&VarMetrics> {
        self.var_metrics.iter().find(|m| m.scenario == scenario)
    }

    /// Deterministic trajectory of a scenario.
    pub fn trajectory_for(&self, scenario: ScenarioKind) -> Option<&PortfolioTrajectory> {
        self.trajectories.iter().find(|t| t.scenario == scenario)
    }

    /// Uncertainty bands of a scenario.
    pub fn bands_for(&self, scenario: ScenarioKind) -> Option<&[UncertaintyBand]> {
        self.bands
            .iter()
            .find(|b| b.scenario == scenario)
            .map(|b| b.bands.as_slice())
    }
}

/// Runs the complete analysis over all three scenarios.
///
/// An empty company list yields an empty analysis.
///
/// # Errors
///
/// Returns `RiskError::Simulation` for an invalid path count and
/// `RiskError::InvalidConfidence` for a confidence outside (0, 1).
pub fn run_scenario_analysis(
    companies: &[CompanyExposure],
    config: &AnalysisConfig,
) -> RiskResult<ScenarioAnalysis> {
    run_selected_scenarios(companies, config, &ScenarioKind::ALL)
}

/// Runs the analysis for the given scenarios only, in the order given.
///
/// Every selected scenario starts from the configured seed, so its results
/// are identical to the same scenario in [`run_scenario_analysis`].
///
/// # Errors
///
/// As [`run_scenario_analysis`].
pub fn run_selected_scenarios(
    companies: &[CompanyExposure],
    config: &AnalysisConfig,
    scenarios: &[ScenarioKind],
) -> RiskResult<ScenarioAnalysis> {
    validate_confidence(config.confidence)?;
    let mc_config = MonteCarloConfig::builder()
        .n_paths(config.n_paths)
        .seed(config.seed)
        .build()?;

    if companies.is_empty() {
        return Ok(ScenarioAnalysis::default());
    }

    info!(
        n_companies = companies.len(),
        n_scenarios = scenarios.len(),
        n_paths = config.n_paths,
        seed = config.seed,
        horizon = %config.horizon,
        "running scenario analysis"
    );

    let simulator = MonteCarloSimulator::new(mc_config);
    let scenario_set = generate_scenarios();
    let n_years = scenario_set.get(ScenarioKind::Orderly).len();
    let mut analysis = ScenarioAnalysis {
        paths: Vec::with_capacity(scenarios.len() * config.n_paths * n_years),
        ..ScenarioAnalysis::default()
    };

    for &kind in scenarios {
        let scenario = scenario_set.get(kind);
        analysis.trajectories.push(portfolio_trajectory(companies, scenario));

        let paths = simulator.run(companies, scenario);
        analysis
            .var_metrics
            .push(calculate_var(&paths, config.horizon.year(), kind, config.confidence)?);
        analysis.bands.push(ScenarioBands {
            scenario: kind,
            bands: uncertainty_bands(&paths, kind),
        });
        analysis.paths.extend(paths);
    }

    Ok(analysis)
}
