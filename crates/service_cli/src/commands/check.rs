//! Check command implementation
//!
//! Validates the configuration, the scenario set and, when given, the
//! company file.

use crate::config::CliConfig;
use crate::Result;
use carbon_core::{generate_scenarios, DecarbonisationModel};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Run the check command
pub fn run<W: Write>(out: &mut W, config: &CliConfig, input: Option<&Path>) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;

    writeln!(out, "Configuration")?;
    writeln!(out, "  Monte Carlo paths: {}", config.simulation.n_paths)?;
    writeln!(out, "  Seed:              {}", config.simulation.seed)?;
    writeln!(out, "  Confidence:        {}", config.simulation.confidence)?;
    writeln!(out, "  Horizon:           {}", config.horizon)?;
    writeln!(out, "  Output format:     {}", config.output_format)?;

    let scenarios = generate_scenarios();
    writeln!(out, "Scenarios")?;
    for scenario in scenarios.iter() {
        let first = scenario.point(0);
        let last = scenario.point(scenario.len() - 1);
        writeln!(
            out,
            "  {:<22} {} points, ${:.0} -> ${:.0}/t",
            scenario.kind().display_name(),
            scenario.len(),
            first.price,
            last.price
        )?;
    }

    if let Some(path) = input {
        let companies = super::load_companies(path)?;
        let model = DecarbonisationModel::from_cohort(&companies);
        writeln!(out, "Company data")?;
        writeln!(out, "  File:      {}", path.display())?;
        writeln!(out, "  Companies: {}", companies.len())?;
        match model.range() {
            Some(range) => writeln!(
                out,
                "  Intensity: {:.4} .. {:.4}",
                range.min, range.max
            )?,
            None => writeln!(
                out,
                "  Intensity: no positive values; every company uses the low decarbonisation target"
            )?,
        }
    }

    writeln!(out, "OK")?;
    Ok(())
}
