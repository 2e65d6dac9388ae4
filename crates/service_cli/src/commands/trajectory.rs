//! Trajectory command implementation
//!
//! Projects the deterministic portfolio cost path under each scenario.

use crate::output::{format_currency, format_number, write_csv, write_json, OutputFormat, Table};
use crate::Result;
use carbon_core::{generate_scenario, CompanyExposure, ScenarioKind};
use carbon_simulation::{portfolio_trajectory, PortfolioTrajectory};
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// Flat CSV row of a trajectory point.
#[derive(Debug, Serialize)]
struct TrajectoryRow {
    scenario: ScenarioKind,
    year: i32,
    nominal_price: f64,
    total_emissions: f64,
    total_cost: f64,
}

/// Run the trajectory command
pub fn run<W: Write>(
    out: &mut W,
    companies: &[CompanyExposure],
    scenarios: &[ScenarioKind],
    format: OutputFormat,
) -> Result<()> {
    info!("Projecting {} scenario(s)", scenarios.len());

    let trajectories: Vec<PortfolioTrajectory> = scenarios
        .iter()
        .map(|&kind| portfolio_trajectory(companies, &generate_scenario(kind)))
        .collect();

    match format {
        OutputFormat::Json => write_json(out, &trajectories),
        OutputFormat::Csv => {
            let rows: Vec<TrajectoryRow> = trajectories
                .iter()
                .flat_map(|t| {
                    t.points.iter().map(move |p| TrajectoryRow {
                        scenario: t.scenario,
                        year: p.year,
                        nominal_price: p.nominal_price,
                        total_emissions: p.total_emissions,
                        total_cost: p.total_cost,
                    })
                })
                .collect();
            write_csv(out, &rows)
        }
        OutputFormat::Table => {
            for trajectory in &trajectories {
                writeln!(out, "\n{}", trajectory.scenario.display_name())?;
                let mut table = Table::new(["Year", "Price ($/t)", "Emissions (t)", "Cost"]);
                for point in &trajectory.points {
                    table.add_row([
                        point.year.to_string(),
                        format!("{:.0}", point.nominal_price),
                        format_number(point.total_emissions, 1),
                        format_currency(point.total_cost, true),
                    ]);
                }
                write!(out, "{}", table.render())?;
                writeln!(
                    out,
                    "Cumulative cost 2025-2040: {}",
                    format_currency(trajectory.cumulative_cost(), true)
                )?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{cohort, render};

    #[test]
    fn test_table_output() {
        let text = render(|out| run(out, &cohort(), &[ScenarioKind::Orderly], OutputFormat::Table));

        assert!(text.contains("Orderly Transition"));
        assert!(text.contains("│ 2025 │"));
        assert!(text.contains("$300K"));
        assert!(text.contains("Cumulative cost"));
    }

    #[test]
    fn test_csv_output() {
        let text = render(|out| run(out, &cohort(), &ScenarioKind::ALL, OutputFormat::Csv));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "scenario,year,nominal_price,total_emissions,total_cost");
        assert_eq!(lines.len(), 1 + 3 * 16);
        assert!(lines[1].starts_with("orderly,2025,50.0,6000.0,300000.0"));
    }

    #[test]
    fn test_json_output() {
        let text = render(|out| run(out, &cohort(), &[ScenarioKind::Hothouse], OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value[0]["scenario"], "hothouse");
        assert_eq!(value[0]["points"].as_array().map(|p| p.len()), Some(16));
    }
}
