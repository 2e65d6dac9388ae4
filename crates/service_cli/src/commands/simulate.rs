//! Simulate command implementation
//!
//! Runs the Monte Carlo analysis and reports VaR metrics at the horizon,
//! optionally with year-by-year uncertainty bands.

use crate::output::{format_currency, write_csv, write_json, OutputFormat, Table};
use crate::Result;
use carbon_core::{CompanyExposure, ScenarioKind};
use carbon_risk::{run_selected_scenarios, AnalysisConfig, ScenarioBands, VarMetrics};
use serde::Serialize;
use std::io::Write;
use tracing::{info, warn};

/// JSON report of a simulation run.
#[derive(Debug, Serialize)]
struct SimulationReport<'a> {
    settings: &'a AnalysisConfig,
    metrics: Vec<VarMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bands: Option<Vec<ScenarioBands>>,
}

/// Flat CSV row of an uncertainty band.
#[derive(Debug, Serialize)]
struct BandRow {
    scenario: ScenarioKind,
    year: i32,
    mean: f64,
    p5: f64,
    p25: f64,
    median: f64,
    p75: f64,
    p95: f64,
}

/// Run the simulate command
///
/// Only the selected scenarios are simulated. In CSV mode, `with_bands` switches the output from the metric rows to the
/// band rows.
pub fn run<W: Write>(
    out: &mut W,
    companies: &[CompanyExposure],
    settings: &AnalysisConfig,
    scenarios: &[ScenarioKind],
    with_bands: bool,
    format: OutputFormat,
) -> Result<()> {
    info!("Starting simulation...");
    info!("  Monte Carlo paths: {}", settings.n_paths);
    info!("  Seed: {}", settings.seed);
    info!("  Horizon: {}", settings.horizon);

    let analysis = run_selected_scenarios(companies, settings, scenarios)?;
    if analysis.is_empty() {
        warn!("No companies to simulate");
    }
    let metrics = analysis.var_metrics;
    let bands = analysis.bands;

    match format {
        OutputFormat::Json => write_json(
            out,
            &SimulationReport {
                settings,
                metrics,
                bands: with_bands.then_some(bands),
            },
        ),
        OutputFormat::Csv if with_bands => {
            let rows: Vec<BandRow> = bands
                .iter()
                .flat_map(|sb| {
                    sb.bands.iter().map(move |b| BandRow {
                        scenario: sb.scenario,
                        year: b.year,
                        mean: b.mean,
                        p5: b.p5,
                        p25: b.p25,
                        median: b.median,
                        p75: b.p75,
                        p95: b.p95,
                    })
                })
                .collect();
            write_csv(out, &rows)
        }
        OutputFormat::Csv => write_csv(out, &metrics),
        OutputFormat::Table => {
            write_metrics_table(out, settings, &metrics)?;
            if with_bands {
                for scenario_bands in &bands {
                    write_bands_table(out, scenario_bands)?;
                }
            }
            Ok(())
        }
    }
}

fn write_metrics_table<W: Write>(
    out: &mut W,
    settings: &AnalysisConfig,
    metrics: &[VarMetrics],
) -> Result<()> {
    let level = format!("{:.0}%", settings.confidence * 100.0);
    writeln!(
        out,
        "\nCarbon cost distribution at {} ({} paths)",
        settings.horizon, settings.n_paths
    )?;

    let mut table = Table::new([
        "Scenario".to_string(),
        "Mean".to_string(),
        "Std Dev".to_string(),
        "Median".to_string(),
        "P5".to_string(),
        "P95".to_string(),
        format!("VaR {}", level),
        format!("CVaR {}", level),
    ]);
    for m in metrics {
        table.add_row([
            m.scenario.display_name().to_string(),
            format_currency(m.mean, true),
            format_currency(m.std_dev, true),
            format_currency(m.median, true),
            format_currency(m.p5, true),
            format_currency(m.p95, true),
            format_currency(m.var, true),
            format_currency(m.cvar, true),
        ]);
    }
    write!(out, "{}", table.render())?;
    Ok(())
}

fn write_bands_table<W: Write>(out: &mut W, scenario_bands: &ScenarioBands) -> Result<()> {
    writeln!(
        out,
        "\n{} uncertainty bands",
        scenario_bands.scenario.display_name()
    )?;
    let mut table = Table::new(["Year", "Mean", "P5", "P25", "Median", "P75", "P95"]);
    for band in &scenario_bands.bands {
        table.add_row([
            band.year.to_string(),
            format_currency(band.mean, true),
            format_currency(band.p5, true),
            format_currency(band.p25, true),
            format_currency(band.median, true),
            format_currency(band.p75, true),
            format_currency(band.p95, true),
        ]);
    }
    write!(out, "{}", table.render())?;
    Ok(())
}
