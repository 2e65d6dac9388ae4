//! Exposure command implementation
//!
//! Static carbon-price stress and the most exposed companies.

use crate::output::{format_currency, format_number, write_csv, write_json, OutputFormat, Table};
use crate::{CliError, Result};
use carbon_core::CompanyExposure;
use carbon_risk::{
    static_price_exposure, top_companies_by_exposure, StaticPriceExposure, STATIC_PRICE_LEVELS,
};
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// One ranked company.
#[derive(Debug, Serialize)]
struct RankedCompany<'a> {
    rank: usize,
    company: &'a str,
    hq_country: Option<&'a str>,
    total_emissions: f64,
    cost: f64,
}

/// JSON report of the exposure command.
#[derive(Debug, Serialize)]
struct ExposureReport<'a> {
    price_levels: Vec<StaticPriceExposure>,
    ranking_price: f64,
    top_companies: Vec<RankedCompany<'a>>,
}

/// Run the exposure command
///
/// CSV output carries the price-level table only.
pub fn run<W: Write>(
    out: &mut W,
    companies: &[CompanyExposure],
    price: f64,
    top: usize,
    format: OutputFormat,
) -> Result<()> {
    if !(price.is_finite() && price > 0.0) {
        return Err(CliError::invalid_argument(format!(
            "price must be positive, got {}",
            price
        )));
    }
    info!("Computing static exposure for {} companies", companies.len());

    let levels = static_price_exposure(companies, &STATIC_PRICE_LEVELS);
    let ranked: Vec<RankedCompany> = top_companies_by_exposure(companies, price, top)
        .into_iter()
        .enumerate()
        .map(|(i, c)| RankedCompany {
            rank: i + 1,
            company: c.name(),
            hq_country: c.hq_country(),
            total_emissions: c.total_emissions(),
            cost: c.static_cost(price),
        })
        .collect();

    match format {
        OutputFormat::Json => write_json(
            out,
            &ExposureReport {
                price_levels: levels,
                ranking_price: price,
                top_companies: ranked,
            },
        ),
        OutputFormat::Csv => write_csv(out, &levels),
        OutputFormat::Table => {
            writeln!(out, "\nPortfolio exposure by carbon price")?;
            let mut table = Table::new(["Price", "Total Cost", "Increase"]);
            for level in &levels {
                table.add_row([
                    format!("${:.0}/tCO₂", level.price),
                    format_currency(level.total_cost, true),
                    format!("+{:.0}%", level.increase_pct),
                ]);
            }
            write!(out, "{}", table.render())?;

            writeln!(out, "\nTop {} companies at ${:.0}/tCO₂", top, price)?;
            let mut table = Table::new(["#", "Company", "HQ", "Emissions (t)", "Cost"]);
            for company in &ranked {
                table.add_row([
                    company.rank.to_string(),
                    company.company.to_string(),
                    company.hq_country.unwrap_or("-").to_string(),
                    format_number(company.total_emissions, 1),
                    format_currency(company.cost, true),
                ]);
            }
            write!(out, "{}", table.render())?;
            Ok(())
        }
    }
}
