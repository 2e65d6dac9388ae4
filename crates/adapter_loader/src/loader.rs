//! CSV reader for company exposure records.

use crate::error::{LoaderError, LoaderResult};
use carbon_core::CompanyExposure;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// One row of the company export, as written in the file.
#[derive(Debug, Deserialize)]
struct CompanyRecord {
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "HQ Country", default, deserialize_with = "csv::invalid_option")]
    hq_country: Option<String>,
    #[serde(rename = "Mines", default, deserialize_with = "csv::invalid_option")]
    mines: Option<u32>,
    #[serde(rename = "Total Emissions (tCO₂)")]
    total_emissions: f64,
    #[serde(rename = "Production (t)", default, deserialize_with = "csv::invalid_option")]
    production: Option<f64>,
    #[serde(
        rename = "Portfolio Intensity",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    portfolio_intensity: Option<f64>,
}

impl CompanyRecord {
    fn into_exposure(self, row: usize) -> LoaderResult<CompanyExposure> {
        let name = self.company.trim();
        if name.is_empty() {
            return Err(invalid(row, "empty company name"));
        }
        if !self.total_emissions.is_finite() || self.total_emissions < 0.0 {
            return Err(invalid(
                row,
                format!("total emissions must be finite and non-negative, got {}", self.total_emissions),
            ));
        }

        let mut exposure = CompanyExposure::new(
            name,
            self.total_emissions,
            self.portfolio_intensity.unwrap_or(0.0),
        );
        if let Some(country) = self.hq_country.filter(|c| !c.trim().is_empty()) {
            exposure = exposure.with_hq_country(country.trim());
        }
        if let Some(mines) = self.mines {
            exposure = exposure.with_mine_count(mines);
        }
        if let Some(production) = self.production {
            exposure = exposure.with_production(production);
        }
        Ok(exposure)
    }
}

fn invalid(row: usize, reason: impl Into<String>) -> LoaderError {
    LoaderError::InvalidRecord {
        row,
        reason: reason.into(),
    }
}

/// Reads exposure records from any CSV source with a header row.
///
/// # Errors
///
/// Returns `LoaderError::Csv` for malformed input or missing required
/// columns, and `LoaderError::InvalidRecord` for rows with an empty name or
/// negative or non-finite emissions.
pub fn read_company_exposures<R: Read>(reader: R) -> LoaderResult<Vec<CompanyExposure>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut companies = Vec::new();
    for (index, result) in csv_reader.deserialize::<CompanyRecord>().enumerate() {
        let record = result?;
        companies.push(record.into_exposure(index + 1)?);
    }

    debug!(n_companies = companies.len(), "parsed company exposures");
    Ok(companies)
}

/// Loads exposure records from a CSV file.
///
/// # Errors
///
/// Returns `LoaderError::Io` if the file cannot be opened, otherwise as
/// [`read_company_exposures`].
pub fn load_company_exposures(path: impl AsRef<Path>) -> LoaderResult<Vec<CompanyExposure>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let companies = read_company_exposures(file)?;
    info!(path = %path.display(), n_companies = companies.len(), "loaded company exposures");
    Ok(companies)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Company,HQ Country,Mines,Total Emissions (tCO₂),Production (t),$50/t,$100/t,$150/t,$200/t,Portfolio Intensity";

    fn read(body: &str) -> LoaderResult<Vec<CompanyExposure>> {
        let data = format!("{}\n{}", HEADER, body);
        read_company_exposures(data.as_bytes())
    }

    #[test]
    fn test_full_record() {
        let companies = read("Alpha Mining,AUS,12,150000.5,7500000,7500025,15000050,22500075,30000100,0.02").unwrap();

        assert_eq!(companies.len(), 1);
        let alpha = &companies[0];
        assert_eq!(alpha.name(), "Alpha Mining");
        assert_eq!(alpha.hq_country(), Some("AUS"));
        assert_eq!(alpha.mine_count(), Some(12));
        assert_eq!(alpha.total_emissions(), 150000.5);
        assert_eq!(alpha.production(), Some(7500000.0));
        assert_eq!(alpha.portfolio_intensity(), 0.02);
    }

    #[test]
    fn test_blank_optional_fields() {
        let companies = read("Beta,,,2000,,,,,,").unwrap();

        let beta = &companies[0];
        assert_eq!(beta.hq_country(), None);
        assert_eq!(beta.mine_count(), None);
        assert_eq!(beta.production(), None);
        assert_eq!(beta.portfolio_intensity(), 0.0);
    }

    #[test]
    fn test_minimal_columns() {
        let data = "Company,Total Emissions (tCO₂)\nGamma,10\nDelta,20\n";
        let companies = read_company_exposures(data.as_bytes()).unwrap();
        let names: Vec<&str> = companies.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Gamma", "Delta"]);
    }

    #[test]
    fn test_missing_emissions_column() {
        let data = "Company,Portfolio Intensity\nGamma,0.1\n";
        let result = read_company_exposures(data.as_bytes());
        assert!(matches!(result, Err(LoaderError::Csv(_))));
    }

    #[test]
    fn test_non_numeric_emissions() {
        let result = read("Alpha,AUS,1,lots,,,,,,0.1");
        assert!(matches!(result, Err(LoaderError::Csv(_))));
    }

    #[test]
    fn test_negative_emissions_rejected() {
        let result = read("Alpha,AUS,1,100,10,,,,,0.1\nBeta,AUS,1,-5,10,,,,,0.1");
        match result {
            Err(LoaderError::InvalidRecord { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected invalid record, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = read(",AUS,1,100,10,,,,,0.1");
        assert!(matches!(
            result,
            Err(LoaderError::InvalidRecord { row: 1, .. })
        ));
    }

    #[test]
    fn test_empty_file() {
        let companies = read_company_exposures(HEADER.as_bytes()).unwrap();
        assert!(companies.is_empty());
    }
}
