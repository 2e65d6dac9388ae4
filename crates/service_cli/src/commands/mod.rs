//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write to a
//! caller-supplied writer so they can be exercised without a terminal.

pub mod check;
pub mod exposure;
pub mod simulate;
pub mod trajectory;

use crate::config::CliConfig;
use crate::output::OutputFormat;
use crate::{CliError, Result};
use carbon_core::{CompanyExposure, ScenarioKind};
use std::path::{Path, PathBuf};
use tracing::info;

/// Input file from the flag, falling back to the configuration.
pub(crate) fn resolve_input(flag: Option<&Path>, config: &CliConfig) -> Result<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| config.input.clone())
        .ok_or_else(|| {
            CliError::invalid_argument(
                "no company file given; pass --input or set `input` in the configuration",
            )
        })
}

/// Loads the company cohort.
pub(crate) fn load_companies(path: &Path) -> Result<Vec<CompanyExposure>> {
    let companies = adapter_loader::load_company_exposures(path)?;
    info!("Loaded {} companies from {}", companies.len(), path.display());
    Ok(companies)
}

/// Output format from the flag, falling back to the configuration.
pub(crate) fn resolve_format(flag: Option<OutputFormat>, config: &CliConfig) -> Result<OutputFormat> {
    match flag {
        Some(format) => Ok(format),
        None => config.format().map_err(CliError::InvalidArgument),
    }
}

/// Selected scenarios, all three when none is given.
pub(crate) fn selected_scenarios(scenario: Option<ScenarioKind>) -> Vec<ScenarioKind> {
    match scenario {
        Some(kind) => vec![kind],
        None => ScenarioKind::ALL.to_vec(),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use carbon_core::CompanyExposure;

    /// Three-company cohort shared by command tests.
    pub fn cohort() -> Vec<CompanyExposure> {
        vec![
            CompanyExposure::new("Alpha", 1000.0, 0.01).with_hq_country("AUS"),
            CompanyExposure::new("Beta", 2000.0, 0.02).with_hq_country("CHL"),
            CompanyExposure::new("Gamma", 3000.0, 0.03),
        ]
    }

    pub fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> crate::Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_input_precedence() {
        let mut config = CliConfig::default();
        assert!(resolve_input(None, &config).is_err());

        config.input = Some(PathBuf::from("from_config.csv"));
        assert_eq!(
            resolve_input(None, &config).unwrap(),
            PathBuf::from("from_config.csv")
        );
        assert_eq!(
            resolve_input(Some(Path::new("flag.csv")), &config).unwrap(),
            PathBuf::from("flag.csv")
        );
    }

    #[test]
    fn test_resolve_format() {
        let config = CliConfig::default();
        assert_eq!(resolve_format(None, &config).unwrap(), OutputFormat::Table);
        assert_eq!(
            resolve_format(Some(OutputFormat::Json), &config).unwrap(),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_selected_scenarios() {
        assert_eq!(selected_scenarios(None).len(), 3);
        assert_eq!(
            selected_scenarios(Some(ScenarioKind::Hothouse)),
            vec![ScenarioKind::Hothouse]
        );
    }
}
