//! Company-level emissions exposure.

/// Aggregated carbon exposure of one mining company.
///
/// Loaded by an adapter and never mutated by the engine.
///
/// # Examples
///
/// ```
/// use carbon_core::types::CompanyExposure;
///
/// let company = CompanyExposure::new("Copperline", 1_000.0, 0.02)
///     .with_hq_country("CHL");
///
/// assert_eq!(company.name(), "Copperline");
/// assert_eq!(company.static_cost(100.0), 100_000.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompanyExposure {
    name: String,
    total_emissions: f64,
    portfolio_intensity: f64,
    hq_country: Option<String>,
    mine_count: Option<u32>,
    production: Option<f64>,
}

impl CompanyExposure {
    /// Creates an exposure record.
    ///
    /// # Arguments
    ///
    /// * `name` - Company name
    /// * `total_emissions` - Annual emissions in tCO2e
    /// * `portfolio_intensity` - Emissions per tonne of production
    pub fn new(name: impl Into<String>, total_emissions: f64, portfolio_intensity: f64) -> Self {
        Self {
            name: name.into(),
            total_emissions,
            portfolio_intensity,
            hq_country: None,
            mine_count: None,
            production: None,
        }
    }

    /// Sets the headquarters country (ISO3).
    pub fn with_hq_country(mut self, country: impl Into<String>) -> Self {
        self.hq_country = Some(country.into());
        self
    }

    /// Sets the number of mines in the portfolio.
    pub fn with_mine_count(mut self, mines: u32) -> Self {
        self.mine_count = Some(mines);
        self
    }

    /// Sets annual production in tonnes.
    pub fn with_production(mut self, production: f64) -> Self {
        self.production = Some(production);
        self
    }

    /// Company name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Annual emissions in tCO2e.
    #[inline]
    pub fn total_emissions(&self) -> f64 {
        self.total_emissions
    }

    /// Portfolio carbon intensity.
    #[inline]
    pub fn portfolio_intensity(&self) -> f64 {
        self.portfolio_intensity
    }

    /// Headquarters country, if known.
    pub fn hq_country(&self) -> Option<&str> {
        self.hq_country.as_deref()
    }

    /// Number of mines, if known.
    pub fn mine_count(&self) -> Option<u32> {
        self.mine_count
    }

    /// Annual production in tonnes, if known.
    pub fn production(&self) -> Option<f64> {
        self.production
    }

    /// Annual carbon cost at a flat carbon price.
    #[inline]
    pub fn static_cost(&self, price: f64) -> f64 {
        self.total_emissions * price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_metadata_defaults_to_none() {
        let company = CompanyExposure::new("A", 10.0, 0.1);
        assert_eq!(company.hq_country(), None);
        assert_eq!(company.mine_count(), None);
        assert_eq!(company.production(), None);
    }

    #[test]
    fn test_builder_methods() {
        let company = CompanyExposure::new("A", 10.0, 0.1)
            .with_hq_country("AUS")
            .with_mine_count(3)
            .with_production(500.0);
        assert_eq!(company.hq_country(), Some("AUS"));
        assert_eq!(company.mine_count(), Some(3));
        assert_eq!(company.production(), Some(500.0));
    }
}
