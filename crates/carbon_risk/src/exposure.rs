//! Static carbon-price exposure.
//!
//! Flat-price stress of the portfolio: every company pays
//! `total_emissions × price` with no scenario dynamics.

use carbon_core::CompanyExposure;

/// Flat carbon price levels (USD/tCO2e) used for static stress.
pub const STATIC_PRICE_LEVELS: [f64; 4] = [50.0, 100.0, 150.0, 200.0];

/// Portfolio cost at one flat carbon price.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StaticPriceExposure {
    /// Carbon price (USD/tCO2e).
    pub price: f64,
    /// Portfolio cost at that price (USD).
    pub total_cost: f64,
    /// Percentage increase over the first price level.
    pub increase_pct: f64,
}

/// Total cost of the portfolio at each price level.
///
/// `increase_pct` is relative to the first level and is 0 when the baseline
/// cost is 0.
///
/// # Examples
///
/// ```
/// use carbon_core::CompanyExposure;
/// use carbon_risk::exposure::{static_price_exposure, STATIC_PRICE_LEVELS};
///
/// let companies = vec![CompanyExposure::new("A", 1000.0, 0.02)];
/// let exposure = static_price_exposure(&companies, &STATIC_PRICE_LEVELS);
///
/// assert_eq!(exposure[0].total_cost, 50_000.0);
/// assert_eq!(exposure[3].increase_pct, 300.0);
/// ```
pub fn static_price_exposure(
    companies: &[CompanyExposure],
    levels: &[f64],
) -> Vec<StaticPriceExposure> {
    let totals: Vec<f64> = levels
        .iter()
        .map(|&price| companies.iter().map(|c| c.static_cost(price)).sum())
        .collect();
    let baseline = totals.first().copied().unwrap_or(0.0);

    levels
        .iter()
        .zip(totals)
        .map(|(&price, total_cost)| StaticPriceExposure {
            price,
            total_cost,
            increase_pct: if baseline > 0.0 {
                (total_cost / baseline - 1.0) * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Companies ranked by static cost at `price`, highest first.
///
/// Zero-cost companies are excluded; ties keep input order.
pub fn top_companies_by_exposure(
    companies: &[CompanyExposure],
    price: f64,
    limit: usize,
) -> Vec<&CompanyExposure> {
    let mut ranked: Vec<&CompanyExposure> = companies
        .iter()
        .filter(|c| c.static_cost(price) > 0.0)
        .collect();
    ranked.sort_by(|a, b| b.static_cost(price).total_cmp(&a.static_cost(price)));
    ranked.truncate(limit);
    ranked
}
