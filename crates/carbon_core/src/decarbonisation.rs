//! Company decarbonisation model.
//!
//! Each company receives an annual decarbonisation rate proportional to its
//! position in the cohort's intensity range: the cleanest company is assigned
//! [`LOW_TARGET`], the most intensive [`HIGH_TARGET`].
//!
//! ```text
//! normalised = (intensity - min) / (max - min)
//! rate       = clamp(0.01 + 0.05 × normalised, 0.01, 0.06)
//! ```
//!
//! ## Degenerate Cohorts
//!
//! - `max == min`: every company sits at the bottom of the range (rate 0.01)
//! - no company with positive intensity: the model has no range and assigns
//!   0.01 to every company

use crate::types::CompanyExposure;

/// Decarbonisation rate for the least intensive company.
pub const LOW_TARGET: f64 = 0.01;

/// Decarbonisation rate for the most intensive company.
pub const HIGH_TARGET: f64 = 0.06;

/// Observed intensity range of a company cohort.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntensityRange {
    /// Lowest positive intensity.
    pub min: f64,
    /// Highest positive intensity.
    pub max: f64,
}

impl IntensityRange {
    /// Computes the range over companies with finite, positive intensity.
    ///
    /// Returns `None` when no company qualifies.
    pub fn from_companies(companies: &[CompanyExposure]) -> Option<Self> {
        companies
            .iter()
            .map(CompanyExposure::portfolio_intensity)
            .filter(|i| i.is_finite() && *i > 0.0)
            .fold(None, |range, i| match range {
                None => Some(Self { min: i, max: i }),
                Some(r) => Some(Self {
                    min: r.min.min(i),
                    max: r.max.max(i),
                }),
            })
    }

    /// Position of `intensity` within the range; 0 for a zero-width range.
    #[inline]
    pub fn normalise(&self, intensity: f64) -> f64 {
        let width = self.max - self.min;
        if width > 0.0 {
            (intensity - self.min) / width
        } else {
            0.0
        }
    }
}

/// Annual decarbonisation rate for a given intensity.
///
/// The result always lies in `[LOW_TARGET, HIGH_TARGET]`.
///
/// # Examples
///
/// ```
/// use carbon_core::decarbonisation::{decarbonisation_rate, IntensityRange};
///
/// let range = IntensityRange { min: 0.01, max: 0.03 };
/// assert!((decarbonisation_rate(0.02, &range) - 0.035).abs() < 1e-12);
/// ```
pub fn decarbonisation_rate(intensity: f64, range: &IntensityRange) -> f64 {
    if !intensity.is_finite() {
        return LOW_TARGET;
    }
    let normalised = range.normalise(intensity);
    (LOW_TARGET + (HIGH_TARGET - LOW_TARGET) * normalised).clamp(LOW_TARGET, HIGH_TARGET)
}

/// Decarbonisation model fitted to a company cohort.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecarbonisationModel {
    range: Option<IntensityRange>,
}

impl DecarbonisationModel {
    /// Fits the model to the cohort's intensity range.
    pub fn from_cohort(companies: &[CompanyExposure]) -> Self {
        Self {
            range: IntensityRange::from_companies(companies),
        }
    }

    /// Cohort intensity range, if any company has positive intensity.
    #[inline]
    pub fn range(&self) -> Option<IntensityRange> {
        self.range
    }

    /// Returns `true` if the cohort had no usable intensity.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.range.is_none()
    }

    /// Decarbonisation rate for a company.
    pub fn rate_for(&self, company: &CompanyExposure) -> f64 {
        match &self.range {
            Some(range) => decarbonisation_rate(company.portfolio_intensity(), range),
            None => LOW_TARGET,
        }
    }

    /// Decarbonisation rates in the order of `companies`.
    pub fn rates(&self, companies: &[CompanyExposure]) -> Vec<f64> {
        companies.iter().map(|c| self.rate_for(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn cohort() -> Vec<CompanyExposure> {
        vec![
            CompanyExposure::new("A", 1000.0, 0.01),
            CompanyExposure::new("B", 2000.0, 0.02),
            CompanyExposure::new("C", 3000.0, 0.03),
        ]
    }

    #[test]
    fn test_range_ignores_non_positive_intensity() {
        let mut companies = cohort();
        companies.push(CompanyExposure::new("Zero", 10.0, 0.0));
        companies.push(CompanyExposure::new("Negative", 10.0, -1.0));
        companies.push(CompanyExposure::new("NaN", 10.0, f64::NAN));

        let range = IntensityRange::from_companies(&companies).unwrap();
        assert_eq!(range.min, 0.01);
        assert_eq!(range.max, 0.03);
    }

    #[test]
    fn test_rates_span_targets() {
        let companies = cohort();
        let rates = DecarbonisationModel::from_cohort(&companies).rates(&companies);
        assert_relative_eq!(rates[0], LOW_TARGET);
        assert_relative_eq!(rates[1], 0.035, epsilon = 1e-12);
        assert_relative_eq!(rates[2], HIGH_TARGET);
    }

    #[test]
    fn test_zero_width_range_uses_low_target() {
        let companies = vec![
            CompanyExposure::new("A", 1.0, 0.5),
            CompanyExposure::new("B", 2.0, 0.5),
        ];
        let model = DecarbonisationModel::from_cohort(&companies);
        assert!(!model.is_degenerate());
        assert_eq!(model.rates(&companies), vec![LOW_TARGET, LOW_TARGET]);
    }

    #[test]
    fn test_empty_cohort_is_degenerate() {
        let model = DecarbonisationModel::from_cohort(&[]);
        assert!(model.is_degenerate());
        assert_eq!(
            model.rate_for(&CompanyExposure::new("A", 1.0, 0.2)),
            LOW_TARGET
        );
    }

    #[test]
    fn test_all_zero_intensity_is_degenerate() {
        let companies = vec![CompanyExposure::new("A", 1.0, 0.0)];
        assert!(DecarbonisationModel::from_cohort(&companies).is_degenerate());
    }

    #[test]
    fn test_non_positive_member_of_valid_cohort_gets_low_target() {
        let mut companies = cohort();
        companies.push(CompanyExposure::new("Zero", 10.0, 0.0));
        let model = DecarbonisationModel::from_cohort(&companies);
        assert_eq!(model.rate_for(&companies[3]), LOW_TARGET);
    }

    proptest! {
        #[test]
        fn prop_rate_within_targets(
            intensities in prop::collection::vec(-1.0f64..10.0, 1..50),
        ) {
            let companies: Vec<_> = intensities
                .iter()
                .map(|&i| CompanyExposure::new("X", 1.0, i))
                .collect();
            let model = DecarbonisationModel::from_cohort(&companies);
            for rate in model.rates(&companies) {
                prop_assert!((LOW_TARGET..=HIGH_TARGET).contains(&rate));
            }
        }

        #[test]
        fn prop_rate_monotone_in_intensity(
            intensities in prop::collection::vec(0.001f64..10.0, 2..50),
        ) {
            let companies: Vec<_> = intensities
                .iter()
                .map(|&i| CompanyExposure::new("X", 1.0, i))
                .collect();
            let model = DecarbonisationModel::from_cohort(&companies);
            let mut pairs: Vec<(f64, f64)> = companies
                .iter()
                .map(|c| (c.portfolio_intensity(), model.rate_for(c)))
                .collect();
            pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
            for w in pairs.windows(2) {
                prop_assert!(w[0].1 <= w[1].1);
            }
        }
    }
}
