//! Climate transition scenario types.
//!
//! A scenario is a fixed, year-indexed trajectory of carbon prices and
//! economy-wide intensity factors. The set of scenarios is closed: every
//! consumer matches exhaustively on [`ScenarioKind`].

use super::error::ScenarioError;
use super::BASE_YEAR;
use std::fmt;
use std::str::FromStr;

/// Climate transition scenario.
///
/// # Variants
/// - `Orderly`: Steady carbon price increase with strong decarbonisation
/// - `Disorderly`: Low initial prices followed by a policy shock at year index 8
/// - `Hothouse`: Minimal carbon pricing and slow decarbonisation
///
/// # Examples
/// ```
/// use carbon_core::types::ScenarioKind;
///
/// let kind: ScenarioKind = "disorderly".parse().unwrap();
/// assert_eq!(kind, ScenarioKind::Disorderly);
/// assert_eq!(kind.carbon_price(8), 56.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScenarioKind {
    /// Orderly transition.
    Orderly,
    /// Disorderly transition.
    Disorderly,
    /// Hothouse world.
    Hothouse,
}

/// Year index at which the disorderly price path changes slope.
pub const DISORDERLY_SHOCK_INDEX: usize = 8;

impl ScenarioKind {
    /// All scenarios in canonical order.
    pub const ALL: [ScenarioKind; 3] = [Self::Orderly, Self::Disorderly, Self::Hothouse];

    /// Short lowercase identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Orderly => "orderly",
            Self::Disorderly => "disorderly",
            Self::Hothouse => "hothouse",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Orderly => "Orderly Transition",
            Self::Disorderly => "Disorderly Transition",
            Self::Hothouse => "Hothouse World",
        }
    }

    /// Position of the scenario in [`ScenarioKind::ALL`].
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Self::Orderly => 0,
            Self::Disorderly => 1,
            Self::Hothouse => 2,
        }
    }

    /// Annual economy-wide intensity reduction.
    pub fn intensity_reduction_rate(&self) -> f64 {
        match self {
            Self::Orderly => 0.04,
            Self::Disorderly => 0.02,
            Self::Hothouse => 0.01,
        }
    }

    /// Nominal carbon price (USD per tCO2e) at year index `t`.
    pub fn carbon_price(&self, t: usize) -> f64 {
        let t_f = t as f64;
        match self {
            Self::Orderly => 50.0 + 10.0 * t_f,
            Self::Disorderly => {
                if t < DISORDERLY_SHOCK_INDEX {
                    40.0 + 2.0 * t_f
                } else {
                    let shock = DISORDERLY_SHOCK_INDEX as f64;
                    40.0 + 2.0 * shock + 20.0 * (t_f - shock)
                }
            }
            Self::Hothouse => 40.0 + 2.0 * t_f,
        }
    }

    /// Intensity factor relative to the base year at year index `t`.
    #[inline]
    pub fn intensity_factor(&self, t: usize) -> f64 {
        (1.0 - self.intensity_reduction_rate()).powf(t as f64)
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ScenarioKind {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "orderly" => Ok(Self::Orderly),
            "disorderly" => Ok(Self::Disorderly),
            "hothouse" => Ok(Self::Hothouse),
            _ => Err(ScenarioError::UnknownScenario(s.to_string())),
        }
    }
}

/// One year of a scenario trajectory.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioYearPoint {
    /// Calendar year.
    pub year: i32,
    /// Carbon price in USD per tCO2e.
    pub price: f64,
    /// Multiplicative intensity factor relative to the base year.
    pub intensity_factor: f64,
}

/// Immutable year-indexed trajectory for one scenario.
///
/// Points are strictly increasing in year. Instances are produced by
/// [`crate::scenarios::generate_scenario`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioPath {
    kind: ScenarioKind,
    points: Vec<ScenarioYearPoint>,
}

impl ScenarioPath {
    pub(crate) fn new(kind: ScenarioKind, points: Vec<ScenarioYearPoint>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].year < w[1].year));
        Self { kind, points }
    }

    /// Scenario this trajectory belongs to.
    #[inline]
    pub fn kind(&self) -> ScenarioKind {
        self.kind
    }

    /// All yearly points in order.
    #[inline]
    pub fn points(&self) -> &[ScenarioYearPoint] {
        &self.points
    }

    /// Number of yearly points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the trajectory has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at year index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn point(&self, index: usize) -> &ScenarioYearPoint {
        &self.points[index]
    }

    /// Year index of a calendar year, if covered.
    pub fn year_index(&self, year: i32) -> Option<usize> {
        let offset = usize::try_from(year - BASE_YEAR).ok()?;
        self.points
            .get(offset)
            .filter(|p| p.year == year)
            .map(|_| offset)
    }

    /// Calendar years covered by the trajectory.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.points.iter().map(|p| p.year)
    }

    /// Iterates over the yearly points.
    pub fn iter(&self) -> std::slice::Iter<'_, ScenarioYearPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a ScenarioPath {
    type Item = &'a ScenarioYearPoint;
    type IntoIter = std::slice::Iter<'a, ScenarioYearPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Orderly".parse::<ScenarioKind>(), Ok(ScenarioKind::Orderly));
        assert_eq!(" HOTHOUSE ".parse::<ScenarioKind>(), Ok(ScenarioKind::Hothouse));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "baseline".parse::<ScenarioKind>().unwrap_err();
        assert_eq!(err, ScenarioError::UnknownScenario("baseline".to_string()));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in ScenarioKind::ALL {
            assert_eq!(kind.to_string().parse::<ScenarioKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_index_matches_canonical_order() {
        for (i, kind) in ScenarioKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_disorderly_slope_break() {
        let kind = ScenarioKind::Disorderly;
        assert_eq!(kind.carbon_price(7), 54.0);
        assert_eq!(kind.carbon_price(8), 56.0);
        assert_eq!(kind.carbon_price(9), 76.0);
        assert_eq!(kind.carbon_price(15), 196.0);
    }

    #[test]
    fn test_intensity_factor_is_one_at_base_year() {
        for kind in ScenarioKind::ALL {
            assert_eq!(kind.intensity_factor(0), 1.0);
        }
        assert_relative_eq!(
            ScenarioKind::Orderly.intensity_factor(2),
            0.9216,
            epsilon = 1e-12
        );
    }
}
