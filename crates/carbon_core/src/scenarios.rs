//! Deterministic climate transition scenarios.
//!
//! Provides the three NGFS-style trajectories used throughout the engine:
//! - Orderly: price `50 + 10t`, intensity `0.96^t`
//! - Disorderly: price `40 + 2t` until `t = 8`, then `56 + 20(t - 8)`; intensity `0.98^t`
//! - Hothouse: price `40 + 2t`, intensity `0.99^t`
//!
//! Year index `t` runs from 0 (2025) to 15 (2040). The constants are policy
//! design choices and are not configurable at runtime.

use crate::types::{ScenarioKind, ScenarioPath, ScenarioYearPoint, BASE_YEAR, HORIZON_YEARS};

/// The full set of scenario trajectories, one per [`ScenarioKind`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioSet {
    paths: [ScenarioPath; 3],
}

impl ScenarioSet {
    /// Trajectory for a scenario.
    #[inline]
    pub fn get(&self, kind: ScenarioKind) -> &ScenarioPath {
        &self.paths[kind.index()]
    }

    /// Iterates over trajectories in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScenarioPath> {
        self.paths.iter()
    }
}

/// Builds the trajectory for a single scenario.
///
/// # Examples
///
/// ```
/// use carbon_core::scenarios::generate_scenario;
/// use carbon_core::types::ScenarioKind;
///
/// let hothouse = generate_scenario(ScenarioKind::Hothouse);
/// assert_eq!(hothouse.point(15).year, 2040);
/// assert_eq!(hothouse.point(15).price, 70.0);
/// ```
pub fn generate_scenario(kind: ScenarioKind) -> ScenarioPath {
    let points = (0..HORIZON_YEARS)
        .map(|t| ScenarioYearPoint {
            year: BASE_YEAR + t as i32,
            price: kind.carbon_price(t),
            intensity_factor: kind.intensity_factor(t),
        })
        .collect();
    ScenarioPath::new(kind, points)
}

/// Builds all three scenario trajectories.
pub fn generate_scenarios() -> ScenarioSet {
    ScenarioSet {
        paths: ScenarioKind::ALL.map(generate_scenario),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_every_scenario_has_sixteen_increasing_years() {
        let set = generate_scenarios();
        for path in set.iter() {
            assert_eq!(path.len(), HORIZON_YEARS);
            let years: Vec<i32> = path.years().collect();
            assert_eq!(years.first(), Some(&2025));
            assert_eq!(years.last(), Some(&2040));
            assert!(years.windows(2).all(|w| w[1] == w[0] + 1));
        }
    }

    #[test]
    fn test_set_lookup_matches_kind() {
        let set = generate_scenarios();
        for kind in ScenarioKind::ALL {
            assert_eq!(set.get(kind).kind(), kind);
        }
    }

    #[test]
    fn test_orderly_closed_form() {
        let path = generate_scenario(ScenarioKind::Orderly);
        for (t, point) in path.iter().enumerate() {
            assert_relative_eq!(point.price, 50.0 + 10.0 * t as f64);
            assert_relative_eq!(
                point.intensity_factor,
                0.96_f64.powf(t as f64),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_disorderly_policy_shock() {
        let path = generate_scenario(ScenarioKind::Disorderly);
        assert_eq!(path.point(7).price, 54.0);
        assert_eq!(path.point(8).price, 56.0);
        assert_eq!(path.point(9).price - path.point(8).price, 20.0);
        assert_eq!(path.point(8).price - path.point(7).price, 2.0);
    }

    #[test]
    fn test_hothouse_closed_form() {
        let path = generate_scenario(ScenarioKind::Hothouse);
        for (t, point) in path.iter().enumerate() {
            assert_relative_eq!(point.price, 40.0 + 2.0 * t as f64);
            assert_relative_eq!(
                point.intensity_factor,
                0.99_f64.powf(t as f64),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_scenarios(), generate_scenarios());
    }

    #[test]
    fn test_year_index_lookup() {
        let path = generate_scenario(ScenarioKind::Orderly);
        assert_eq!(path.year_index(2025), Some(0));
        assert_eq!(path.year_index(2040), Some(15));
        assert_eq!(path.year_index(2024), None);
        assert_eq!(path.year_index(2041), None);
    }
}
