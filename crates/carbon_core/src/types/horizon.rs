//! Risk horizon selection.

use super::error::ScenarioError;
use std::fmt;

/// Horizon year at which tail risk metrics are reported.
///
/// # Examples
/// ```
/// use carbon_core::types::HorizonYear;
///
/// let horizon = HorizonYear::try_from(2035).unwrap();
/// assert_eq!(horizon.year(), 2035);
/// assert!(HorizonYear::try_from(2033).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HorizonYear {
    /// Five years after the base year.
    Y2030,
    /// Ten years after the base year.
    Y2035,
    /// End of the scenario horizon.
    #[default]
    Y2040,
}

impl HorizonYear {
    /// All supported horizons in ascending order.
    pub const ALL: [HorizonYear; 3] = [Self::Y2030, Self::Y2035, Self::Y2040];

    /// Calendar year of the horizon.
    #[inline]
    pub fn year(&self) -> i32 {
        match self {
            Self::Y2030 => 2030,
            Self::Y2035 => 2035,
            Self::Y2040 => 2040,
        }
    }
}

impl TryFrom<i32> for HorizonYear {
    type Error = ScenarioError;

    fn try_from(year: i32) -> Result<Self, Self::Error> {
        match year {
            2030 => Ok(Self::Y2030),
            2035 => Ok(Self::Y2035),
            2040 => Ok(Self::Y2040),
            other => Err(ScenarioError::UnsupportedHorizon(other)),
        }
    }
}

impl fmt::Display for HorizonYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HorizonYear {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.year())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HorizonYear {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let year = i32::deserialize(deserializer)?;
        HorizonYear::try_from(year).map_err(serde::de::Error::custom)
    }
}
