//! Correlated price and intensity shocks.
//!
//! Two independent uniforms `u1`, `u2` are mapped to independent standard
//! normals with the cos/sin Box-Muller transform:
//!
//! ```text
//! z0 = sqrt(-2 ln u1) × cos(2π u2)
//! z1 = sqrt(-2 ln u1) × sin(2π u2)
//! ```
//!
//! and then correlated:
//!
//! ```text
//! price shock     = z0 × σ_p
//! intensity shock = (ρ z0 + sqrt(1 - ρ²) z1) × σ_i
//! ```

use super::source::UniformSource;
use crate::mc::error::ConfigError;
use std::f64::consts::PI;

/// Annualised volatility of the carbon price.
pub const PRICE_VOLATILITY: f64 = 0.2;

/// Volatility of the intensity factor.
pub const INTENSITY_VOLATILITY: f64 = 0.1;

/// Correlation between price and intensity shocks.
pub const PRICE_INTENSITY_CORRELATION: f64 = 0.25;

/// Parameters of the correlated shock model.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShockParams {
    /// Price volatility (σ_p).
    pub price_volatility: f64,
    /// Intensity volatility (σ_i).
    pub intensity_volatility: f64,
    /// Price / intensity correlation (ρ).
    pub correlation: f64,
}

impl ShockParams {
    /// Creates validated shock parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` if a volatility is negative or
    /// non-finite, or if the correlation lies outside [-1, 1].
    pub fn new(
        price_volatility: f64,
        intensity_volatility: f64,
        correlation: f64,
    ) -> Result<Self, ConfigError> {
        let params = Self {
            price_volatility,
            intensity_volatility,
            correlation,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates the parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.price_volatility.is_finite() && self.price_volatility >= 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "price_volatility",
                value: self.price_volatility.to_string(),
            });
        }
        if !(self.intensity_volatility.is_finite() && self.intensity_volatility >= 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "intensity_volatility",
                value: self.intensity_volatility.to_string(),
            });
        }
        if !(-1.0..=1.0).contains(&self.correlation) {
            return Err(ConfigError::InvalidParameter {
                name: "correlation",
                value: self.correlation.to_string(),
            });
        }
        Ok(())
    }

    /// Log-normal mean correction `0.5 σ_p²`.
    #[inline]
    pub fn price_drift_correction(&self) -> f64 {
        0.5 * self.price_volatility * self.price_volatility
    }
}

impl Default for ShockParams {
    fn default() -> Self {
        Self {
            price_volatility: PRICE_VOLATILITY,
            intensity_volatility: INTENSITY_VOLATILITY,
            correlation: PRICE_INTENSITY_CORRELATION,
        }
    }
}

/// One year's price and intensity shock.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShockPair {
    /// Price shock (log-space).
    pub price: f64,
    /// Additive intensity shock.
    pub intensity: f64,
}

/// Draws two independent standard normals from two uniforms.
///
/// A zero first uniform is lifted to `f64::MIN_POSITIVE` so the radius
/// stays finite.
#[inline]
pub fn standard_normal_pair<R: UniformSource + ?Sized>(rng: &mut R) -> (f64, f64) {
    let u1 = rng.next_uniform().max(f64::MIN_POSITIVE);
    let u2 = rng.next_uniform();
    let radius = (-2.0 * u1.ln()).sqrt();
    let angle = 2.0 * PI * u2;
    (radius * angle.cos(), radius * angle.sin())
}

/// Generator of correlated shock pairs.
#[derive(Clone, Copy, Debug)]
pub struct CorrelatedShockGenerator {
    params: ShockParams,
    /// Cached `sqrt(1 - ρ²)`.
    orthogonal_weight: f64,
}

impl CorrelatedShockGenerator {
    /// Creates a generator for the given parameters.
    pub fn new(params: ShockParams) -> Self {
        let rho = params.correlation;
        Self {
            params,
            orthogonal_weight: (1.0 - rho * rho).sqrt(),
        }
    }

    /// Shock parameters.
    #[inline]
    pub fn params(&self) -> &ShockParams {
        &self.params
    }

    /// Draws the next correlated shock pair, consuming two uniforms.
    #[inline]
    pub fn next_pair<R: UniformSource + ?Sized>(&self, rng: &mut R) -> ShockPair {
        let (z0, z1) = standard_normal_pair(rng);
        ShockPair {
            price: z0 * self.params.price_volatility,
            intensity: (self.params.correlation * z0 + self.orthogonal_weight * z1)
                * self.params.intensity_volatility,
        }
    }

    /// Fills the buffer with consecutive shock pairs.
    #[inline]
    pub fn fill<R: UniformSource + ?Sized>(&self, rng: &mut R, buffer: &mut [ShockPair]) {
        for shock in buffer.iter_mut() {
            *shock = self.next_pair(rng);
        }
    }
}

impl Default for CorrelatedShockGenerator {
    fn default() -> Self {
        Self::new(ShockParams::default())
    }
}
