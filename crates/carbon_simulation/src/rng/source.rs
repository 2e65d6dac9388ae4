//! Uniform source abstraction.
//!
//! The simulator is generic over [`UniformSource`] so callers can swap the
//! reference LCG for an independent `rand` stream, e.g. one `StdRng` per path
//! when bit-exact parity with a sequential reference run is not required.

use super::lcg::ScenarioRng;
use rand::rngs::StdRng;
use rand::Rng;

/// Source of uniform variates in [0, 1).
pub trait UniformSource {
    /// Returns the next uniform value in [0, 1).
    fn next_uniform(&mut self) -> f64;
}

impl UniformSource for ScenarioRng {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.gen_uniform()
    }
}

impl UniformSource for StdRng {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}
