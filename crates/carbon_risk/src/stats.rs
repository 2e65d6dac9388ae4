//! Order statistics over a sorted cost sample.
//!
//! Percentiles use the floor index `⌊q·n⌋` with no interpolation between
//! adjacent order statistics. Indices are capped at `n - 1`.

/// Ascending sample of finite costs.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SortedSample {
    values: Vec<f64>,
}

impl SortedSample {
    /// Sorts the values ascending under `total_cmp`, which places positive
    /// NaN after every number and negative NaN before.
    pub(crate) fn new(mut values: Vec<f64>) -> Self {
        values.sort_by(f64::total_cmp);
        Self { values }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Floor index of quantile `q`, capped at the last element.
    #[inline]
    pub(crate) fn floor_index(&self, q: f64) -> usize {
        let index = (q * self.values.len() as f64).floor() as usize;
        index.min(self.values.len().saturating_sub(1))
    }

    /// Value at the floor index of `q`, or 0 for an empty sample.
    pub(crate) fn quantile(&self, q: f64) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values[self.floor_index(q)]
    }

    /// Arithmetic mean, or 0 for an empty sample.
    pub(crate) fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Population standard deviation (divides by n).
    pub(crate) fn population_std_dev(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .values
            .iter()
            .map(|v| (v - mean) * (v - mean))
            .sum::<f64>()
            / self.values.len() as f64;
        variance.sqrt()
    }

    /// Mean of the values from the floor index of `q` to the end.
    pub(crate) fn tail_mean(&self, q: f64) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let tail = &self.values[self.floor_index(q)..];
        tail.iter().sum::<f64>() / tail.len() as f64
    }
}
