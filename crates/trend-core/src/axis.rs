// File: crates/trend-core/src/axis.rs
// Summary: Shared value-axis range and the rounding policy used to derive it.

use serde::{Deserialize, Serialize};

use crate::grid::linspace;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }

    /// Evenly spaced tick values from `min` to `max` inclusive.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        linspace(self.min, self.max, count)
    }
}

/// Rounding step and empty-state fallback for the value axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisPolicy {
    pub step: f64,
    pub empty_min: f64,
    pub empty_max: f64,
}

impl Default for AxisPolicy {
    fn default() -> Self {
        Self { step: 10.0, empty_min: 0.0, empty_max: 1000.0 }
    }
}

impl AxisPolicy {
    fn effective_step(&self) -> f64 {
        if self.step.is_finite() && self.step > 0.0 { self.step } else { 10.0 }
    }

    /// Floor the smallest and ceil the largest value to multiples of `step`.
    /// Falls back to `empty_min..empty_max` when `values` yields nothing finite.
    pub fn range_for<I>(&self, values: I) -> AxisRange
    where
        I: IntoIterator<Item = f64>,
    {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if !lo.is_finite() || !hi.is_finite() {
            return AxisRange::new(self.empty_min, self.empty_max);
        }
        let step = self.effective_step();
        let min = (lo / step).floor() * step;
        let max = (hi / step).ceil() * step;
        // rounding near the f64 limits (or with a tiny step) can overflow; keep the raw bound
        AxisRange::new(if min.is_finite() { min } else { lo }, if max.is_finite() { max } else { hi })
    }
}
