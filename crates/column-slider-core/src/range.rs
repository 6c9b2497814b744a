//! Value bounds and step granularity

use serde::{Deserialize, Serialize};

use crate::error::SliderError;

/// Range a slider value lives in
///
/// Construction never fails. Degenerate ranges (`max < min`, negative or
/// non-finite step) are tolerated at runtime and reported by `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderRange {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
    /// Snapping granularity, 0 = continuous
    pub step: f64,
}

impl Default for SliderRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: 0.0,
        }
    }
}

impl SliderRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Distance between the bounds (may be zero or negative for degenerate ranges)
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Step to snap to, if stepped mode is active
    pub fn effective_step(&self) -> Option<f64> {
        (self.step.is_finite() && self.step > 0.0).then_some(self.step)
    }

    /// Clamp into `[min, max]`, both inclusive
    ///
    /// Lower bound wins when `max < min`, so this never panics the way
    /// `f64::clamp` would. NaN collapses to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        let upper = if value.is_nan() { self.min } else { value.min(self.max) };
        upper.max(self.min)
    }

    /// Position of `value` along the range, 0.0 at `min`, 1.0 at `max`
    pub fn fill_ratio(&self, value: f64) -> f64 {
        let span = self.span();
        if span.is_nan() || span <= 0.0 {
            return 0.0;
        }
        ((self.clamp(value) - self.min) / span).clamp(0.0, 1.0)
    }

    pub fn validate(&self) -> Result<(), SliderError> {
        if self.min.is_nan() || self.max.is_nan() || self.min > self.max {
            return Err(SliderError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.step < 0.0 || self.step.is_nan() {
            return Err(SliderError::NegativeStep(self.step));
        }
        Ok(())
    }
}
