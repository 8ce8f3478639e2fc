//! Grid Filler.
//!
//! Spreads values sampled on a coarse grid back onto the fine grid, e.g. a
//! 1-hour moving average given a value at every 15-minute mark.

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    series::Series,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Linearly interpolate `coarse` onto a grid `interval` times finer.
///
/// Each consecutive pair `(a, b)` contributes `interval` evenly spaced points
/// starting at `a` and stopping short of `b`. The segments are concatenated and
/// the tail is padded with the last coarse value up to `target_len`.
///
/// # Errors
///
/// - [`IndicatorError::InvalidWindow`] if `interval` is 0
/// - [`IndicatorError::InsufficientData`] if `coarse` is empty
/// - [`IndicatorError::InvalidParameter`] if `target_len` is shorter than the
///   `(coarse.len() - 1) * interval` interpolated points
///
/// # Example
///
/// ```rust
/// use ta_transforms::fill_values;
///
/// let fine = fill_values(&[0.0f64, 4.0, 2.0], 4, 10).unwrap();
/// assert_eq!(
///     fine.as_slice(),
///     &[0.0, 1.0, 2.0, 3.0, 4.0, 3.5, 3.0, 2.5, 2.0, 2.0]
/// );
/// ```
pub fn fill_values<T: TaFloat>(coarse: &[T], interval: usize, target_len: usize) -> Result<Series<T>> {
    IndicatorError::ensure_window(interval)?;

    let Some(&last) = coarse.last() else {
        return Err(IndicatorError::InsufficientData {
            required: 1,
            actual: 0,
        });
    };

    let interpolated = (coarse.len() - 1) * interval;
    if interpolated > target_len {
        tracing::warn!(interpolated, target_len, "target length too short for grid");
        return Err(IndicatorError::InvalidParameter {
            name: "target_len",
            value: target_len.to_string(),
            expected: "at least (coarse.len() - 1) * interval",
        });
    }

    let steps = <T as TaFloat>::from_usize(interval);
    let mut fine: Series<T> = coarse
        .windows(2)
        .flat_map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            let step = (b - a) / steps;
            (0..interval).map(move |j| a + step * <T as TaFloat>::from_usize(j))
        })
        .collect();

    tracing::trace!(
        interpolated,
        padding = target_len - interpolated,
        "filled grid"
    );
    for _ in interpolated..target_len {
        fine.push(last);
    }

    Ok(fine)
}

/// Configuration for the grid filler.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridFillConfig {
    /// Fine points per coarse step (default: 4).
    pub interval: usize,
}

impl Default for GridFillConfig {
    fn default() -> Self {
        Self { interval: 4 }
    }
}

impl GridFillConfig {
    /// Create a new configuration with the given interval.
    pub fn new(interval: usize) -> Self {
        Self { interval }
    }
}

/// Grid filler with a fixed interval ratio.
#[derive(Debug, Clone, Default)]
pub struct GridFiller {
    config: GridFillConfig,
}

impl GridFiller {
    /// Create a grid filler with the given configuration.
    pub fn new(config: GridFillConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &GridFillConfig {
        &self.config
    }

    /// Fill `coarse` onto a fine grid of `target_len` points.
    ///
    /// # Errors
    ///
    /// See [`fill_values`].
    pub fn fill<T: TaFloat>(&self, coarse: &[T], target_len: usize) -> Result<Series<T>> {
        fill_values(coarse, self.config.interval, target_len)
    }
}
