//! Rolling standard deviation.

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    ohlcv::{Bar, OhlcvSeries},
    series::Series,
    traits::{Indicator, StreamingIndicator},
    utils::rolling,
    window::{RingBuffer, RollingStat},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rolling sample standard deviation of `series` with no minimum periods.
///
/// A window holding fewer than two observations has no sample deviation and
/// yields NaN, which makes the first output NaN.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidWindow`] if `window` is 0.
///
/// # Example
///
/// ```rust
/// use ta_indicators::volatility::sdev;
///
/// let result = sdev(&[1.0f64, 3.0, 5.0], 2).unwrap();
/// assert!(result[0].is_nan());
/// assert!((result[2] - 2.0f64.sqrt()).abs() < 1e-12);
/// ```
pub fn sdev<T: TaFloat>(series: &[T], window: usize) -> Result<Series<T>> {
    rolling(series, window, 0, RollingStat::Std)
}

/// Configuration for the rolling standard deviation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SdevConfig {
    /// The window size (default: 20).
    pub window: usize,
}

impl Default for SdevConfig {
    fn default() -> Self {
        Self { window: 20 }
    }
}

impl SdevConfig {
    /// Create a new configuration with the given window.
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

/// Rolling standard deviation of close prices.
#[derive(Debug, Clone)]
pub struct Sdev<T: TaFloat> {
    config: SdevConfig,
    buffer: RingBuffer<T>,
    current: Option<T>,
}

impl<T: TaFloat> Indicator<T> for Sdev<T> {
    type Output = Series<T>;
    type Config = SdevConfig;

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn new(config: Self::Config) -> Self {
        Self {
            buffer: RingBuffer::new(config.window.max(1)),
            config,
            current: None,
        }
    }

    fn min_periods(&self) -> usize {
        RollingStat::Std.min_observations()
    }

    fn calculate(&self, data: &OhlcvSeries<T>) -> Result<Self::Output> {
        sdev(data.close().as_slice(), self.config.window)
    }
}

impl<T: TaFloat> StreamingIndicator<T> for Sdev<T> {
    type StreamingOutput = Option<T>;

    fn update(&mut self, bar: &Bar<T>) -> Result<Option<T>> {
        IndicatorError::ensure_window(self.config.window)?;

        self.buffer.push(bar.close);
        self.current = Some(self.buffer.reduce(RollingStat::Std, 0)).filter(|v| !v.is_nan());
        Ok(self.current)
    }

    fn current(&self) -> Option<T> {
        self.current
    }

    fn is_ready(&self) -> bool {
        self.current.is_some()
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.current = None;
    }
}
