//! Rate of Change (ROC) indicator.
//!
//! ROC measures the percentage change in price from n periods ago.

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    ohlcv::{Bar, OhlcvSeries},
    series::Series,
    traits::{Indicator, StreamingIndicator},
    window::RingBuffer,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Percentage change of `close` over `n` periods.
///
/// The first `n` outputs have no lookback and are NaN, so the valid values
/// keep their original positions. A zero lookback price also yields NaN.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidWindow`] if `n` is 0.
///
/// # Example
///
/// ```rust
/// use ta_indicators::momentum::roc;
///
/// let result = roc(&[100.0f64, 110.0, 121.0], 1).unwrap();
/// assert!(result[0].is_nan());
/// assert!((result[2] - 10.0).abs() < 1e-12);
/// ```
pub fn roc<T: TaFloat>(close: &[T], n: usize) -> Result<Series<T>> {
    IndicatorError::ensure_window(n)?;

    let head = core::iter::repeat(T::NAN).take(n.min(close.len()));
    let tail = close
        .iter()
        .zip(close.iter().skip(n))
        .map(|(&prev, &curr)| change_percent(prev, curr));

    Ok(head.chain(tail).collect())
}

fn change_percent<T: TaFloat>(prev: T, curr: T) -> T {
    if prev == T::ZERO {
        T::NAN
    } else {
        (curr - prev) / prev * T::HUNDRED
    }
}

/// Configuration for ROC.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RocConfig {
    /// Lookback period (default: 14).
    pub window: usize,
}

impl Default for RocConfig {
    fn default() -> Self {
        Self { window: 14 }
    }
}

impl RocConfig {
    /// Create a new configuration.
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

/// Rate of Change indicator.
///
/// # Formula
///
/// ROC = 100 * (Close - Close_n) / Close_n
///
/// Where Close_n is the close price n periods ago.
#[derive(Debug, Clone)]
pub struct Roc<T: TaFloat> {
    config: RocConfig,
    buffer: RingBuffer<T>,
    current: Option<T>,
}

impl<T: TaFloat> Indicator<T> for Roc<T> {
    type Output = Series<T>;
    type Config = RocConfig;

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn new(config: Self::Config) -> Self {
        Self {
            buffer: RingBuffer::new(config.window + 1),
            config,
            current: None,
        }
    }

    fn min_periods(&self) -> usize {
        self.config.window + 1
    }

    fn calculate(&self, data: &OhlcvSeries<T>) -> Result<Self::Output> {
        roc(data.close().as_slice(), self.config.window)
    }
}

impl<T: TaFloat> StreamingIndicator<T> for Roc<T> {
    type StreamingOutput = Option<T>;

    fn update(&mut self, bar: &Bar<T>) -> Result<Option<T>> {
        IndicatorError::ensure_window(self.config.window)?;

        self.buffer.push(bar.close);

        // once full, oldest() is the close from `window` periods ago
        if self.buffer.is_full() {
            if let Some(&prev) = self.buffer.oldest() {
                self.current = Some(change_percent(prev, bar.close));
            }
        }
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
