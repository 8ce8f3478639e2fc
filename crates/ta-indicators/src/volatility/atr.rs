//! Average True Range (ATR) indicator.
//!
//! ATR is the simple moving average of the true range. The close before the
//! first bar is taken as zero, so the first true range is at least the high.

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    ohlcv::{Bar, OhlcvSeries},
    series::Series,
    traits::{Indicator, StreamingIndicator},
    utils::true_range,
    window::{RingBuffer, RollingStat},
};

use crate::trend::sma;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Average true range over `window` bars.
///
/// # Errors
///
/// Returns [`IndicatorError::LengthMismatch`] if the inputs differ in length
/// and [`IndicatorError::InvalidWindow`] if `window` is 0.
///
/// # Example
///
/// ```rust
/// use ta_indicators::volatility::atr;
///
/// let result = atr(&[10.0f64, 11.0], &[9.0, 10.0], &[9.5, 10.5], 2).unwrap();
/// // TR = [10.0, 1.5]
/// assert_eq!(result.as_slice(), &[10.0, 5.75]);
/// ```
pub fn atr<T: TaFloat>(high: &[T], low: &[T], close: &[T], window: usize) -> Result<Series<T>> {
    let tr = true_range(high, low, close)?;
    sma(tr.as_slice(), window, RollingStat::Mean)
}

/// Configuration for the ATR indicator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AtrConfig {
    /// The lookback period (default: 14).
    pub window: usize,
}

impl Default for AtrConfig {
    fn default() -> Self {
        Self { window: 14 }
    }
}

impl AtrConfig {
    /// Create a new ATR configuration with the given window.
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

/// Average True Range indicator.
///
/// # Formula
///
/// TR = max(High - Low, |High - PrevClose|, |Low - PrevClose|)
/// ATR = SMA(TR, window)
#[derive(Debug, Clone)]
pub struct Atr<T: TaFloat> {
    config: AtrConfig,
    prev_close: T,
    ranges: RingBuffer<T>,
    current: Option<T>,
}

impl<T: TaFloat> Indicator<T> for Atr<T> {
    type Output = Series<T>;
    type Config = AtrConfig;

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn new(config: Self::Config) -> Self {
        Self {
            ranges: RingBuffer::new(config.window.max(1)),
            config,
            prev_close: T::ZERO,
            current: None,
        }
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn calculate(&self, data: &OhlcvSeries<T>) -> Result<Self::Output> {
        atr(
            data.high().as_slice(),
            data.low().as_slice(),
            data.close().as_slice(),
            self.config.window,
        )
    }
}

impl<T: TaFloat> StreamingIndicator<T> for Atr<T> {
    type StreamingOutput = Option<T>;

    fn update(&mut self, bar: &Bar<T>) -> Result<Option<T>> {
        IndicatorError::ensure_window(self.config.window)?;

        let tr = (bar.high - bar.low)
            .nan_max((bar.high - self.prev_close).abs())
            .nan_max((bar.low - self.prev_close).abs());
        self.prev_close = bar.close;

        self.ranges.push(tr);
        self.current = Some(self.ranges.reduce(RollingStat::Mean, 1));
        Ok(self.current)
    }

    fn current(&self) -> Option<T> {
        self.current
    }

    fn is_ready(&self) -> bool {
        self.current.is_some()
    }

    fn reset(&mut self) {
        self.prev_close = T::ZERO;
        self.ranges.clear();
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn create_test_ohlcv() -> OhlcvSeries<f64> {
        [
            (48.70, 47.79, 48.16),
            (48.72, 48.14, 48.61),
            (48.90, 48.39, 48.75),
            (48.87, 48.37, 48.63),
            (48.82, 48.24, 48.74),
            (49.05, 48.64, 49.03),
            (49.20, 48.94, 49.07),
        ]
        .iter()
        .map(|&(h, l, c)| Bar::new(c, h, l, c, 1000.0))
        .collect()
    }

    #[test]
    fn test_atr_default_config() {
        assert_eq!(AtrConfig::default().window, 14);
    }

    #[test]
    fn test_atr_first_range_uses_zero_prev_close() {
        let ohlcv = create_test_ohlcv();
        let result = Atr::<f64>::new(AtrConfig::new(3)).calculate(&ohlcv).unwrap();

        assert_eq!(result.len(), ohlcv.len());
        // |48.70 - 0| dominates the first bar
        assert_relative_eq!(result[0], 48.70, epsilon = 1e-12);
        // TR[1] = max(0.58, |48.72 - 48.16|, |48.14 - 48.16|) = 0.58
        assert_relative_eq!(result[1], (48.70 + 0.58) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_atr_steady_state() {
        let ohlcv = create_test_ohlcv();
        let result = Atr::<f64>::new(AtrConfig::new(3)).calculate(&ohlcv).unwrap();

        // TR[4..7] = [0.58, 0.41, 0.26]
        assert_relative_eq!(result[6], (0.58 + 0.41 + 0.26) / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_atr_length_mismatch() {
        let err = atr(&[1.0f64, 2.0], &[0.5], &[1.0, 1.5], 2).unwrap_err();
        assert_eq!(
            err,
            IndicatorError::LengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_atr_streaming_equals_batch() {
        let ohlcv = create_test_ohlcv();
        let config = AtrConfig::new(3);

        let batch = Atr::<f64>::new(config.clone()).calculate(&ohlcv).unwrap();
        let mut streaming = Atr::<f64>::new(config);

        for (i, bar) in ohlcv.iter().enumerate() {
            let value = streaming.update(&bar).unwrap().unwrap();
            assert_relative_eq!(value, batch[i], epsilon = 1e-12);
        }

        streaming.reset();
        assert!(!streaming.is_ready());
    }
}
