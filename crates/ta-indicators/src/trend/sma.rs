//! Simple Moving Average (SMA) indicator.
//!
//! A rolling aggregate over the last `window` samples. The first `window - 1`
//! outputs are computed over the shorter window available so far.

use ta_core::{
    error::Result,
    num::TaFloat,
    ohlcv::{Bar, OhlcvSeries},
    series::Series,
    traits::{Indicator, StreamingIndicator},
    utils::rolling,
    window::{RingBuffer, RollingStat},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rolling aggregate of `series` with a minimum of one period.
///
/// `statistic` selects the reduction; [`RollingStat::Mean`] gives the classic
/// simple moving average. Output length equals input length.
///
/// # Errors
///
/// Returns [`ta_core::IndicatorError::InvalidWindow`] if `window` is 0.
///
/// # Example
///
/// ```rust
/// use ta_core::RollingStat;
/// use ta_indicators::trend::sma;
///
/// let result = sma(&[2.0f64, 4.0, 6.0, 8.0], 2, RollingStat::Mean).unwrap();
/// assert_eq!(result.as_slice(), &[2.0, 3.0, 5.0, 7.0]);
/// ```
pub fn sma<T: TaFloat>(series: &[T], window: usize, statistic: RollingStat) -> Result<Series<T>> {
    rolling(series, window, 1, statistic)
}

/// Configuration for the SMA indicator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmaConfig {
    /// The window size for the moving average.
    pub window: usize,
    /// Aggregate reduced over each window.
    pub statistic: RollingStat,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self {
            window: 14,
            statistic: RollingStat::Mean,
        }
    }
}

impl SmaConfig {
    /// Create a new SMA configuration with the given window.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    /// Use a different rolling aggregate.
    pub fn with_statistic(mut self, statistic: RollingStat) -> Self {
        self.statistic = statistic;
        self
    }
}

/// Simple Moving Average indicator over close prices.
#[derive(Debug, Clone)]
pub struct Sma<T: TaFloat> {
    config: SmaConfig,
    buffer: RingBuffer<T>,
    current: Option<T>,
}

impl<T: TaFloat> Indicator<T> for Sma<T> {
    type Output = Series<T>;
    type Config = SmaConfig;

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn new(config: Self::Config) -> Self {
        Self {
            // max(1) keeps construction infallible; update() rejects window 0
            buffer: RingBuffer::new(config.window.max(1)),
            config,
            current: None,
        }
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn calculate(&self, data: &OhlcvSeries<T>) -> Result<Self::Output> {
        sma(data.close().as_slice(), self.config.window, self.config.statistic)
    }
}

impl<T: TaFloat> StreamingIndicator<T> for Sma<T> {
    type StreamingOutput = Option<T>;

    fn update(&mut self, bar: &Bar<T>) -> Result<Option<T>> {
        ta_core::IndicatorError::ensure_window(self.config.window)?;

        self.buffer.push(bar.close);
        let value = self.buffer.reduce(self.config.statistic, 1);
        self.current = Some(value);
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ta_core::IndicatorError;

    fn create_test_ohlcv(closes: &[f64]) -> OhlcvSeries<f64> {
        closes
            .iter()
            .map(|&c| Bar::new(c, c, c, c, 1000.0))
            .collect()
    }

    #[test]
    fn test_sma_default_config() {
        let config = SmaConfig::default();
        assert_eq!(config.window, 14);
        assert_eq!(config.statistic, RollingStat::Mean);
    }

    #[test]
    fn test_sma_warm_up_uses_shrinking_window() {
        let result = sma(&[1.0f64, 2.0, 3.0, 4.0, 5.0], 3, RollingStat::Mean).unwrap();
        assert_eq!(result.len(), 5);
        assert_relative_eq!(result[0], 1.0);
        assert_relative_eq!(result[1], 1.5);
        assert_relative_eq!(result[2], 2.0);
        assert_relative_eq!(result[3], 3.0);
        assert_relative_eq!(result[4], 4.0);
    }

    #[test]
    fn test_sma_other_statistics() {
        let data = [4.0f64, 1.0, 3.0, 2.0];
        let maxes = sma(&data, 2, RollingStat::Max).unwrap();
        assert_eq!(maxes.as_slice(), &[4.0, 4.0, 3.0, 3.0]);

        let stds = sma(&data, 2, RollingStat::Std).unwrap();
        assert!(stds[0].is_nan());
        assert_relative_eq!(stds[1], (4.5f64).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_sma_calculate_uses_close() {
        let ohlcv = create_test_ohlcv(&[10.0, 20.0, 30.0]);
        let sma = Sma::<f64>::new(SmaConfig::new(2));
        let result = sma.calculate(&ohlcv).unwrap();
        assert_eq!(result.as_slice(), &[10.0, 15.0, 25.0]);
    }

    #[test]
    fn test_sma_invalid_window() {
        let ohlcv = create_test_ohlcv(&[1.0, 2.0]);
        let mut sma = Sma::<f64>::new(SmaConfig::new(0));
        assert_eq!(sma.calculate(&ohlcv).unwrap_err(), IndicatorError::InvalidWindow(0));
        assert!(sma.update(&ohlcv.get(0).unwrap()).is_err());
    }

    #[test]
    fn test_sma_streaming_equals_batch() {
        let closes = [44.0f64, 44.25, 44.5, 43.75, 44.5, 44.25, 44.0, 43.5];
        let ohlcv = create_test_ohlcv(&closes);
        let config = SmaConfig::new(3).with_statistic(RollingStat::Median);

        let batch = Sma::<f64>::new(config.clone()).calculate(&ohlcv).unwrap();
        let mut streaming = Sma::<f64>::new(config);
        for (i, bar) in ohlcv.iter().enumerate() {
            let value = streaming.update(&bar).unwrap().unwrap();
            assert_relative_eq!(value, batch[i], epsilon = 1e-12);
        }
        assert!(streaming.is_ready());

        streaming.reset();
        assert!(!streaming.is_ready());
        assert_eq!(streaming.current(), None);
    }
}
