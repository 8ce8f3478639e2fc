//! Relative Strength Index (RSI) indicator.
//!
//! RSI is a momentum oscillator that measures the speed and magnitude
//! of recent price changes to evaluate overbought or oversold conditions.

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    ohlcv::{Bar, OhlcvSeries},
    series::Series,
    traits::{Indicator, StreamingIndicator},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wilder's relative strength index of `close` over `n` periods.
///
/// The average gain and loss are seeded from the first `n` price changes,
/// each divided by `n`, and the first `n` outputs all hold that seed value.
/// Every later index applies one smoothing step
/// `avg = (avg * (n - 1) + change) / n` with the change from the previous
/// close. Output length equals input length.
///
/// # Edge Cases
///
/// - AvgLoss = 0 AND AvgGain > 0 → RSI = 100
/// - AvgLoss = 0 AND AvgGain = 0 → RSI = 50 (neutral)
/// - Fewer than `n` changes available → seed from those, still divided by `n`
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidWindow`] if `n` is 0.
///
/// # Example
///
/// ```rust
/// use ta_indicators::momentum::rsi;
///
/// let result = rsi(&[1.0f64, 2.0, 3.0, 4.0, 3.0], 3).unwrap();
/// assert_eq!(result[0], 100.0);
/// assert!((result[4] - 200.0 / 3.0).abs() < 1e-9);
/// ```
pub fn rsi<T: TaFloat>(close: &[T], n: usize) -> Result<Series<T>> {
    IndicatorError::ensure_window(n)?;

    let window = <T as TaFloat>::from_usize(n);
    let seed = close
        .windows(2)
        .take(n)
        .fold(Averages::default(), |acc, pair| acc.accumulate(pair[1] - pair[0]))
        .scale(window);

    tracing::trace!(
        window = n,
        avg_gain = seed.gain.to_f64_lossy(),
        avg_loss = seed.loss.to_f64_lossy(),
        "rsi seeded"
    );

    let head = core::iter::repeat(seed.value()).take(n.min(close.len()));
    let tail = close.windows(2).skip(n - 1).scan(seed, |avg, pair| {
        *avg = avg.smooth(pair[1] - pair[0], window);
        Some(avg.value())
    });

    Ok(head.chain(tail).collect())
}

/// Running average gain and loss.
#[derive(Clone, Copy, Debug)]
struct Averages<T: TaFloat> {
    gain: T,
    loss: T,
}

impl<T: TaFloat> Default for Averages<T> {
    fn default() -> Self {
        Self {
            gain: T::ZERO,
            loss: T::ZERO,
        }
    }
}

impl<T: TaFloat> Averages<T> {
    /// Split a price change into its (gain, loss) contributions.
    fn split(change: T) -> (T, T) {
        if change > T::ZERO {
            (change, T::ZERO)
        } else if change < T::ZERO {
            (T::ZERO, -change)
        } else {
            (T::ZERO, T::ZERO)
        }
    }

    fn accumulate(self, change: T) -> Self {
        let (gain, loss) = Self::split(change);
        Self {
            gain: self.gain + gain,
            loss: self.loss + loss,
        }
    }

    fn scale(self, window: T) -> Self {
        Self {
            gain: self.gain / window,
            loss: self.loss / window,
        }
    }

    fn smooth(self, change: T, window: T) -> Self {
        let (gain, loss) = Self::split(change);
        let prior = window - T::ONE;
        Self {
            gain: (self.gain * prior + gain) / window,
            loss: (self.loss * prior + loss) / window,
        }
    }

    fn value(self) -> T {
        rsi_value(self.gain, self.loss)
    }
}

fn rsi_value<T: TaFloat>(avg_gain: T, avg_loss: T) -> T {
    if avg_loss == T::ZERO && !avg_gain.is_nan() {
        if avg_gain == T::ZERO {
            T::FIFTY
        } else {
            T::HUNDRED
        }
    } else {
        T::HUNDRED - T::HUNDRED / (T::ONE + avg_gain / avg_loss)
    }
}

/// Configuration for the RSI indicator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RsiConfig {
    /// The lookback period (default: 14).
    pub window: usize,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self { window: 14 }
    }
}

impl RsiConfig {
    /// Create a new RSI configuration with the given window.
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

/// Relative Strength Index indicator.
///
/// # Formula
///
/// RS = Average Gain / Average Loss
/// RSI = 100 - (100 / (1 + RS))
///
/// Wilder's smoothing is used: alpha = 1/n (not 2/(n+1)).
///
/// Streaming updates cannot emit the seed value ahead of time, so they report
/// `None` until `window` price changes have been seen; from then on each
/// output matches [`rsi`] at the same index.
#[derive(Debug, Clone)]
pub struct Rsi<T: TaFloat> {
    config: RsiConfig,
    prev_close: Option<T>,
    changes: usize,
    seed: Averages<T>,
    averages: Option<Averages<T>>,
}

impl<T: TaFloat> Rsi<T> {
    /// Returns the average gain and loss once seeded.
    pub fn averages(&self) -> Option<(T, T)> {
        self.averages.map(|avg| (avg.gain, avg.loss))
    }
}

impl<T: TaFloat> Indicator<T> for Rsi<T> {
    type Output = Series<T>;
    type Config = RsiConfig;

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            prev_close: None,
            changes: 0,
            seed: Averages::default(),
            averages: None,
        }
    }

    fn min_periods(&self) -> usize {
        self.config.window + 1
    }

    fn calculate(&self, data: &OhlcvSeries<T>) -> Result<Self::Output> {
        rsi(data.close().as_slice(), self.config.window)
    }
}

impl<T: TaFloat> StreamingIndicator<T> for Rsi<T> {
    type StreamingOutput = Option<T>;

    fn update(&mut self, bar: &Bar<T>) -> Result<Option<T>> {
        IndicatorError::ensure_window(self.config.window)?;

        let close = bar.close;
        let Some(prev) = self.prev_close.replace(close) else {
            return Ok(None);
        };

        let change = close - prev;
        let window = <T as TaFloat>::from_usize(self.config.window);

        let averages = match self.averages {
            Some(avg) => avg.smooth(change, window),
            None => {
                self.seed = self.seed.accumulate(change);
                self.changes += 1;
                if self.changes < self.config.window {
                    return Ok(None);
                }
                // the change closing the seed is also the first smoothing step
                self.seed.scale(window).smooth(change, window)
            }
        };

        self.averages = Some(averages);
        Ok(Some(averages.value()))
    }

    fn current(&self) -> Option<T> {
        self.averages.map(Averages::value)
    }

    fn is_ready(&self) -> bool {
        self.averages.is_some()
    }

    fn reset(&mut self) {
        self.prev_close = None;
        self.changes = 0;
        self.seed = Averages::default();
        self.averages = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn create_test_ohlcv(closes: &[f64]) -> OhlcvSeries<f64> {
        closes
            .iter()
            .map(|&c| Bar::new(c, c, c, c, 1000.0))
            .collect()
    }

    const CLOSES: [f64; 14] = [
        1.0, 2.0, 3.0, 4.0, 3.0, 2.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0,
    ];

    #[test]
    fn test_rsi_default_config() {
        let config = RsiConfig::default();
        assert_eq!(config.window, 14);
    }

    #[test]
    fn test_rsi_seed_and_recurrence() {
        let result = rsi(&CLOSES, 3).unwrap();
        assert_eq!(result.len(), 14);

        // seed from [1, 1, 1]: no losses
        for i in 0..4 {
            assert_eq!(result[i], 100.0);
        }
        // one smoothing step per index after the seed
        assert_relative_eq!(result[4], 200.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(result[5], 400.0 / 9.0, epsilon = 1e-9);
        assert_relative_eq!(result[6], 29.629629629629633, epsilon = 1e-9);
        assert_relative_eq!(result[13], 95.88138664498976, epsilon = 1e-9);
    }

    #[test]
    fn test_rsi_flat_series_is_neutral() {
        let result = rsi(&[5.0f64; 6], 3).unwrap();
        assert!(result.iter().all(|&v| v == 50.0));
    }

    #[test]
    fn test_rsi_short_series() {
        let result = rsi(&[1.0f64, 0.0], 4).unwrap();
        assert_eq!(result.len(), 2);
        // gain 0, loss 1/4
        assert_eq!(result[0], 0.0);
        assert_eq!(result[1], 0.0);

        assert!(rsi::<f64>(&[], 4).unwrap().is_empty());
    }

    #[test]
    fn test_rsi_zero_window() {
        assert_eq!(
            rsi(&CLOSES, 0).unwrap_err(),
            IndicatorError::InvalidWindow(0)
        );
    }

    #[test]
    fn test_rsi_bounds() {
        let closes = [
            100.0, 110.0, 105.0, 115.0, 110.0, 120.0, 115.0, 125.0, 120.0, 130.0, 50.0, 45.0, 40.0,
            35.0, 30.0, 25.0, 20.0, 15.0, 10.0, 5.0,
        ];
        let result = rsi(&closes, 5).unwrap();
        for &value in result.iter() {
            assert!((0.0..=100.0).contains(&value), "RSI {value} out of bounds");
        }
    }

    #[test]
    fn test_rsi_streaming_equals_batch() {
        let closes = [44.0f64, 44.25, 44.5, 43.75, 44.5, 44.25, 44.0, 43.5, 43.75, 44.0];
        let ohlcv = create_test_ohlcv(&closes);
        let config = RsiConfig::new(5);

        let batch = Rsi::<f64>::new(config.clone()).calculate(&ohlcv).unwrap();
        let mut streaming = Rsi::<f64>::new(config);

        for (i, bar) in ohlcv.iter().enumerate() {
            let value = streaming.update(&bar).unwrap();
            if i < 5 {
                assert_eq!(value, None);
                assert!(!streaming.is_ready());
            } else {
                assert_relative_eq!(value.unwrap(), batch[i], epsilon = 1e-10);
            }
        }
        assert_relative_eq!(batch[9], 49.468256525942635, epsilon = 1e-9);

        streaming.reset();
        assert_eq!(streaming.current(), None);
        assert_eq!(streaming.averages(), None);
    }
}
