//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! The MACD line is the difference between a fast and a slow EMA of the close.
//! The indicator struct additionally smooths that line into a signal line.

use ta_core::{
    error::Result,
    num::TaFloat,
    ohlcv::{Bar, OhlcvSeries},
    series::Series,
    traits::{Indicator, StreamingIndicator},
    utils::Ewm,
};

use super::ema::ema;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// MACD line: `ema(close, fast) - ema(close, slow)`, element-wise.
///
/// # Errors
///
/// Returns [`ta_core::IndicatorError::InvalidWindow`] if either span is 0.
///
/// # Example
///
/// ```rust
/// use ta_indicators::trend::macd;
///
/// let line = macd(&[10.0f64, 10.0, 10.0], 8, 21).unwrap();
/// assert_eq!(line.as_slice(), &[0.0, 0.0, 0.0]);
/// ```
pub fn macd<T: TaFloat>(close: &[T], fast: usize, slow: usize) -> Result<Series<T>> {
    let fast_ema = ema(close, fast)?;
    let slow_ema = ema(close, slow)?;
    fast_ema.zip_with(slow_ema.as_slice(), |f, s| f - s)
}

/// Configuration for the MACD indicator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MacdConfig {
    /// Fast EMA span (default: 8).
    pub fast: usize,
    /// Slow EMA span (default: 21).
    pub slow: usize,
    /// Signal line EMA span (default: 9).
    pub signal: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast: 8,
            slow: 21,
            signal: 9,
        }
    }
}

impl MacdConfig {
    /// Create a new MACD configuration.
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        Self { fast, slow, signal }
    }
}

/// Single-bar MACD output.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct MacdOutput<T: TaFloat> {
    /// MACD line (fast EMA - slow EMA).
    pub macd: T,
    /// Signal line (EMA of MACD line).
    pub signal: T,
    /// Histogram (MACD - Signal).
    pub histogram: T,
}

/// MACD series output containing all three lines.
#[derive(Debug, Clone)]
pub struct MacdSeries<T: TaFloat> {
    /// MACD line series.
    pub macd: Series<T>,
    /// Signal line series.
    pub signal: Series<T>,
    /// Histogram series.
    pub histogram: Series<T>,
}

/// Moving Average Convergence Divergence indicator.
///
/// # Formula
///
/// MACD Line = EMA(close, fast) - EMA(close, slow)
/// Signal Line = EMA(MACD Line, signal)
/// Histogram = MACD Line - Signal Line
#[derive(Debug, Clone)]
pub struct Macd<T: TaFloat> {
    config: MacdConfig,
    lines: Option<[Ewm<T>; 3]>,
    current: Option<MacdOutput<T>>,
}

impl<T: TaFloat> Indicator<T> for Macd<T> {
    type Output = MacdSeries<T>;
    type Config = MacdConfig;

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            lines: None,
            current: None,
        }
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn calculate(&self, data: &OhlcvSeries<T>) -> Result<Self::Output> {
        let macd_line = macd(data.close().as_slice(), self.config.fast, self.config.slow)?;
        let signal = ema(macd_line.as_slice(), self.config.signal)?;
        let histogram = macd_line.zip_with(signal.as_slice(), |m, s| m - s)?;

        Ok(MacdSeries {
            macd: macd_line,
            signal,
            histogram,
        })
    }
}

impl<T: TaFloat> StreamingIndicator<T> for Macd<T> {
    type StreamingOutput = Option<MacdOutput<T>>;

    fn update(&mut self, bar: &Bar<T>) -> Result<Option<MacdOutput<T>>> {
        let [mut fast, mut slow, mut signal] = match self.lines {
            Some(lines) => lines,
            None => [
                Ewm::new(self.config.fast)?,
                Ewm::new(self.config.slow)?,
                Ewm::new(self.config.signal)?,
            ],
        };

        let line = fast.push(bar.close) - slow.push(bar.close);
        let signal_value = signal.push(line);
        self.lines = Some([fast, slow, signal]);

        self.current = Some(MacdOutput {
            macd: line,
            signal: signal_value,
            histogram: line - signal_value,
        });
        Ok(self.current)
    }

    fn current(&self) -> Option<MacdOutput<T>> {
        self.current
    }

    fn is_ready(&self) -> bool {
        self.current.is_some()
    }

    fn reset(&mut self) {
        self.lines = None;
        self.current = None;
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

    const CLOSES: [f64; 12] = [
        459.99, 448.85, 446.06, 450.81, 442.8, 448.97, 444.57, 441.4, 430.47, 420.05, 431.14,
        425.66,
    ];

    #[test]
    fn test_macd_default_config() {
        let config = MacdConfig::default();
        assert_eq!((config.fast, config.slow, config.signal), (8, 21, 9));
    }

    #[test]
    fn test_macd_is_difference_of_emas() {
        let line = macd(&CLOSES, 3, 6).unwrap();
        let fast = ema(&CLOSES, 3).unwrap();
        let slow = ema(&CLOSES, 6).unwrap();

        assert_eq!(line.len(), CLOSES.len());
        assert_eq!(line[0], 0.0);
        for i in 0..CLOSES.len() {
            assert_relative_eq!(line[i], fast[i] - slow[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_macd_signal_and_histogram() {
        let ohlcv = create_test_ohlcv(&CLOSES);
        let result = Macd::<f64>::new(MacdConfig::new(3, 6, 4))
            .calculate(&ohlcv)
            .unwrap();

        let expected_signal = ema(result.macd.as_slice(), 4).unwrap();
        for i in 0..CLOSES.len() {
            assert_relative_eq!(result.signal[i], expected_signal[i], epsilon = 1e-12);
            assert_relative_eq!(
                result.histogram[i],
                result.macd[i] - result.signal[i],
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_macd_invalid_span() {
        assert!(macd(&CLOSES, 0, 6).is_err());

        let mut streaming = Macd::<f64>::new(MacdConfig::new(3, 6, 0));
        assert!(streaming.update(&Bar::new(1.0, 1.0, 1.0, 1.0, 1.0)).is_err());
    }

    #[test]
    fn test_macd_streaming_equals_batch() {
        let ohlcv = create_test_ohlcv(&CLOSES);
        let config = MacdConfig::new(3, 6, 4);

        let batch = Macd::<f64>::new(config.clone()).calculate(&ohlcv).unwrap();
        let mut streaming = Macd::<f64>::new(config);

        for (i, bar) in ohlcv.iter().enumerate() {
            let out = streaming.update(&bar).unwrap().unwrap();
            assert_relative_eq!(out.macd, batch.macd[i], epsilon = 1e-10);
            assert_relative_eq!(out.signal, batch.signal[i], epsilon = 1e-10);
            assert_relative_eq!(out.histogram, batch.histogram[i], epsilon = 1e-10);
        }

        streaming.reset();
        assert!(!streaming.is_ready());
    }
}
