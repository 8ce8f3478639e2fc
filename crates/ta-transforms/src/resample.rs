//! Candle Resampler.
//!
//! Combines consecutive fine-grained candles into coarse ones, so a strategy
//! built on 1-hour candles can run on 15-minute data (interval = 4).

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    ohlcv::{Bar, OhlcvSeries},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Group every `interval` rows of `data` into one candle.
///
/// Windows start at `0, interval, 2 * interval, ...` while
/// `start < len - interval`, so the trailing partial window and the final row
/// are dropped. Each output candle takes:
///
/// - timestamp and open from the first row of the window,
/// - the highest high and lowest low of the window,
/// - the close of row `start + interval`, the first row *after* the window,
/// - the summed volume of the window.
///
/// Because the close comes from the following row, resampled closes
/// equal the next candle's first-row close, not the window's last.
///
/// A table of `interval` rows or fewer yields an empty table. A NaN in any
/// aggregated column makes that candle's aggregate NaN.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidWindow`] if `interval` is 0.
///
/// # Example
///
/// ```rust
/// use ta_core::{Bar, OhlcvSeries};
/// use ta_transforms::group_candles;
///
/// let fine: OhlcvSeries<f64> = (0..7)
///     .map(|i| {
///         let p = 100.0 + i as f64;
///         Bar::new(p, p + 1.0, p - 1.0, p, 10.0)
///     })
///     .collect();
///
/// let coarse = group_candles(&fine, 3).unwrap();
/// assert_eq!(coarse.len(), 2);
/// assert_eq!(coarse.close().as_slice(), &[103.0, 106.0]);
/// assert_eq!(coarse.volume().as_slice(), &[30.0, 30.0]);
/// ```
pub fn group_candles<T: TaFloat>(data: &OhlcvSeries<T>, interval: usize) -> Result<OhlcvSeries<T>> {
    IndicatorError::ensure_window(interval)?;

    let len = data.len();
    let starts = (0..len.saturating_sub(interval)).step_by(interval);
    let mut grouped = OhlcvSeries::with_capacity(starts.len());

    for start in starts {
        let window = start..start + interval;

        let high = data.high().as_slice()[window.clone()]
            .iter()
            .fold(T::NEG_INFINITY, |acc, &h| acc.nan_max(h));
        let low = data.low().as_slice()[window.clone()]
            .iter()
            .fold(T::INFINITY, |acc, &l| acc.nan_min(l));
        let volume = data.volume().as_slice()[window]
            .iter()
            .fold(T::ZERO, |acc, &v| acc + v);

        let bar = Bar::new(
            data.open()[start],
            high,
            low,
            data.close()[start + interval],
            volume,
        );
        grouped.push(match data.timestamps() {
            Some(ts) => bar.timestamp(ts[start]),
            None => bar,
        });
    }

    tracing::debug!(
        rows = len,
        interval,
        candles = grouped.len(),
        dropped = len - grouped.len() * interval,
        "grouped candles"
    );

    Ok(grouped)
}

/// Configuration for the candle resampler.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResampleConfig {
    /// Fine rows per coarse candle (default: 4).
    pub interval: usize,
    /// Reject tables whose length is not a multiple of `interval`.
    pub strict: bool,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            interval: 4,
            strict: false,
        }
    }
}

impl ResampleConfig {
    /// Create a new configuration with the given interval.
    pub fn new(interval: usize) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }

    /// Set strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Candle resampler with a fixed interval ratio.
///
/// In the default mode this is exactly [`group_candles`]. Strict mode refuses
/// to resample a table the interval does not evenly divide instead of silently
/// dropping the trailing rows.
#[derive(Debug, Clone, Default)]
pub struct CandleResampler {
    config: ResampleConfig,
}

impl CandleResampler {
    /// Create a resampler with the given configuration.
    pub fn new(config: ResampleConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &ResampleConfig {
        &self.config
    }

    /// Resample `data` into coarse candles.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidWindow`] for a zero interval and, in
    /// strict mode, [`IndicatorError::IntervalMismatch`] when the table length
    /// is not a multiple of the interval.
    pub fn resample<T: TaFloat>(&self, data: &OhlcvSeries<T>) -> Result<OhlcvSeries<T>> {
        let interval = self.config.interval;
        IndicatorError::ensure_window(interval)?;

        if data.len() % interval != 0 {
            if self.config.strict {
                tracing::warn!(
                    rows = data.len(),
                    interval,
                    "interval does not divide the table"
                );
                return Err(IndicatorError::IntervalMismatch {
                    len: data.len(),
                    interval,
                });
            }
            tracing::debug!(
                rows = data.len(),
                interval,
                remainder = data.len() % interval,
                "trailing partial window will be dropped"
            );
        }

        group_candles(data, interval)
    }
}
