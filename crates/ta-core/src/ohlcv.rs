//! OHLCV (Open, High, Low, Close, Volume) data types.
//!
//! [`Bar`] is one time bucket; [`OhlcvSeries`] is an ordered table of bars at a
//! uniform interval, stored column by column.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::num::TaFloat;
use crate::series::Series;

/// A single OHLCV price bar.
///
/// # Invariants
///
/// Well-formed bars satisfy `high >= max(open, close)` and
/// `low <= min(open, close)`. The invariant is assumed by the resampler and
/// can be checked with [`Bar::is_valid`].
///
/// # Example
///
/// ```rust
/// use ta_core::Bar;
///
/// let bar = Bar::new(100.0, 105.0, 98.0, 103.0, 1_000_000.0);
/// assert!(bar.is_valid());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct Bar<T: TaFloat> {
    /// Opening price for the period.
    pub open: T,
    /// Highest price during the period.
    pub high: T,
    /// Lowest price during the period.
    pub low: T,
    /// Closing price for the period.
    pub close: T,
    /// Trading volume during the period.
    pub volume: T,
    /// Optional bucket date (Unix epoch).
    pub timestamp: Option<i64>,
}

impl<T: TaFloat> Bar<T> {
    /// Create a new bar without a timestamp.
    #[must_use]
    pub fn new(open: T, high: T, low: T, close: T, volume: T) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp: None,
        }
    }

    /// Set the timestamp on an existing bar (builder pattern).
    #[must_use]
    pub fn timestamp(mut self, ts: i64) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Check if the bar satisfies the OHLC ordering invariants.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.open.is_valid()
            && self.high.is_valid()
            && self.low.is_valid()
            && self.close.is_valid()
            && self.low <= self.open
            && self.low <= self.close
            && self.open <= self.high
            && self.close <= self.high
    }
}

/// An ordered OHLCV table, stored as five aligned columns.
///
/// Timestamps are carried alongside the prices but never enter arithmetic.
///
/// # Example
///
/// ```rust
/// use ta_core::{Bar, OhlcvSeries};
///
/// let mut ohlcv: OhlcvSeries<f64> = OhlcvSeries::new();
/// ohlcv.push(Bar::new(100.0, 105.0, 98.0, 103.0, 1_000_000.0));
/// ohlcv.push(Bar::new(103.0, 108.0, 101.0, 107.0, 1_200_000.0));
///
/// assert_eq!(ohlcv.len(), 2);
/// assert_eq!(ohlcv.close()[1], 107.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct OhlcvSeries<T: TaFloat> {
    open: Series<T>,
    high: Series<T>,
    low: Series<T>,
    close: Series<T>,
    volume: Series<T>,
    /// Present only when every bar carries a timestamp.
    timestamps: Option<Vec<i64>>,
}

impl<T: TaFloat> Default for OhlcvSeries<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TaFloat> OhlcvSeries<T> {
    /// Create a new empty OHLCV series.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new OHLCV series with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            open: Series::with_capacity(capacity),
            high: Series::with_capacity(capacity),
            low: Series::with_capacity(capacity),
            close: Series::with_capacity(capacity),
            volume: Series::with_capacity(capacity),
            timestamps: None,
        }
    }

    /// Create an OHLCV series from individual columns.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::LengthMismatch`] if the columns differ in length.
    pub fn from_series(
        open: Series<T>,
        high: Series<T>,
        low: Series<T>,
        close: Series<T>,
        volume: Series<T>,
    ) -> Result<Self> {
        let len = open.len();
        for column in [&high, &low, &close, &volume] {
            IndicatorError::ensure_len(len, column.len())?;
        }

        Ok(Self {
            open,
            high,
            low,
            close,
            volume,
            timestamps: None,
        })
    }

    /// Attach a timestamp column.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::LengthMismatch`] if the column length differs
    /// from the number of bars.
    pub fn with_timestamps(mut self, timestamps: Vec<i64>) -> Result<Self> {
        IndicatorError::ensure_len(self.len(), timestamps.len())?;
        self.timestamps = Some(timestamps);
        Ok(self)
    }

    /// Returns the number of bars in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Returns `true` if the series is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Append a bar to the series.
    ///
    /// The timestamp column is kept only while every pushed bar has one.
    pub fn push(&mut self, bar: Bar<T>) {
        let first = self.is_empty();

        self.open.push(bar.open);
        self.high.push(bar.high);
        self.low.push(bar.low);
        self.close.push(bar.close);
        self.volume.push(bar.volume);

        self.timestamps = match (bar.timestamp, self.timestamps.take()) {
            (Some(ts), Some(mut timestamps)) => {
                timestamps.push(ts);
                Some(timestamps)
            }
            (Some(ts), None) if first => Some(vec![ts]),
            _ => None,
        };
    }

    /// Get the bar at the specified index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Bar<T>> {
        if index >= self.len() {
            return None;
        }

        Some(Bar {
            open: self.open[index],
            high: self.high[index],
            low: self.low[index],
            close: self.close[index],
            volume: self.volume[index],
            timestamp: self.timestamps.as_ref().map(|ts| ts[index]),
        })
    }

    /// Iterate over the bars in order.
    pub fn iter(&self) -> impl Iterator<Item = Bar<T>> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Open prices.
    #[must_use]
    pub fn open(&self) -> &Series<T> {
        &self.open
    }

    /// High prices.
    #[must_use]
    pub fn high(&self) -> &Series<T> {
        &self.high
    }

    /// Low prices.
    #[must_use]
    pub fn low(&self) -> &Series<T> {
        &self.low
    }

    /// Close prices.
    #[must_use]
    pub fn close(&self) -> &Series<T> {
        &self.close
    }

    /// Volumes.
    #[must_use]
    pub fn volume(&self) -> &Series<T> {
        &self.volume
    }

    /// Timestamps, when every bar carries one.
    #[must_use]
    pub fn timestamps(&self) -> Option<&[i64]> {
        self.timestamps.as_deref()
    }
}

impl<T: TaFloat> FromIterator<Bar<T>> for OhlcvSeries<T> {
    fn from_iter<I: IntoIterator<Item = Bar<T>>>(iter: I) -> Self {
        let mut series = Self::new();
        for bar in iter {
            series.push(bar);
        }
        series
    }
}
