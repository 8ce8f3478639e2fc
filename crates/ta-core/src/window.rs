//! Rolling windows.
//!
//! [`RingBuffer`] holds the most recent samples for streaming indicators and
//! [`RollingStat`] names the aggregate reduced over a window, shared by batch
//! and streaming code paths so both produce identical values.

use core::cmp::Ordering;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::num::TaFloat;

/// Aggregate applied to each rolling window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RollingStat {
    /// Arithmetic mean.
    #[default]
    Mean,
    /// Sum of the window.
    Sum,
    /// Sample standard deviation (ddof = 1).
    Std,
    /// Sample variance (ddof = 1).
    Var,
    /// Minimum value.
    Min,
    /// Maximum value.
    Max,
    /// Median value.
    Median,
}

impl RollingStat {
    /// Fewest observations for which the statistic is defined.
    #[must_use]
    pub fn min_observations(self) -> usize {
        match self {
            Self::Std | Self::Var => 2,
            _ => 1,
        }
    }

    /// Reduce a window of observations.
    ///
    /// NaN samples are skipped. Returns NaN when fewer than
    /// `max(min_periods, self.min_observations())` observations remain.
    #[must_use]
    pub fn reduce<T: TaFloat>(self, window: &[T], min_periods: usize) -> T {
        let values: Vec<T> = window.iter().copied().filter(|x| !x.is_nan()).collect();
        let count = values.len();
        if count == 0 || count < min_periods.max(self.min_observations()) {
            return T::NAN;
        }

        let n = <T as TaFloat>::from_usize(count);
        let sum = values.iter().fold(T::ZERO, |acc, &x| acc + x);

        match self {
            Self::Mean => sum / n,
            Self::Sum => sum,
            Self::Var => sample_variance(&values, sum / n),
            Self::Std => sample_variance(&values, sum / n).sqrt(),
            Self::Min => values.iter().fold(T::INFINITY, |acc, &x| acc.min(x)),
            Self::Max => values.iter().fold(T::NEG_INFINITY, |acc, &x| acc.max(x)),
            Self::Median => {
                let mut sorted = values;
                sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
                let mid = count / 2;
                if count % 2 == 0 {
                    (sorted[mid - 1] + sorted[mid]) * T::HALF
                } else {
                    sorted[mid]
                }
            }
        }
    }
}

fn sample_variance<T: TaFloat>(values: &[T], mean: T) -> T {
    let sum_sq = values.iter().fold(T::ZERO, |acc, &x| {
        let d = x - mean;
        acc + d * d
    });
    sum_sq / <T as TaFloat>::from_usize(values.len() - 1)
}

impl FromStr for RollingStat {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" => Ok(Self::Mean),
            "sum" => Ok(Self::Sum),
            "std" => Ok(Self::Std),
            "var" => Ok(Self::Var),
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            "median" => Ok(Self::Median),
            other => Err(IndicatorError::InvalidParameter {
                name: "statistic",
                value: other.to_string(),
                expected: "one of mean, sum, std, var, min, max, median",
            }),
        }
    }
}

/// A fixed-capacity circular buffer for streaming calculations.
///
/// When the buffer is full, pushing a new value evicts the oldest.
///
/// # Example
///
/// ```rust
/// use ta_core::{RingBuffer, RollingStat};
///
/// let mut buffer: RingBuffer<f64> = RingBuffer::new(3);
///
/// buffer.push(1.0);
/// buffer.push(2.0);
/// buffer.push(3.0);
/// assert_eq!(buffer.reduce(RollingStat::Mean, 1), 2.0);
///
/// buffer.push(4.0); // Removes 1.0
/// assert_eq!(buffer.reduce(RollingStat::Mean, 1), 3.0);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct RingBuffer<T: TaFloat> {
    buffer: Vec<T>,
    /// Next write position; also the oldest element once full.
    head: usize,
    len: usize,
}

impl<T: TaFloat> RingBuffer<T> {
    /// Create a new ring buffer with the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if capacity is 0.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "RingBuffer capacity must be > 0");
        Self {
            buffer: vec![T::ZERO; capacity],
            head: 0,
            len: 0,
        }
    }

    /// Push a value, returning the evicted value when the buffer was full.
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.is_full() {
            Some(self.buffer[self.head])
        } else {
            self.len += 1;
            None
        };

        self.buffer[self.head] = value;
        self.head = (self.head + 1) % self.capacity();
        evicted
    }

    /// Returns `true` if the buffer is full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns the number of elements in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity of the buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Get a value by age (0 = oldest).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let start = if self.is_full() { self.head } else { 0 };
        Some(&self.buffer[(start + index) % self.capacity()])
    }

    /// Get the oldest value in the buffer.
    #[must_use]
    pub fn oldest(&self) -> Option<&T> {
        self.get(0)
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    /// Reduce the buffered window with a rolling statistic.
    #[must_use]
    pub fn reduce(&self, stat: RollingStat, min_periods: usize) -> T {
        let window: Vec<T> = self.iter().copied().collect();
        stat.reduce(&window, min_periods)
    }

    /// Remove all values.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}
