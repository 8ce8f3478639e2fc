//! Building blocks shared by the indicators.
//!
//! Rolling-window reduction with minimum periods, the unadjusted exponentially
//! weighted mean, true range, and the element-wise max/min reducer.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::num::TaFloat;
use crate::series::Series;
use crate::window::RollingStat;

/// Reduce a rolling window over `data`.
///
/// The window at index `i` covers `data[i + 1 - window ..= i]`, clipped at the
/// start of the series, so the first `window - 1` outputs are computed over a
/// shorter window. An output is NaN when its window holds fewer than
/// `min_periods` non-NaN observations. Output length equals input length.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidWindow`] if `window` is 0.
///
/// # Example
///
/// ```rust
/// use ta_core::utils::rolling;
/// use ta_core::RollingStat;
///
/// let data = [1.0f64, 2.0, 3.0, 4.0, 5.0];
/// let result = rolling(&data, 3, 1, RollingStat::Mean).unwrap();
/// assert_eq!(result.as_slice(), &[1.0, 1.5, 2.0, 3.0, 4.0]);
/// ```
pub fn rolling<T: TaFloat>(
    data: &[T],
    window: usize,
    min_periods: usize,
    stat: RollingStat,
) -> Result<Series<T>> {
    IndicatorError::ensure_window(window)?;

    Ok((0..data.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            stat.reduce(&data[start..=i], min_periods)
        })
        .collect())
}

/// Exponentially weighted mean with `alpha = 2 / (span + 1)`, no bias
/// adjustment and a minimum of one observation.
///
/// `y[0] = x[0]` and `y[t] = (1 - alpha) * y[t-1] + alpha * x[t]`. A NaN input
/// repeats the previous output and decays the weight of the history by one
/// more step; leading NaNs stay NaN until the first observation.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidWindow`] if `span` is 0.
///
/// # Example
///
/// ```rust
/// use ta_core::utils::ewm_mean;
///
/// let result = ewm_mean(&[1.0f64, 2.0, 3.0], 3).unwrap();
/// assert_eq!(result.as_slice(), &[1.0, 1.5, 2.25]);
/// ```
pub fn ewm_mean<T: TaFloat>(data: &[T], span: usize) -> Result<Series<T>> {
    let mut ewm = Ewm::new(span)?;
    Ok(data.iter().map(|&x| ewm.push(x)).collect())
}

/// Running state of an unadjusted exponentially weighted mean.
///
/// Feeding values one by one through [`Ewm::push`] yields exactly the series
/// [`ewm_mean`] computes in batch.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct Ewm<T: TaFloat> {
    alpha: T,
    weighted: T,
    old_weight: T,
}

impl<T: TaFloat> Ewm<T> {
    /// Create an accumulator for the given span.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidWindow`] if `span` is 0.
    pub fn new(span: usize) -> Result<Self> {
        IndicatorError::ensure_window(span)?;
        Ok(Self {
            alpha: T::TWO / <T as TaFloat>::from_usize(span + 1),
            weighted: T::NAN,
            old_weight: T::ONE,
        })
    }

    /// Smoothing factor `2 / (span + 1)`.
    #[must_use]
    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// Current mean, NaN before the first observation.
    #[must_use]
    pub fn value(&self) -> T {
        self.weighted
    }

    /// Feed one value and return the updated mean.
    pub fn push(&mut self, x: T) -> T {
        if self.weighted.is_nan() {
            self.weighted = x;
            return self.weighted;
        }

        self.old_weight = self.old_weight * (T::ONE - self.alpha);
        if !x.is_nan() {
            if self.weighted != x {
                self.weighted = (self.old_weight * self.weighted + self.alpha * x)
                    / (self.old_weight + self.alpha);
            }
            self.old_weight = T::ONE;
        }
        self.weighted
    }

    /// Forget all observations.
    pub fn reset(&mut self) {
        self.weighted = T::NAN;
        self.old_weight = T::ONE;
    }
}

/// True range with the previous close at index 0 taken as zero.
///
/// `TR[i] = max(high - low, |high - prev_close|, |low - prev_close|)`.
///
/// # Errors
///
/// Returns [`IndicatorError::LengthMismatch`] if the inputs differ in length.
pub fn true_range<T: TaFloat>(high: &[T], low: &[T], close: &[T]) -> Result<Series<T>> {
    IndicatorError::ensure_len(high.len(), low.len())?;
    IndicatorError::ensure_len(high.len(), close.len())?;

    let prev_close = core::iter::once(T::ZERO).chain(close.iter().copied());
    let high_low: Vec<T> = high.iter().zip(low).map(|(&h, &l)| h - l).collect();
    let high_prev: Vec<T> = high
        .iter()
        .zip(prev_close.clone())
        .map(|(&h, pc)| (h - pc).abs())
        .collect();
    let low_prev: Vec<T> = low
        .iter()
        .zip(prev_close)
        .map(|(&l, pc)| (l - pc).abs())
        .collect();

    maxmin(ReduceMode::Max, &[high_low, high_prev, low_prev])
}

/// Element-wise reduction mode for [`maxmin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReduceMode {
    /// Largest value at each index.
    Max,
    /// Smallest value at each index.
    Min,
}

impl FromStr for ReduceMode {
    type Err = IndicatorError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "max" => Ok(Self::Max),
            "min" => Ok(Self::Min),
            other => Err(IndicatorError::InvalidParameter {
                name: "mode",
                value: other.to_string(),
                expected: "\"max\" or \"min\"",
            }),
        }
    }
}

impl fmt::Display for ReduceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Max => f.write_str("max"),
            Self::Min => f.write_str("min"),
        }
    }
}

/// Element-wise maximum or minimum across aligned series.
///
/// A NaN at any index makes that output NaN.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if `series` is empty and
/// [`IndicatorError::LengthMismatch`] if the series are not all the same length.
///
/// # Example
///
/// ```rust
/// use ta_core::utils::{maxmin, ReduceMode};
///
/// let a = [1.0f64, 5.0, 2.0];
/// let b = [3.0f64, 1.0, 4.0];
/// assert_eq!(maxmin(ReduceMode::Max, &[a, b]).unwrap().as_slice(), &[3.0, 5.0, 4.0]);
/// assert_eq!(maxmin(ReduceMode::Min, &[a, b]).unwrap().as_slice(), &[1.0, 1.0, 2.0]);
/// ```
pub fn maxmin<T: TaFloat, S: AsRef<[T]>>(mode: ReduceMode, series: &[S]) -> Result<Series<T>> {
    let (first, rest) = series
        .split_first()
        .ok_or_else(|| IndicatorError::InvalidParameter {
            name: "series",
            value: "[]".to_string(),
            expected: "at least one series",
        })?;
    let first = first.as_ref();

    for s in rest {
        IndicatorError::ensure_len(first.len(), s.as_ref().len())?;
    }

    let pick = match mode {
        ReduceMode::Max => T::nan_max,
        ReduceMode::Min => T::nan_min,
    };

    Ok((0..first.len())
        .map(|i| rest.iter().fold(first[i], |acc, s| pick(acc, s.as_ref()[i])))
        .collect())
}
