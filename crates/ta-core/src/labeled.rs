//! Labeled series.
//!
//! Indicator functions work on anonymous positions. [`Labeled`] pairs a value
//! series with its row labels (usually timestamps) and lifts any
//! length-preserving function over it, so results come back carrying the
//! caller's labels while the core stays label-agnostic.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::num::TaFloat;
use crate::series::Series;

/// A value series with one label per row.
///
/// # Example
///
/// ```rust
/// use ta_core::{Labeled, Series};
///
/// let prices = Labeled::new(vec!["09:00", "09:15", "09:30"], Series::from_vec(vec![1.0, 2.0, 4.0]))
///     .unwrap();
/// let doubled = prices.lift(|v| v.iter().map(|x| x * 2.0).collect()).unwrap();
///
/// assert_eq!(doubled.labels(), &["09:00", "09:15", "09:30"]);
/// assert_eq!(doubled.values().as_slice(), &[2.0, 4.0, 8.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "L: Serialize, T: TaFloat", deserialize = "L: Deserialize<'de>, T: TaFloat"))
)]
pub struct Labeled<L, T: TaFloat> {
    labels: Vec<L>,
    values: Series<T>,
}

impl<L, T: TaFloat> Labeled<L, T> {
    /// Pair labels with values.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::LengthMismatch`] if there is not exactly one
    /// label per value.
    pub fn new(labels: Vec<L>, values: Series<T>) -> Result<Self> {
        IndicatorError::ensure_len(labels.len(), values.len())?;
        Ok(Self { labels, values })
    }

    /// Row labels.
    #[must_use]
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Values, in label order.
    #[must_use]
    pub fn values(&self) -> &Series<T> {
        &self.values
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(label, value)` rows.
    pub fn iter(&self) -> impl Iterator<Item = (&L, T)> + '_ {
        self.labels.iter().zip(self.values.iter().copied())
    }
}

impl<L: Clone, T: TaFloat> Labeled<L, T> {
    /// Apply a length-preserving function to the values and re-wrap the result
    /// with the same labels.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::LengthMismatch`] if `f` changes the length.
    pub fn lift<F>(&self, f: F) -> Result<Self>
    where
        F: FnOnce(&[T]) -> Series<T>,
    {
        self.rewrap(f(self.values.as_slice()))
    }

    /// Like [`Labeled::lift`] for fallible functions.
    ///
    /// # Errors
    ///
    /// Propagates the error from `f`, or returns
    /// [`IndicatorError::LengthMismatch`] if `f` changes the length.
    pub fn try_lift<F>(&self, f: F) -> Result<Self>
    where
        F: FnOnce(&[T]) -> Result<Series<T>>,
    {
        self.rewrap(f(self.values.as_slice())?)
    }

    fn rewrap(&self, values: Series<T>) -> Result<Self> {
        if values.len() != self.len() {
            tracing::debug!(
                expected = self.len(),
                actual = values.len(),
                "lifted function changed series length"
            );
        }
        Self::new(self.labels.clone(), values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices() -> Labeled<i64, f64> {
        Labeled::new(vec![100, 200, 300], Series::from_vec(vec![1.0, 2.0, 3.0])).unwrap()
    }

    #[test]
    fn test_new_requires_one_label_per_value() {
        let err = Labeled::<i64, f64>::new(vec![1], Series::from_vec(vec![1.0, 2.0])).unwrap_err();
        assert_eq!(
            err,
            IndicatorError::LengthMismatch {
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn test_lift_keeps_labels() {
        let lifted = prices()
            .lift(|v| v.iter().map(|x| x + 1.0).collect())
            .unwrap();
        assert_eq!(lifted.labels(), &[100, 200, 300]);
        assert_eq!(lifted.values().as_slice(), &[2.0, 3.0, 4.0]);
        assert_eq!(
            lifted.iter().map(|(l, v)| (*l, v)).collect::<Vec<_>>(),
            vec![(100, 2.0), (200, 3.0), (300, 4.0)]
        );
    }

    #[test]
    fn test_lift_rejects_length_change() {
        let result = prices().lift(|v| Series::from(&v[1..]));
        assert!(matches!(result, Err(IndicatorError::LengthMismatch { .. })));
    }

    #[test]
    fn test_try_lift_propagates_error() {
        let result = prices().try_lift(|_| Err(IndicatorError::InvalidWindow(0)));
        assert_eq!(result.unwrap_err(), IndicatorError::InvalidWindow(0));
    }
}
