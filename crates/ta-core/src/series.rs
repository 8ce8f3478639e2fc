//! Time series data container.
//!
//! The [`Series`] type is the ordered, position-indexed sequence of samples that
//! every indicator consumes and produces.

use core::ops::Index;

use num_traits::ToPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::num::TaFloat;

/// A contiguous time series of floating-point values.
///
/// Indicator outputs are freshly allocated `Series` values aligned
/// index-for-index with their input; inputs are never mutated.
///
/// # Example
///
/// ```rust
/// use ta_core::Series;
///
/// let mut series: Series<f64> = Series::new();
/// series.push(100.0);
/// series.push(101.5);
/// series.push(99.8);
///
/// assert_eq!(series.len(), 3);
/// assert_eq!(series[0], 100.0);
/// assert_eq!(series.last(), Some(&99.8));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct Series<T: TaFloat> {
    data: Vec<T>,
}

impl<T: TaFloat> Default for Series<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TaFloat> Series<T> {
    /// Create a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a new series with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a series from an existing vector.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Create a series by converting any primitive numeric slice.
    ///
    /// Integers passed where floats are expected are normalized here, so the
    /// indicator functions only ever see one numeric type. Values that cannot
    /// be represented become NaN.
    ///
    /// ```rust
    /// use ta_core::Series;
    ///
    /// let series: Series<f64> = Series::from_numeric(&[1_i64, 2, 3]);
    /// assert_eq!(series.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    #[must_use]
    pub fn from_numeric<N: ToPrimitive>(data: &[N]) -> Self {
        data.iter()
            .map(|x| x.to_f64().map_or(T::NAN, T::from_f64_lossy))
            .collect()
    }

    /// Returns the number of elements in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the series contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append a value to the end of the series.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Get the value at the given index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Get the first value, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Get the last value, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Returns an iterator over the values.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the series and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Apply a function to each element.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        self.data.iter().map(|&x| f(x)).collect()
    }

    /// Combine two aligned series element by element.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::LengthMismatch`] if the lengths differ.
    pub fn zip_with<F>(&self, other: &[T], f: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        IndicatorError::ensure_len(self.len(), other.len())?;
        Ok(self
            .data
            .iter()
            .zip(other)
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    /// Count the number of NaN values.
    #[must_use]
    pub fn nan_count(&self) -> usize {
        self.data.iter().filter(|x| x.is_nan()).count()
    }
}

impl<T: TaFloat> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: TaFloat> AsRef<[T]> for Series<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: TaFloat> FromIterator<T> for Series<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: TaFloat> IntoIterator for Series<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: TaFloat> IntoIterator for &'a Series<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: TaFloat> From<Vec<T>> for Series<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: TaFloat> From<&[T]> for Series<T> {
    fn from(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}
