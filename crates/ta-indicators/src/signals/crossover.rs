//! Crossover detection between two aligned series.

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side `a` moved to relative to `b` at a crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// `a` crossed above `b`.
    Above,
    /// `a` crossed to or below `b`.
    Below,
}

/// A single crossing of two series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Crossing {
    /// Index of the first sample on the new side.
    pub index: usize,
    /// Side `a` is on from `index` onwards.
    pub direction: Direction,
}

/// Every index where `a[i] > b[i]` differs from `a[i - 1] > b[i - 1]`.
///
/// Index 0 is never reported. Comparisons involving NaN count as "not
/// greater". The returned indices are strictly increasing.
///
/// # Errors
///
/// Returns [`IndicatorError::LengthMismatch`] if the series differ in length.
///
/// # Example
///
/// ```rust
/// use ta_indicators::signals::crossover;
///
/// let fast = [1.0f64, 3.0, 4.0, 2.0];
/// let slow = [2.0f64, 2.0, 3.0, 3.0];
/// assert_eq!(crossover(&fast, &slow).unwrap(), vec![1, 3]);
/// ```
pub fn crossover<T: TaFloat>(a: &[T], b: &[T]) -> Result<Vec<usize>> {
    Ok(crossings(a, b)?.into_iter().map(|c| c.index).collect())
}

/// Like [`crossover`], also reporting which way each crossing went.
///
/// # Errors
///
/// Returns [`IndicatorError::LengthMismatch`] if the series differ in length.
pub fn crossings<T: TaFloat>(a: &[T], b: &[T]) -> Result<Vec<Crossing>> {
    IndicatorError::ensure_len(a.len(), b.len())?;

    let above: Vec<bool> = a.iter().zip(b).map(|(x, y)| x > y).collect();

    Ok(above
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] != pair[1])
        .map(|(i, pair)| Crossing {
            index: i + 1,
            direction: if pair[1] {
                Direction::Above
            } else {
                Direction::Below
            },
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossover_indices() {
        let a = [1.0f64, 2.0, 3.0, 4.0, 3.0, 2.0, 1.0];
        let b = [2.5f64; 7];
        assert_eq!(crossover(&a, &b).unwrap(), vec![2, 5]);
    }

    #[test]
    fn test_crossover_directions() {
        let a = [1.0f64, 2.0, 3.0, 4.0, 3.0, 2.0, 1.0];
        let b = [2.5f64; 7];
        let result = crossings(&a, &b).unwrap();
        assert_eq!(
            result,
            vec![
                Crossing {
                    index: 2,
                    direction: Direction::Above
                },
                Crossing {
                    index: 5,
                    direction: Direction::Below
                },
            ]
        );
    }

    #[test]
    fn test_crossover_self_is_empty() {
        let a = [1.0f64, 5.0, 2.0, 8.0];
        assert!(crossover(&a, &a).unwrap().is_empty());
    }

    #[test]
    fn test_crossover_touch_counts_as_not_above() {
        // equal values are "not greater", so touching from above is a crossing
        let a = [3.0f64, 2.0, 3.0];
        let b = [2.0f64, 2.0, 2.0];
        assert_eq!(crossover(&a, &b).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_crossover_nan_is_not_above() {
        let a = [3.0f64, f64::NAN, 3.0];
        let b = [2.0f64, 2.0, 2.0];
        assert_eq!(crossover(&a, &b).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_crossover_short_and_mismatched() {
        assert!(crossover::<f64>(&[], &[]).unwrap().is_empty());
        assert!(crossover(&[1.0f64], &[0.0]).unwrap().is_empty());
        assert_eq!(
            crossover(&[1.0f64, 2.0], &[1.0]).unwrap_err(),
            IndicatorError::LengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }
}
