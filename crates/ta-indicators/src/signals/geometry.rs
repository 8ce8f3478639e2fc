//! Segment intersection and the area enclosed between two curves.

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
};

/// Crossing point of two segments spanning one unit time step.
///
/// Segment A runs from `a0` to `a1` and segment B from `b0` to `b1`. Returns
/// `(x, y)` where `x` is the fractional time of the crossing (it may fall
/// outside `[0, 1]` when the lines meet beyond the step) and `y` is the value
/// there:
///
/// `x = (a0 - b0) / ((b1 - b0) - (a1 - a0))`, `y = (b1 - b0) * x + b0`.
///
/// Coincident segments meet everywhere; `(0, a0)` is returned.
///
/// # Errors
///
/// Returns [`IndicatorError::DivisionByZero`] if the segments are parallel
/// and distinct.
///
/// # Example
///
/// ```rust
/// use ta_indicators::signals::intersection;
///
/// let (x, y) = intersection(0.0f64, 1.0, 2.0, 2.0).unwrap();
/// assert_eq!((x, y), (2.0, 2.0));
/// ```
pub fn intersection<T: TaFloat>(a0: T, a1: T, b0: T, b1: T) -> Result<(T, T)> {
    let a_slope = a1 - a0;
    let b_slope = b1 - b0;
    let denominator = b_slope - a_slope;

    if denominator == T::ZERO {
        if a0 == b0 {
            return Ok((T::ZERO, a0));
        }
        tracing::debug!(
            a0 = a0.to_f64_lossy(),
            b0 = b0.to_f64_lossy(),
            "parallel segments never intersect"
        );
        return Err(IndicatorError::DivisionByZero("parallel segments"));
    }

    let x = (a0 - b0) / denominator;
    Ok((x, b_slope * x + b0))
}

/// Approximate area enclosed between `line1` and `line2`.
///
/// Over each adjacent pair of differences `d = line1 - line2`, adds the
/// triangle `|d[i+1] - d[i]| / 2` and the rectangle `min(d[i], d[i+1])`.
/// The differences are signed, so stretches where `line2` is above
/// contribute negatively through the rectangle term. Fewer than two points
/// enclose no area.
///
/// # Errors
///
/// Returns [`IndicatorError::LengthMismatch`] if the lines differ in length.
///
/// # Example
///
/// ```rust
/// use ta_indicators::signals::area_between;
///
/// let area = area_between(&[2.0f64, 4.0], &[1.0, 1.0]).unwrap();
/// assert_eq!(area, 2.0);
/// ```
pub fn area_between<T: TaFloat>(line1: &[T], line2: &[T]) -> Result<T> {
    IndicatorError::ensure_len(line1.len(), line2.len())?;

    let diff: Vec<T> = line1.iter().zip(line2).map(|(&a, &b)| a - b).collect();

    Ok(diff.windows(2).fold(T::ZERO, |area, pair| {
        let triangle = (pair[1] - pair[0]).abs() * T::HALF;
        let rectangle = pair[0].min(pair[1]);
        area + triangle + rectangle
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_intersection_horizontal_line() {
        let (x, y) = intersection(0.0f64, 1.0, 2.0, 2.0).unwrap();
        // both segment equations hold at x
        assert_relative_eq!(0.0 + (1.0 - 0.0) * x, y);
        assert_relative_eq!(2.0 + (2.0 - 2.0) * x, y);
        assert_relative_eq!(x, 2.0);
    }

    #[test]
    fn test_intersection_within_step() {
        let (x, y) = intersection(0.0f64, 2.0, 2.0, 0.0).unwrap();
        assert_relative_eq!(x, 0.5);
        assert_relative_eq!(y, 1.0);
    }

    #[test]
    fn test_intersection_parallel() {
        assert_eq!(
            intersection(0.0f64, 1.0, 2.0, 3.0).unwrap_err(),
            IndicatorError::DivisionByZero("parallel segments")
        );
        assert_eq!(intersection(1.0f64, 2.0, 1.0, 2.0).unwrap(), (0.0, 1.0));
    }

    #[test]
    fn test_area_between_trapezoid() {
        // d = [1, 3, 2]: (1 + 1) + (0.5 + 2)
        let area = area_between(&[2.0f64, 4.0, 3.0], &[1.0, 1.0, 1.0]).unwrap();
        assert_relative_eq!(area, 4.5);
    }

    #[test]
    fn test_area_between_identical_lines() {
        let line = [1.0f64, 5.0, 2.0];
        assert_eq!(area_between(&line, &line).unwrap(), 0.0);
    }

    #[test]
    fn test_area_between_short_and_mismatched() {
        assert_eq!(area_between::<f64>(&[], &[]).unwrap(), 0.0);
        assert_eq!(area_between(&[3.0f64], &[1.0]).unwrap(), 0.0);
        assert!(area_between(&[1.0f64, 2.0], &[1.0]).is_err());
    }
}
