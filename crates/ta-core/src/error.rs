//! Error types for technical analysis operations.
//!
//! Every fallible operation in the library returns [`Result`], carrying an
//! [`IndicatorError`] that describes which precondition was violated.

use thiserror::Error;

/// Result type alias for indicator and transform operations that may fail.
pub type Result<T> = core::result::Result<T, IndicatorError>;

/// Errors that can occur during indicator computation or resampling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IndicatorError {
    /// Not enough data points for the requested operation.
    #[error("Insufficient data: need {required} points, got {actual}")]
    InsufficientData {
        /// Required number of data points.
        required: usize,
        /// Actual number of data points provided.
        actual: usize,
    },

    /// Invalid window, span or interval parameter.
    #[error("Invalid window size: {0} (must be > 0)")]
    InvalidWindow(usize),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {value} (expected {expected})")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Provided value as string.
        value: String,
        /// Description of expected value.
        expected: &'static str,
    },

    /// Series length mismatch in computation.
    #[error("Series length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// Interval ratio does not evenly divide the input.
    #[error("Interval {interval} does not evenly divide {len} rows")]
    IntervalMismatch {
        /// Number of input rows.
        len: usize,
        /// Requested interval ratio.
        interval: usize,
    },

    /// A computation had a zero denominator with no defined result.
    #[error("Division by zero: {0}")]
    DivisionByZero(&'static str),
}

impl IndicatorError {
    /// Check that `actual` has the `expected` length.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::LengthMismatch`] when the lengths differ.
    pub fn ensure_len(expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::LengthMismatch { expected, actual })
        }
    }

    /// Check that a window, span or interval is non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidWindow`] for zero.
    pub fn ensure_window(window: usize) -> Result<()> {
        if window == 0 {
            Err(Self::InvalidWindow(0))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_error_display() {
        let err = IndicatorError::InsufficientData {
            required: 1,
            actual: 0,
        };
        assert_eq!(err.to_string(), "Insufficient data: need 1 points, got 0");

        let err = IndicatorError::InvalidWindow(0);
        assert_eq!(err.to_string(), "Invalid window size: 0 (must be > 0)");

        let err = IndicatorError::InvalidParameter {
            name: "mode",
            value: "avg".to_string(),
            expected: "\"max\" or \"min\"",
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'mode': avg (expected \"max\" or \"min\")"
        );

        let err = IndicatorError::IntervalMismatch {
            len: 10,
            interval: 4,
        };
        assert_eq!(err.to_string(), "Interval 4 does not evenly divide 10 rows");
    }

    #[test]
    fn test_ensure_helpers() {
        assert!(IndicatorError::ensure_len(3, 3).is_ok());
        assert_eq!(
            IndicatorError::ensure_len(3, 2),
            Err(IndicatorError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert!(IndicatorError::ensure_window(1).is_ok());
        assert_eq!(
            IndicatorError::ensure_window(0),
            Err(IndicatorError::InvalidWindow(0))
        );
    }
}
