//! Common test utilities for ta-charts.
//!
//! Float comparison helpers and a streaming-versus-batch check shared by the
//! end-to-end tests.

#![allow(dead_code)]

/// Float comparison with tolerance.
///
/// - NaN matches only NaN
/// - Near zero (|expected| < 1e-10): absolute tolerance
/// - Otherwise: relative tolerance
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    if expected.is_nan() {
        assert!(actual.is_nan(), "{context}: expected NaN but got {actual}");
        return;
    }

    assert!(!actual.is_nan(), "{context}: got NaN but expected {expected}");

    if expected.abs() < 1e-10 {
        let diff = (actual - expected).abs();
        assert!(
            diff < epsilon,
            "{context}: expected {expected} but got {actual} (diff: {diff})"
        );
        return;
    }

    let rel_diff = ((actual - expected) / expected).abs();
    assert!(
        rel_diff < epsilon,
        "{context}: expected {expected} but got {actual} (rel diff: {rel_diff:.2e})"
    );
}

/// Assert two series are equal with tolerance.
pub fn assert_series_eq(actual: &[f64], expected: &[f64], epsilon: f64, name: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{name}: length mismatch: {} vs {}",
        actual.len(),
        expected.len()
    );

    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert_float_eq(a, e, epsilon, &format!("{name}[{i}]"));
    }
}

/// Check that streaming updates reproduce the batch series once ready.
#[macro_export]
macro_rules! assert_streaming_matches_batch {
    ($indicator:ty, $config:expr, $ohlcv:expr) => {{
        use ta_charts::prelude::{Indicator, StreamingIndicator};

        let ohlcv = $ohlcv;
        let batch = <$indicator>::new($config.clone()).calculate(ohlcv).unwrap();
        let mut streaming = <$indicator>::new($config);

        for (i, bar) in ohlcv.iter().enumerate() {
            if let Some(value) = streaming.update(&bar).unwrap() {
                $crate::common::assert_float_eq(value, batch[i], 1e-10, &format!("streaming[{i}]"));
            }
        }
        assert!(streaming.is_ready());
    }};
}
