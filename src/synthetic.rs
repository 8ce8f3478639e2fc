//! Deterministic synthetic price data.
//!
//! Used by the benchmark binary and the end-to-end tests; the same seed always
//! produces the same table.

use ta_core::{Bar, OhlcvSeries};

/// Random walk of close prices driven by a 64-bit LCG.
///
/// Prices are floored at 0.01 so they stay positive.
pub fn random_walk(start: f64, volatility: f64, len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let mut next_unit = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        // top 53 bits -> [-1, 1)
        ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
    };

    let mut price = start;
    (0..len)
        .map(|i| {
            if i > 0 {
                price = (price + next_unit() * volatility).max(0.01);
            }
            price
        })
        .collect()
}

/// Build an OHLCV table around `close`.
///
/// Each bar opens at the previous close, extends `range_pct` of the close
/// beyond the body on both sides, and is stamped `step_secs` after the one
/// before it starting at `start_ts`.
pub fn ohlcv_from_close(close: &[f64], range_pct: f64, start_ts: i64, step_secs: i64) -> OhlcvSeries<f64> {
    close
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let open = if i == 0 { c } else { close[i - 1] };
            let range = c * range_pct;
            Bar::new(
                open,
                c.max(open) + range * 0.5,
                c.min(open) - range * 0.5,
                c,
                1_000.0 + 100.0 * (i % 50) as f64,
            )
            .timestamp(start_ts + step_secs * i as i64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_walk_deterministic() {
        let a = random_walk(100.0, 1.0, 50, 12345);
        let b = random_walk(100.0, 1.0, 50, 12345);
        assert_eq!(a, b);
        assert_eq!(a[0], 100.0);
        assert!(a.iter().all(|&p| p >= 0.01));
        assert_ne!(a, random_walk(100.0, 1.0, 50, 54321));
    }

    #[test]
    fn test_ohlcv_from_close_shape() {
        let close = random_walk(50.0, 0.5, 20, 7);
        let ohlcv = ohlcv_from_close(&close, 0.02, 1_000, 60);

        assert_eq!(ohlcv.len(), 20);
        assert_eq!(ohlcv.close().as_slice(), close.as_slice());
        assert_eq!(ohlcv.timestamps().unwrap()[19], 1_000 + 60 * 19);
        for bar in ohlcv.iter() {
            assert!(bar.is_valid());
        }
    }
}
