//! # ta-charts
//!
//! Technical analysis indicators and candle resampling.
//!
//! This crate re-exports the workspace members:
//!
//! - [`ta_core`] - numeric trait, series, OHLCV tables, errors, rolling primitives
//! - [`ta_indicators`] - moving averages, momentum, volatility and signals
//! - [`ta_transforms`] - candle resampling and grid filling
//!
//! # Example
//!
//! ```
//! use ta_charts::prelude::*;
//!
//! let close = Series::<f64>::from_numeric(&[1, 2, 3, 4, 3, 2, 1, 2, 3, 4, 5, 6, 7, 8]);
//! let result = rsi(close.as_slice(), 3).unwrap();
//! assert_eq!(result[0], 100.0);
//! assert_eq!(result.len(), close.len());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod synthetic;

pub use ta_core;
pub use ta_indicators;
pub use ta_transforms;

/// Everything needed to compute indicators, in one import.
pub mod prelude {
    pub use ta_core::prelude::*;
    pub use ta_indicators::prelude::*;
    pub use ta_transforms::prelude::*;
}
