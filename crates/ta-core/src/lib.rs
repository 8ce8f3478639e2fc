//! # ta-core
//!
//! Core types and traits for the ta-charts technical analysis library.
//!
//! This crate provides the foundational abstractions used throughout the library:
//!
//! - [`TaFloat`] - Trait for numeric types (f32/f64)
//! - [`Series`] - Ordered numeric samples
//! - [`Labeled`] - Series paired with row labels
//! - [`Bar`] and [`OhlcvSeries`] - OHLCV price data types
//! - [`RingBuffer`] and [`RollingStat`] - Rolling windows
//! - [`Indicator`] and [`StreamingIndicator`] - Indicator computation traits
//!
//! All computations are pure: inputs are borrowed, results are freshly
//! allocated, and no state is shared between calls.
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use ta_core::prelude::*;
//!
//! let closes: Series<f64> = Series::from_vec(vec![100.0, 101.5, 99.8, 102.3, 101.0]);
//! let mean = rolling(closes.as_slice(), 3, 1, RollingStat::Mean).unwrap();
//! assert_eq!(mean.len(), closes.len());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod labeled;
pub mod num;
pub mod ohlcv;
pub mod prelude;
pub mod series;
pub mod traits;
pub mod utils;
pub mod window;

// Re-export core types at crate root
pub use error::{IndicatorError, Result};
pub use labeled::Labeled;
pub use num::TaFloat;
pub use ohlcv::{Bar, OhlcvSeries};
pub use series::Series;
pub use traits::{Indicator, StreamingIndicator};
pub use window::{RingBuffer, RollingStat};
