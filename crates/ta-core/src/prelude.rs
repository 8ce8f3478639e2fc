//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use ta_core::prelude::*;
//!
//! let series: Series<f64> = Series::new();
//! let bar = Bar::new(100.0, 105.0, 98.0, 103.0, 1_000_000.0);
//! ```

// Core types
pub use crate::labeled::Labeled;
pub use crate::num::TaFloat;
pub use crate::ohlcv::{Bar, OhlcvSeries};
pub use crate::series::Series;
pub use crate::window::{RingBuffer, RollingStat};

// Error types
pub use crate::error::{IndicatorError, Result};

// Traits
pub use crate::traits::{Indicator, StreamingIndicator};

// Utility functions
pub use crate::utils::{ewm_mean, maxmin, rolling, true_range, Ewm, ReduceMode};
