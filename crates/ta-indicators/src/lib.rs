//! # ta-indicators
//!
//! Technical indicators for the ta-charts library.
//!
//! Every indicator ships as a free function over slices plus a config-driven
//! struct implementing [`ta_core::Indicator`] (and, where a recurrence exists,
//! [`ta_core::StreamingIndicator`]). The indicators are organized into:
//!
//! - **Trend**: SMA (any rolling aggregate), EMA, MACD
//! - **Momentum**: ROC, RSI
//! - **Volatility**: ATR, rolling standard deviation
//! - **Signals**: crossovers, segment intersection, area between curves
//!
//! # Example
//!
//! ```
//! use ta_indicators::prelude::*;
//! use ta_core::prelude::*;
//!
//! // Create an RSI indicator
//! let config = RsiConfig::new(3);
//! let mut rsi = Rsi::<f64>::new(config);
//!
//! // Process bars in streaming mode
//! for close in [100.0, 101.0, 100.5, 102.0, 101.5] {
//!     let bar = Bar::new(close, close, close, close, 1000.0);
//!     if let Some(value) = rsi.update(&bar).unwrap() {
//!         println!("RSI: {value:.2}");
//!     }
//! }
//! assert!(rsi.is_ready());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod momentum;
pub mod signals;
pub mod trend;
pub mod volatility;

pub mod prelude;

pub use prelude::*;
