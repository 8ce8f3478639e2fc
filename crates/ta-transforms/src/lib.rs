//! # ta-transforms
//!
//! Moving data between time grids for the ta-charts library.
//!
//! - [`group_candles`] / [`CandleResampler`]: combine every `k` fine candles
//!   into one coarse candle
//! - [`fill_values`] / [`GridFiller`]: interpolate coarse samples back onto the
//!   fine grid
//!
//! Together they let an indicator computed on coarse candles be plotted or
//! traded against the fine data it was built from.
//!
//! # Example
//!
//! ```
//! use ta_core::prelude::*;
//! use ta_transforms::prelude::*;
//!
//! let fine: OhlcvSeries<f64> = (0..16)
//!     .map(|i| {
//!         let p = 100.0 + (i % 5) as f64;
//!         Bar::new(p, p + 0.5, p - 0.5, p, 1.0)
//!     })
//!     .collect();
//!
//! let coarse = CandleResampler::new(ResampleConfig::new(4)).resample(&fine).unwrap();
//! let trend = ewm_mean(coarse.close().as_slice(), 2).unwrap();
//! let aligned = GridFiller::new(GridFillConfig::new(4))
//!     .fill(trend.as_slice(), fine.len())
//!     .unwrap();
//! assert_eq!(aligned.len(), fine.len());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod fill;
mod resample;

pub mod prelude;

pub use fill::{fill_values, GridFillConfig, GridFiller};
pub use resample::{group_candles, CandleResampler, ResampleConfig};
