//! Prelude for ta-transforms.
//!
//! This module re-exports all commonly used functions and types.

pub use crate::fill::{fill_values, GridFillConfig, GridFiller};
pub use crate::resample::{group_candles, CandleResampler, ResampleConfig};
