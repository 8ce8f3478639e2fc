//! Volatility indicators.
//!
//! This module contains volatility indicators:
//! - ATR (Average True Range)
//! - Rolling standard deviation

mod atr;
mod sdev;

pub use atr::{atr, Atr, AtrConfig};
pub use sdev::{sdev, Sdev, SdevConfig};
