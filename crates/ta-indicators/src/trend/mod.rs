//! Trend indicators.
//!
//! This module contains the moving average family and its derivatives:
//! - SMA (Simple Moving Average, any rolling aggregate)
//! - EMA (Exponential Moving Average)
//! - MACD (Moving Average Convergence Divergence)

mod ema;
mod macd;
mod sma;

pub use ema::{ema, Ema, EmaConfig};
pub use macd::{macd, Macd, MacdConfig, MacdOutput, MacdSeries};
pub use sma::{sma, Sma, SmaConfig};
