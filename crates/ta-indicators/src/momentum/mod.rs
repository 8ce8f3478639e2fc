//! Momentum indicators.
//!
//! This module contains momentum indicators:
//! - ROC (Rate of Change)
//! - RSI (Relative Strength Index)
//!
//! MACD lives under [`crate::trend`] with the moving averages it is built on.

mod roc;
mod rsi;

pub use roc::{roc, Roc, RocConfig};
pub use rsi::{rsi, Rsi, RsiConfig};
