//! Prelude for ta-indicators.
//!
//! This module re-exports all commonly used functions, types and traits.

// Momentum indicators
pub use crate::momentum::{roc, rsi, Roc, RocConfig, Rsi, RsiConfig};

// Trend indicators
pub use crate::trend::{
    ema, macd, sma, Ema, EmaConfig, Macd, MacdConfig, MacdOutput, MacdSeries, Sma, SmaConfig,
};

// Volatility indicators
pub use crate::volatility::{atr, sdev, Atr, AtrConfig, Sdev, SdevConfig};

// Signals
pub use crate::signals::{area_between, crossings, crossover, intersection, Crossing, Direction};
