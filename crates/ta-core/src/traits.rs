//! Core trait definitions for indicators.
//!
//! Every indicator exposes a batch [`Indicator::calculate`] over an OHLCV table;
//! indicators with a natural recurrence also implement [`StreamingIndicator`]
//! to be fed one bar at a time.

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;
use crate::num::TaFloat;
use crate::ohlcv::{Bar, OhlcvSeries};

/// Configuration trait bounds for indicator configurations.
#[cfg(feature = "serde")]
pub trait IndicatorConfig: Clone + Default + Serialize + DeserializeOwned + Send + Sync {}

/// Configuration trait bounds for indicator configurations.
#[cfg(not(feature = "serde"))]
pub trait IndicatorConfig: Clone + Default + Send + Sync {}

#[cfg(feature = "serde")]
impl<T> IndicatorConfig for T where T: Clone + Default + Serialize + DeserializeOwned + Send + Sync {}

#[cfg(not(feature = "serde"))]
impl<T> IndicatorConfig for T where T: Clone + Default + Send + Sync {}

/// Core trait for technical indicators.
///
/// # Associated Types
///
/// - `Output` - The type returned by batch calculation
/// - `Config` - Parameters (window, span, ...), with defaults
///
/// # Example Implementation
///
/// ```rust,ignore
/// use ta_core::{Indicator, OhlcvSeries, Result, Series, TaFloat};
///
/// struct Sma<T: TaFloat> {
///     config: SmaConfig,
///     _marker: PhantomData<T>,
/// }
///
/// impl<T: TaFloat> Indicator<T> for Sma<T> {
///     type Output = Series<T>;
///     type Config = SmaConfig;
///
///     fn new(config: Self::Config) -> Self { /* ... */ }
///     fn min_periods(&self) -> usize { 1 }
///     fn calculate(&self, data: &OhlcvSeries<T>) -> Result<Self::Output> { /* ... */ }
///     fn config(&self) -> &Self::Config { &self.config }
/// }
/// ```
pub trait Indicator<T: TaFloat>: Send + Sync {
    /// The output type of calculations.
    type Output;

    /// Configuration type for this indicator.
    type Config: IndicatorConfig;

    /// Create a new indicator with the given configuration.
    fn new(config: Self::Config) -> Self;

    /// Number of bars needed before the output is a defined value.
    fn min_periods(&self) -> usize;

    /// Perform batch calculation on an OHLCV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid for the data.
    fn calculate(&self, data: &OhlcvSeries<T>) -> Result<Self::Output>;

    /// Get a reference to the current configuration.
    fn config(&self) -> &Self::Config;
}

/// Extension trait for streaming (incremental) indicator computation.
///
/// Updating with each bar in order yields the same values as
/// [`Indicator::calculate`] over the whole table, from the first bar at which
/// the streaming indicator reports ready.
///
/// # Example
///
/// ```rust,ignore
/// let mut rsi = Rsi::new(RsiConfig::default());
///
/// for bar in bars {
///     if let Some(value) = rsi.update(&bar)? {
///         println!("RSI: {value}");
///     }
/// }
/// ```
pub trait StreamingIndicator<T: TaFloat>: Indicator<T> {
    /// The output type of a single streaming update.
    type StreamingOutput;

    /// Update the indicator with a new bar and return the new output value.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn update(&mut self, bar: &Bar<T>) -> Result<Self::StreamingOutput>;

    /// Get the current indicator value without updating.
    fn current(&self) -> Self::StreamingOutput;

    /// Check if the indicator has received enough data for valid output.
    fn is_ready(&self) -> bool;

    /// Forget all bars seen so far.
    fn reset(&mut self);
}
