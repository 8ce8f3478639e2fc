//! Exponential Moving Average (EMA) indicator.
//!
//! Unadjusted exponential weighting with `alpha = 2 / (span + 1)` and a
//! minimum of one period: the first output equals the first input.

use ta_core::{
    error::Result,
    num::TaFloat,
    ohlcv::{Bar, OhlcvSeries},
    series::Series,
    traits::{Indicator, StreamingIndicator},
    utils::{ewm_mean, Ewm},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exponential moving average of `series`.
///
/// No finite-sample bias correction is applied, so early values differ from
/// an adjusted EMA. Output length equals input length.
///
/// # Errors
///
/// Returns [`ta_core::IndicatorError::InvalidWindow`] if `span` is 0.
///
/// # Example
///
/// ```rust
/// use ta_indicators::trend::ema;
///
/// let result = ema(&[2.0f64, 4.0, 4.0], 3).unwrap();
/// assert_eq!(result.as_slice(), &[2.0, 3.0, 3.5]);
/// ```
pub fn ema<T: TaFloat>(series: &[T], span: usize) -> Result<Series<T>> {
    ewm_mean(series, span)
}

/// Configuration for the EMA indicator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmaConfig {
    /// Span of the exponential weighting.
    pub span: usize,
}

impl Default for EmaConfig {
    fn default() -> Self {
        Self { span: 14 }
    }
}

impl EmaConfig {
    /// Create a new EMA configuration with the given span.
    pub fn new(span: usize) -> Self {
        Self { span }
    }
}

/// Exponential Moving Average indicator over close prices.
#[derive(Debug, Clone)]
pub struct Ema<T: TaFloat> {
    config: EmaConfig,
    ewm: Option<Ewm<T>>,
}

impl<T: TaFloat> Ema<T> {
    /// Feed a raw value rather than a bar.
    ///
    /// # Errors
    ///
    /// Returns [`ta_core::IndicatorError::InvalidWindow`] if the span is 0.
    pub fn update_value(&mut self, value: T) -> Result<T> {
        let mut ewm = match self.ewm {
            Some(ewm) => ewm,
            None => Ewm::new(self.config.span)?,
        };
        let mean = ewm.push(value);
        self.ewm = Some(ewm);
        Ok(mean)
    }
}

impl<T: TaFloat> Indicator<T> for Ema<T> {
    type Output = Series<T>;
    type Config = EmaConfig;

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn new(config: Self::Config) -> Self {
        Self { config, ewm: None }
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn calculate(&self, data: &OhlcvSeries<T>) -> Result<Self::Output> {
        ema(data.close().as_slice(), self.config.span)
    }
}

impl<T: TaFloat> StreamingIndicator<T> for Ema<T> {
    type StreamingOutput = Option<T>;

    fn update(&mut self, bar: &Bar<T>) -> Result<Option<T>> {
        self.update_value(bar.close).map(Some)
    }

    fn current(&self) -> Option<T> {
        self.ewm.map(|ewm| ewm.value()).filter(|v| !v.is_nan())
    }

    fn is_ready(&self) -> bool {
        self.current().is_some()
    }

    fn reset(&mut self) {
        self.ewm = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ta_core::IndicatorError;

    fn create_test_ohlcv(closes: &[f64]) -> OhlcvSeries<f64> {
        closes
            .iter()
            .map(|&c| Bar::new(c, c, c, c, 1000.0))
            .collect()
    }

    #[test]
    fn test_ema_first_value_equals_input() {
        let result = ema(&[42.0f64, 43.0, 41.0], 10).unwrap();
        assert_eq!(result[0], 42.0);
    }

    #[test]
    fn test_ema_recurrence() {
        // span 9 -> alpha 0.2
        let data = [10.0f64, 11.0, 12.0, 11.5, 13.0];
        let result = ema(&data, 9).unwrap();

        let mut expected = data[0];
        for (i, &x) in data.iter().enumerate().skip(1) {
            expected = 0.8 * expected + 0.2 * x;
            assert_relative_eq!(result[i], expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ema_invalid_span() {
        assert_eq!(ema(&[1.0f64], 0).unwrap_err(), IndicatorError::InvalidWindow(0));

        let mut ema = Ema::<f64>::new(EmaConfig::new(0));
        assert!(ema.update_value(1.0).is_err());
    }

    #[test]
    fn test_ema_streaming_equals_batch() {
        let closes = [22.27f64, 22.19, 22.08, 22.17, 22.18, 22.13, 22.23, 22.43, 22.24, 22.29];
        let ohlcv = create_test_ohlcv(&closes);
        let config = EmaConfig::new(5);

        let batch = Ema::<f64>::new(config.clone()).calculate(&ohlcv).unwrap();
        let mut streaming = Ema::<f64>::new(config);
        assert!(!streaming.is_ready());

        for (i, bar) in ohlcv.iter().enumerate() {
            let value = streaming.update(&bar).unwrap().unwrap();
            assert_relative_eq!(value, batch[i], epsilon = 1e-12);
        }
        assert_relative_eq!(streaming.current().unwrap(), batch[9], epsilon = 1e-12);

        streaming.reset();
        assert_eq!(streaming.current(), None);
    }
}
