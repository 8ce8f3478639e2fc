//! Numeric type abstractions for technical analysis computations.
//!
//! This module defines the [`TaFloat`] trait which abstracts over `f32` and `f64`
//! so every indicator can be written once and run at either precision.

use num_traits::{Float, FromPrimitive, ToPrimitive};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

/// Serialization bound that only applies when the `serde` feature is enabled.
#[cfg(feature = "serde")]
pub trait MaybeSerde: Serialize + DeserializeOwned {}

#[cfg(feature = "serde")]
impl<T: Serialize + DeserializeOwned> MaybeSerde for T {}

/// Serialization bound that only applies when the `serde` feature is enabled.
#[cfg(not(feature = "serde"))]
pub trait MaybeSerde {}

#[cfg(not(feature = "serde"))]
impl<T> MaybeSerde for T {}

/// Trait for floating-point types used in technical analysis calculations.
///
/// Implemented for `f32` and `f64`. All core functions are generic over it, so
/// callers pick the precision once and every positional argument shares it.
///
/// # Example
///
/// ```rust
/// use ta_core::TaFloat;
///
/// fn percent_change<T: TaFloat>(from: T, to: T) -> T {
///     (to - from) / from * T::HUNDRED
/// }
///
/// assert_eq!(percent_change(50.0f64, 75.0), 50.0);
/// ```
pub trait TaFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + MaybeSerde + 'static
{
    /// Not-a-number value.
    const NAN: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;
    /// Zero value.
    const ZERO: Self;
    /// One half.
    const HALF: Self;
    /// One value.
    const ONE: Self;
    /// Two value.
    const TWO: Self;
    /// Fifty value (neutral RSI).
    const FIFTY: Self;
    /// Hundred value (percentages, RSI scale).
    const HUNDRED: Self;

    /// Convert from `f64`, rounding to the nearest representable value.
    #[must_use]
    fn from_f64_lossy(value: f64) -> Self;

    /// Convert to `f64`.
    #[must_use]
    fn to_f64_lossy(self) -> f64;

    /// Convert from `usize`.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Check if the value is valid (not NaN and not infinite).
    #[must_use]
    fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Maximum of two values where NaN in either operand wins.
    ///
    /// [`Float::max`] ignores NaN; reductions across aligned series need the
    /// missing sample to stay visible instead.
    #[must_use]
    fn nan_max(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() {
            Self::NAN
        } else if other > self {
            other
        } else {
            self
        }
    }

    /// Minimum of two values where NaN in either operand wins.
    #[must_use]
    fn nan_min(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() {
            Self::NAN
        } else if other < self {
            other
        } else {
            self
        }
    }
}

impl TaFloat for f32 {
    const NAN: Self = f32::NAN;
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
    const ZERO: Self = 0.0;
    const HALF: Self = 0.5;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const FIFTY: Self = 50.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f32
    }
}

impl TaFloat for f64 {
    const NAN: Self = f64::NAN;
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
    const ZERO: Self = 0.0;
    const HALF: Self = 0.5;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const FIFTY: Self = 50.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f64
    }
}
