//! Conversions between `f64` and `BigDecimal`
//!
//! Inputs enter the decimal domain through their shortest round-trip text
//! form, so `0.1_f64` becomes exactly `0.1` rather than the binary expansion
//! of the nearest double. Results leave it through [`to_f64`].

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{ToPrimitive, Zero};

use crate::errors::{StatsError, StatsResult};

/// Convert a finite `f64` into a `BigDecimal`.
///
/// Returns `None` for NaN and infinities, which have no decimal form.
pub fn from_f64(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    // Display for f64 never uses exponent notation
    BigDecimal::from_str(&value.to_string()).ok()
}

/// Convert a whole series, reporting the first non-finite entry.
pub fn from_series(values: &[f64], series: &'static str) -> StatsResult<Vec<BigDecimal>> {
    values
        .iter()
        .enumerate()
        .map(|(index, &v)| from_f64(v).ok_or(StatsError::NonFiniteValue { series, index }))
        .collect()
}

/// Narrow a decimal back to `f64`.
pub fn to_f64(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Round half-up to `scale` fractional digits.
pub fn round(value: &BigDecimal, scale: i64) -> BigDecimal {
    value.with_scale_round(scale, RoundingMode::HalfUp)
}

/// Divide and round half-up to `scale` fractional digits.
///
/// A zero denominator yields zero.
pub fn div(numerator: &BigDecimal, denominator: &BigDecimal, scale: i64) -> BigDecimal {
    if denominator.is_zero() {
        return BigDecimal::zero();
    }
    round(&(numerator / denominator), scale)
}
