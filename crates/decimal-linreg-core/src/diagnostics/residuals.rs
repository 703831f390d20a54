//! Residual computation for a fitted regression line

use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::errors::{StatsError, StatsResult};

/// Compute raw residuals `e = y - (intercept + slope * x)` in decimal arithmetic
///
/// # Arguments
/// * `x` - Predictor values
/// * `y` - Observed responses (same length as `x`)
/// * `slope` - Fitted slope
/// * `intercept` - Fitted intercept
pub fn compute_residuals(
    x: &[BigDecimal],
    y: &[BigDecimal],
    slope: &BigDecimal,
    intercept: &BigDecimal,
) -> StatsResult<Vec<BigDecimal>> {
    if x.len() != y.len() {
        return Err(StatsError::DimensionMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }

    let residuals = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| {
            let fitted = if slope.is_zero() {
                intercept.clone()
            } else {
                intercept + &(slope * xi)
            };
            yi - &fitted
        })
        .collect();

    Ok(residuals)
}

/// Running total of residuals: `c[0] = e[0]`, `c[i] = c[i-1] + e[i]`
pub fn cumulative_sum(residuals: &[BigDecimal]) -> Vec<BigDecimal> {
    let mut total = BigDecimal::zero();
    residuals
        .iter()
        .map(|e| {
            total += e;
            total.clone()
        })
        .collect()
}
