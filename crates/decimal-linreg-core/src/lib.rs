//! decimal-linreg-core: least-squares linear regression in decimal arithmetic
//!
//! Fits `y = intercept + slope * x` over a paired series, accumulating sums
//! with `BigDecimal` so large-magnitude samples keep their precision, and
//! derives residuals, their running sum, the mean of y and sampled points
//! along the fitted line.

pub mod decimal;
pub mod diagnostics;
pub mod errors;
pub mod models;
pub mod types;

pub use bigdecimal::BigDecimal;
pub use errors::{StatsError, StatsResult};
pub use models::LeastSquares;
pub use types::*;
