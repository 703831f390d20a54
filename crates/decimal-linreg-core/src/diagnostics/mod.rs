//! Diagnostic functions for regression lines

mod residuals;

pub use residuals::{compute_residuals, cumulative_sum};
