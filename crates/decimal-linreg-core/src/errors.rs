use thiserror::Error;

/// Errors that can occur while fitting a regression line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    // Input validation errors
    #[error("Number of elements in series do not match {x_len}:{y_len}")]
    SeriesLengthMismatch { x_len: usize, y_len: usize },

    #[error("Non-finite value in {series} series at index {index}")]
    NonFiniteValue { series: &'static str, index: usize },

    #[error("Dimension mismatch: expected {expected} elements, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    // Configuration errors
    #[error("Invalid decimal scale: {0} (must be >= {min})", min = crate::types::MIN_SCALE)]
    InvalidScale(i64),
}

/// Result type for regression operations
pub type StatsResult<T> = Result<T, StatsError>;
