use serde::{Deserialize, Serialize};

use crate::errors::{StatsError, StatsResult};

/// Smallest accepted number of fractional digits for decimal rounding
pub const MIN_SCALE: i64 = 16;

/// A coordinate pair, serialized as `{"x": .., "y": ..}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.x = x;
        self
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.y = y;
        self
    }

    pub fn to_pair(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        p.to_pair()
    }
}

/// Options for least-squares fitting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegressionOptions {
    /// Fractional digits kept after every decimal division and square root,
    /// rounded half-up (default: 16, minimum: 16)
    pub scale: i64,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self { scale: MIN_SCALE }
    }
}

impl RegressionOptions {
    pub fn validate(&self) -> StatsResult<()> {
        if self.scale < MIN_SCALE {
            return Err(StatsError::InvalidScale(self.scale));
        }
        Ok(())
    }
}

/// Scalar outputs of a fitted regression line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSummary {
    /// Increase in y for an increase of 1 in x
    pub slope: f64,
    /// Value at which the line crosses the y axis
    pub intercept: f64,
    /// Coefficient of determination, in [0, 1]
    pub r_squared: f64,
    /// Mean of the y series (0 for an empty series)
    pub mean_y: f64,
    /// Number of observation pairs
    pub n_observations: usize,
}
