//! Simple least-squares linear regression in decimal arithmetic
//!
//! Sums of squares over large-magnitude samples lose most of their
//! significant digits in `f64`, so every accumulation and division happens
//! on `BigDecimal` and values are narrowed to `f64` only when returned.

use std::sync::OnceLock;

use bigdecimal::BigDecimal;
use num_traits::{One, Signed, Zero};

use crate::decimal;
use crate::diagnostics::{compute_residuals, cumulative_sum};
use crate::errors::{StatsError, StatsResult};
use crate::types::{FitSummary, Point, RegressionOptions};

/// Slope, intercept and R² plus the sums later derivations reuse
#[derive(Debug, Clone)]
struct FittedModel {
    y_sum: BigDecimal,
    slope: BigDecimal,
    intercept: BigDecimal,
    r_squared: BigDecimal,
}

impl FittedModel {
    fn empty() -> Self {
        Self {
            y_sum: BigDecimal::zero(),
            slope: BigDecimal::zero(),
            intercept: BigDecimal::zero(),
            r_squared: BigDecimal::zero(),
        }
    }

    fn fit(x: &[BigDecimal], y: &[BigDecimal], scale: i64) -> Self {
        let n_obs = x.len();
        if n_obs == 0 {
            return Self::empty();
        }

        let mut x_sum = BigDecimal::zero();
        let mut y_sum = BigDecimal::zero();
        let mut xx_sum = BigDecimal::zero();
        let mut yy_sum = BigDecimal::zero();
        let mut xy_sum = BigDecimal::zero();

        for (xi, yi) in x.iter().zip(y) {
            x_sum += xi;
            y_sum += yi;
            xx_sum += xi * xi;
            yy_sum += yi * yi;
            xy_sum += xi * yi;
        }

        let n = BigDecimal::from(n_obs as u64);

        // n*Σxy - Σx*Σy, shared by the slope and r
        let slope_numerator = &n * &xy_sum - &x_sum * &y_sum;
        let x_spread = &n * &xx_sum - &x_sum * &x_sum;
        let y_spread = &n * &yy_sum - &y_sum * &y_sum;

        // all x equal: horizontal line through mean(y)
        let slope = if x_spread.is_positive() {
            decimal::div(&slope_numerator, &x_spread, scale)
        } else {
            BigDecimal::zero()
        };

        let x_contribution = &slope * &x_sum;
        let intercept = decimal::div(&(&y_sum - &x_contribution), &n, scale);

        let spread_product = &x_spread * &y_spread;
        let r_denominator = if spread_product.is_positive() {
            spread_product
                .sqrt()
                .map(|root| decimal::round(&root, scale))
                .unwrap_or_else(BigDecimal::zero)
        } else {
            BigDecimal::zero()
        };

        let r = if r_denominator.is_positive() {
            decimal::div(&slope_numerator, &r_denominator, scale)
                .abs()
                .min(BigDecimal::one())
        } else {
            BigDecimal::zero()
        };
        let r_squared = decimal::round(&(&r * &r), scale);

        Self {
            y_sum,
            slope,
            intercept,
            r_squared,
        }
    }

    fn predict(&self, x: &BigDecimal) -> BigDecimal {
        if self.slope.is_zero() {
            return self.intercept.clone();
        }
        &self.intercept + &(&self.slope * x)
    }
}

/// Ordinary least-squares fit of `y = intercept + slope * x`
///
/// The line is fitted eagerly on construction. Residuals, their running sum
/// and the sampled line points are computed on first access and cached until
/// [`LeastSquares::append`] changes the data.
///
/// # Example
/// ```
/// use decimal_linreg_core::LeastSquares;
///
/// let fit = LeastSquares::new(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]).unwrap();
/// assert!((fit.slope() - 2.0).abs() < 1e-12);
/// assert!((fit.predict_y(4.0) - 9.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LeastSquares {
    x: Vec<f64>,
    y: Vec<f64>,
    x_dec: Vec<BigDecimal>,
    y_dec: Vec<BigDecimal>,
    options: RegressionOptions,
    model: FittedModel,
    residuals: OnceLock<Vec<BigDecimal>>,
    differences: OnceLock<Vec<f64>>,
    cumulative: OnceLock<Vec<f64>>,
    line_points: OnceLock<Vec<Point>>,
}

impl LeastSquares {
    /// Fit a regression line with default options
    ///
    /// # Errors
    /// * `SeriesLengthMismatch` if `x` and `y` differ in length
    /// * `NonFiniteValue` if either series holds NaN or an infinity
    pub fn new(x: &[f64], y: &[f64]) -> StatsResult<Self> {
        Self::with_options(x, y, &RegressionOptions::default())
    }

    /// Fit a regression line with explicit options
    ///
    /// Two empty series are accepted and give an all-zero line.
    pub fn with_options(x: &[f64], y: &[f64], options: &RegressionOptions) -> StatsResult<Self> {
        options.validate()?;
        let (x_dec, y_dec) = convert_pair(x, y)?;
        let model = FittedModel::fit(&x_dec, &y_dec, options.scale);

        let fit = Self {
            x: x.to_vec(),
            y: y.to_vec(),
            x_dec,
            y_dec,
            options: options.clone(),
            model,
            residuals: OnceLock::new(),
            differences: OnceLock::new(),
            cumulative: OnceLock::new(),
            line_points: OnceLock::new(),
        };
        fit.log_model();
        Ok(fit)
    }

    /// Concatenate more observations and refit
    ///
    /// The new pair is validated before anything changes, so on error the
    /// existing fit is left as it was.
    pub fn append(&mut self, x: &[f64], y: &[f64]) -> StatsResult<()> {
        let (x_dec, y_dec) = convert_pair(x, y)?;

        self.x.extend_from_slice(x);
        self.y.extend_from_slice(y);
        self.x_dec.extend(x_dec);
        self.y_dec.extend(y_dec);
        self.model = FittedModel::fit(&self.x_dec, &self.y_dec, self.options.scale);

        self.residuals.take();
        self.differences.take();
        self.cumulative.take();
        self.line_points.take();

        self.log_model();
        Ok(())
    }

    /// The amount of increase in y for an increase of 1 in x
    pub fn slope(&self) -> f64 {
        decimal::to_f64(&self.model.slope)
    }

    /// The value at which the regression line crosses the y axis
    pub fn intercept(&self) -> f64 {
        decimal::to_f64(&self.model.intercept)
    }

    /// Coefficient of determination, always in [0, 1]
    ///
    /// 1 means every point lies on the line; 0 means x accounts for none of
    /// the variation in y (including the degenerate case of constant x).
    pub fn r_squared(&self) -> f64 {
        decimal::to_f64(&self.model.r_squared)
    }

    /// Mean of the y series, 0 when empty
    pub fn mean_y(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let n = BigDecimal::from(self.len() as u64);
        decimal::to_f64(&decimal::div(&self.model.y_sum, &n, self.options.scale))
    }

    /// y on the regression line at `x`
    pub fn predict_y(&self, x: f64) -> f64 {
        if self.model.slope.is_zero() {
            return decimal::to_f64(&self.model.intercept);
        }
        match decimal::from_f64(x) {
            Some(x) => decimal::to_f64(&self.model.predict(&x)),
            None => f64::NAN,
        }
    }

    /// x on the regression line at `y`
    ///
    /// A horizontal line has no inverse; by convention this returns 0 when
    /// the slope is exactly zero.
    pub fn predict_x(&self, y: f64) -> f64 {
        if self.model.slope.is_zero() {
            return 0.0;
        }
        match decimal::from_f64(y) {
            Some(y) => {
                let rise = &y - &self.model.intercept;
                decimal::to_f64(&decimal::div(&rise, &self.model.slope, self.options.scale))
            }
            None => f64::NAN,
        }
    }

    /// Differences of the observed y values from the regression line
    pub fn differences_from_regression_line(&self) -> &[f64] {
        self.differences
            .get_or_init(|| self.decimal_residuals().iter().map(decimal::to_f64).collect())
    }

    /// Running sum of [`LeastSquares::differences_from_regression_line`]
    pub fn cumulative_sum_of_differences_from_regression_line(&self) -> &[f64] {
        self.cumulative.get_or_init(|| {
            cumulative_sum(self.decimal_residuals())
                .iter()
                .map(decimal::to_f64)
                .collect()
        })
    }

    /// `n` evenly spaced points along the line from `min(x)` to `max(x)`
    pub fn regression_line_points(&self) -> &[Point] {
        self.line_points.get_or_init(|| self.sample_line())
    }

    pub fn summary(&self) -> FitSummary {
        FitSummary {
            slope: self.slope(),
            intercept: self.intercept(),
            r_squared: self.r_squared(),
            mean_y: self.mean_y(),
            n_observations: self.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x_values(&self) -> &[f64] {
        &self.x
    }

    pub fn y_values(&self) -> &[f64] {
        &self.y
    }

    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }

    fn decimal_residuals(&self) -> &[BigDecimal] {
        self.residuals.get_or_init(|| {
            log::trace!("computing residuals for {} observations", self.len());
            // lengths are checked on construction and append
            compute_residuals(
                &self.x_dec,
                &self.y_dec,
                &self.model.slope,
                &self.model.intercept,
            )
            .unwrap_or_default()
        })
    }

    fn sample_line(&self) -> Vec<Point> {
        let (Some(min_x), Some(max_x)) = (self.x_dec.iter().min(), self.x_dec.iter().max()) else {
            return Vec::new();
        };

        let n_obs = self.len();
        log::trace!("sampling {} regression line points", n_obs);

        let step = if n_obs > 1 {
            let intervals = BigDecimal::from((n_obs - 1) as u64);
            decimal::div(&(max_x - min_x), &intervals, self.options.scale)
        } else {
            BigDecimal::zero()
        };

        (0..n_obs)
            .map(|i| {
                let xi = min_x + &(&step * &BigDecimal::from(i as u64));
                let yi = self.model.predict(&xi);
                Point::new(decimal::to_f64(&xi), decimal::to_f64(&yi))
            })
            .collect()
    }

    fn log_model(&self) {
        log::debug!(
            "least squares fit: n={} slope={} intercept={} r_squared={}",
            self.len(),
            self.model.slope,
            self.model.intercept,
            self.model.r_squared
        );
    }
}

/// Validate a series pair and convert both sides to decimal
fn convert_pair(x: &[f64], y: &[f64]) -> StatsResult<(Vec<BigDecimal>, Vec<BigDecimal>)> {
    if x.len() != y.len() {
        return Err(StatsError::SeriesLengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    let x_dec = decimal::from_series(x, "x")?;
    let y_dec = decimal::from_series(y, "y")?;
    Ok((x_dec, y_dec))
}
