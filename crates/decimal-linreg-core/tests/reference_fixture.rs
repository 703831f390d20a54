use approx::assert_abs_diff_eq;
use decimal_linreg_core::{LeastSquares, Point};

const TOLERANCE: f64 = 1e-4;

const X: [f64; 18] = [
    0.0, 0.5, 1.3, 1.9, 0.5, 0.4, 0.1, 0.0, 0.2, 0.2, 0.0, 0.0, 0.0, 0.0, 1.2, 0.8, 0.0, 0.5,
];

const Y: [f64; 18] = [
    201868.1605,
    475056.2663,
    468251.4275,
    467885.0131,
    373297.7536,
    387378.5355,
    476129.337,
    503034.6228,
    467649.461,
    499841.583,
    479034.4797,
    426009.0819,
    409965.3658,
    520701.0312,
    486729.1821,
    531955.1877,
    530280.1505,
    505206.9367,
];

fn fixture() -> LeastSquares {
    LeastSquares::new(&X, &Y).unwrap()
}

fn assert_series_eq(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(*a, *e, epsilon = TOLERANCE);
    }
}

#[test]
fn test_fitted_scalars() {
    let fit = fixture();

    assert_abs_diff_eq!(fit.slope(), 21974.1227, epsilon = TOLERANCE);
    assert_abs_diff_eq!(fit.intercept(), 446848.3469, epsilon = TOLERANCE);
    assert_abs_diff_eq!(fit.r_squared(), 0.0240439, epsilon = TOLERANCE);
    assert_abs_diff_eq!(fit.mean_y(), 456126.309772, epsilon = TOLERANCE);

    let summary = fit.summary();
    assert_eq!(summary.n_observations, 18);
    assert_eq!(summary.slope, fit.slope());
}

#[test]
fn test_differences() {
    let expected = [
        -244980.1864,
        17220.8581,
        -7163.278864,
        -20714.16688,
        -84537.6546,
        -68259.46043,
        27083.57788,
        56186.27595,
        16406.28961,
        48598.41161,
        32186.13285,
        -20839.26495,
        -36882.98105,
        73852.68435,
        13511.88801,
        67527.54269,
        83431.80365,
        47371.5285,
    ];

    assert_series_eq(fixture().differences_from_regression_line(), &expected);
}

#[test]
fn test_cumulative_sum_of_differences() {
    let expected = [
        -244980.1864,
        -227759.3283,
        -234922.6071,
        -255636.774,
        -340174.4286,
        -408433.889,
        -381350.3112,
        -325164.0352,
        -308757.7456,
        -260159.334,
        -227973.2012,
        -248812.4661,
        -285695.4472,
        -211842.7628,
        -198330.8748,
        -130803.3321,
        -47371.5285,
        5.82E-10,
    ];

    assert_series_eq(
        fixture().cumulative_sum_of_differences_from_regression_line(),
        &expected,
    );
}

#[test]
fn test_regression_line_points() {
    let expected = [
        (0.0, 446848.3468),
        (0.1117, 449304.2782),
        (0.2235, 451760.2095),
        (0.3352, 454216.1409),
        (0.4470, 456672.0722),
        (0.5588, 459128.0036),
        (0.6705, 461583.9350),
        (0.7823, 464039.8663),
        (0.8941, 466495.7977),
        (1.0058, 468951.7290),
        (1.1176, 471407.6604),
        (1.2294, 473863.5918),
        (1.3411, 476319.5231),
        (1.4529, 478775.4545),
        (1.5647, 481231.3859),
        (1.6764, 483687.3172),
        (1.7882, 486143.2486),
        (1.9, 488599.1799),
    ];

    let fit = fixture();
    let points = fit.regression_line_points();
    assert_eq!(points.len(), expected.len());
    for (p, &(x, y)) in points.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(p.x(), x, epsilon = TOLERANCE);
        assert_abs_diff_eq!(p.y(), y, epsilon = TOLERANCE);
    }
    assert_eq!(points[0], Point::new(0.0, fit.intercept()));
}

const PREDICTION_X: [f64; 10] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
const PREDICTION_Y: [f64; 10] = [
    449045.759124,
    451243.171394,
    453440.583664,
    455637.995934,
    457835.408204,
    460032.820474,
    462230.232744,
    464427.645014,
    466625.057284,
    468822.469554,
];

#[test]
fn test_predicted_x_values() {
    let fit = fixture();
    let predicted: Vec<f64> = PREDICTION_Y.iter().map(|&y| fit.predict_x(y)).collect();

    assert_series_eq(&predicted, &PREDICTION_X);
}

#[test]
fn test_predicted_y_values() {
    let fit = fixture();
    let predicted: Vec<f64> = PREDICTION_X.iter().map(|&x| fit.predict_y(x)).collect();

    assert_series_eq(&predicted, &PREDICTION_Y);
}
