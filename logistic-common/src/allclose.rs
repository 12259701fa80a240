use std::fmt::Debug;

use num_traits::float::Float;

/// Panics if two float slices are not close with respect to some absolute tolerance
///
/// Non-finite values are close only to themselves: `NaN` matches `NaN` and an infinity matches
/// the infinity of the same sign.
///
/// # Examples
///
/// ```
/// use logistic_common::all_close;
///
/// all_close(&[0.0, 1.0], &[0.0001, 0.9998], 1e-2);
/// all_close(&[f64::NAN, f64::INFINITY], &[f64::NAN, f64::INFINITY], 1e-12);
/// ```
///
/// ```should_panic
/// use logistic_common::all_close;
///
/// all_close(&[0.0], &[0.0, 1.0], 1e-6);
/// ```
///
/// ```should_panic
/// use logistic_common::all_close;
///
/// all_close(&[1e-3, 1.0], &[0.0, 1.0], 1e-4);
/// ```
pub fn all_close<T>(actual: &[T], desired: &[T], tol: T)
where
    T: Float + Debug,
{
    assert_eq!(actual.len(), desired.len());
    let is_close = actual
        .iter()
        .cloned()
        .zip(desired.iter().cloned())
        .all(|(x, y)| match (x.is_finite(), y.is_finite()) {
            (true, true) => (x - y).abs() < tol,
            _ => (x.is_nan() && y.is_nan()) || x == y,
        });
    assert!(
        is_close,
        "Slices are not close:\n{:?}\n{:?}\n",
        actual, desired
    );
}
