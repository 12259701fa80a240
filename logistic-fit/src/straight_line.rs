use crate::error::FitError;

use ndarray::{ArrayView1, Zip};

/// Elementary charge, C
pub const ELECTRON_CHARGE: f64 = 1.602e-19;

/// Reference value of the Planck constant, J s
pub const PLANCK_CONSTANT: f64 = 6.626e-34;

/// Ordinary least-squares straight line `y = slope * x + intercept` and the sample moments it is
/// built from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StraightLineFit {
    pub slope: f64,
    pub intercept: f64,
    /// Mean of `x`
    pub ex: f64,
    /// Mean of `y`
    pub ey: f64,
    /// Mean of `x^2`
    pub exx: f64,
    /// Mean of `x * y`
    pub exy: f64,
}

impl StraightLineFit {
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fits a straight line to `(x, y)` points without weights
///
/// `slope = (Exy - Ex Ey) / (Exx - Ex^2)`, `intercept = (Exx Ey - Ex Exy) / (Exx - Ex^2)`
pub fn fit_straight_line(x: &[f64], y: &[f64]) -> Result<StraightLineFit, FitError> {
    if x.is_empty() || y.is_empty() {
        return Err(FitError::EmptyInput);
    }
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    let n = x.len() as f64;
    let (sx, sy, sxx, sxy) = Zip::from(ArrayView1::from(x))
        .and(ArrayView1::from(y))
        .fold((0.0, 0.0, 0.0, 0.0), |(sx, sy, sxx, sxy), &x, &y| {
            (sx + x, sy + y, sxx + x * x, sxy + x * y)
        });
    let (ex, ey, exx, exy) = (sx / n, sy / n, sxx / n, sxy / n);

    let denominator = exx - ex.powi(2);
    if denominator == 0.0 {
        return Err(FitError::ZeroDenominator);
    }
    let slope = (exy - ex * ey) / denominator;
    let intercept = (exx * ey - ex * exy) / denominator;
    Ok(StraightLineFit {
        slope,
        intercept,
        ex,
        ey,
        exx,
        exy,
    })
}

/// Planck constant estimate from the slope of stopping voltage vs light frequency
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanckEstimate {
    /// `slope * e`, J s
    pub h: f64,
    /// Relative deviation from [PLANCK_CONSTANT], percent
    pub relative_error: f64,
}

pub fn planck_constant(slope: f64) -> Result<PlanckEstimate, FitError> {
    if slope.is_nan() || slope <= 0.0 {
        return Err(FitError::NonPositiveSlope(slope));
    }
    let h = slope * ELECTRON_CHARGE;
    let relative_error = (h - PLANCK_CONSTANT).abs() / PLANCK_CONSTANT * 100.0;
    Ok(PlanckEstimate { h, relative_error })
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use logistic_common::all_close;
    use rand::prelude::*;
    use rand_distr::StandardNormal;

    #[test]
    fn exact_line() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 5.0, 7.0];
        let fit = fit_straight_line(&x, &y).unwrap();
        all_close(&[fit.slope, fit.intercept], &[2.0, 1.0], 1e-12);
        all_close(
            &[fit.ex, fit.ey, fit.exx, fit.exy],
            &[1.5, 4.0, 3.5, 8.5],
            1e-12,
        );
        assert_eq!(9.0, fit.eval(4.0));
    }

    #[test]
    fn noisy_line() {
        let x = [0.5, 1.5, 2.5, 5.0, 7.0, 16.0];
        let y = [-1.0, 3.0, 2.0, 6.0, 10.0, 25.0];
        let fit = fit_straight_line(&x, &y).unwrap();
        // numpy.polyfit(x, y, 1)
        all_close(&[fit.slope, fit.intercept], &[1.63021767, -1.33034571], 1e-6);
    }

    #[test]
    fn random_noise_recovers_line() {
        const N: usize = 10000;
        let mut rng = StdRng::seed_from_u64(0);
        let x: Vec<f64> = (0..N).map(|_| rng.gen_range(0.0..10.0)).collect();
        let y: Vec<f64> = x
            .iter()
            .map(|&x| -3.0 * x + 2.0 + 0.01 * rng.sample::<f64, _>(StandardNormal))
            .collect();
        let fit = fit_straight_line(&x, &y).unwrap();
        assert_relative_eq!(-3.0, fit.slope, max_relative = 1e-3);
        assert_relative_eq!(2.0, fit.intercept, max_relative = 1e-2);
    }

    #[test]
    fn empty_input() {
        assert_eq!(Err(FitError::EmptyInput), fit_straight_line(&[], &[]));
    }

    #[test]
    fn length_mismatch() {
        assert_eq!(
            Err(FitError::LengthMismatch { x: 2, y: 3 }),
            fit_straight_line(&[1.0, 2.0], &[1.0, 2.0, 3.0])
        );
    }

    #[test]
    fn vertical_line() {
        assert_eq!(
            Err(FitError::ZeroDenominator),
            fit_straight_line(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0])
        );
    }

    #[test]
    fn millikan_planck_constant() {
        // Stopping voltage over frequency is h / e
        let slope = PLANCK_CONSTANT / ELECTRON_CHARGE * 1.01;
        let estimate = planck_constant(slope).unwrap();
        assert_relative_eq!(PLANCK_CONSTANT * 1.01, estimate.h, max_relative = 1e-12);
        assert_relative_eq!(1.0, estimate.relative_error, max_relative = 1e-9);
    }

    #[test]
    fn non_positive_slope() {
        assert_eq!(
            Err(FitError::NonPositiveSlope(0.0)),
            planck_constant(0.0)
        );
        assert!(planck_constant(f64::NAN).is_err());
    }
}
