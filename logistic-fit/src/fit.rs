use crate::error::FitError;
use crate::minimize::Minimizer;
use crate::models::ParametricModel;

use ndarray::{ArrayView1, Zip};

/// Sum of squared residuals of `model` over the `(t, y)` points
pub fn sum_squared_residuals<M, const NPARAMS: usize>(model: &M, t: &[f64], y: &[f64]) -> f64
where
    M: ParametricModel<NPARAMS>,
{
    Zip::from(ArrayView1::from(t))
        .and(ArrayView1::from(y))
        .fold(0.0, |acc, &t, &y| acc + (model.eval(t) - y).powi(2))
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModelFit<M> {
    pub model: M,
    /// Sum of squared residuals of the fitted model
    pub objective: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Least-squares fit of a model, the minimisation itself is delegated to `minimizer`
pub fn fit_model<M, Min, const NPARAMS: usize>(
    t: &[f64],
    y: &[f64],
    initial: &M,
    minimizer: &Min,
) -> Result<ModelFit<M>, FitError>
where
    M: ParametricModel<NPARAMS>,
    Min: Minimizer,
{
    if t.is_empty() || y.is_empty() {
        return Err(FitError::EmptyInput);
    }
    if t.len() != y.len() {
        return Err(FitError::LengthMismatch {
            x: t.len(),
            y: y.len(),
        });
    }
    let minimum = minimizer.minimize(
        |params: &[f64; NPARAMS]| sum_squared_residuals(&M::from_params(*params), t, y),
        initial.params(),
    );
    if minimum.x.iter().any(|x| !x.is_finite()) {
        return Err(FitError::NonFiniteParameters(minimum.x.to_vec()));
    }
    if !minimum.converged {
        log::warn!(
            "minimisation has not converged after {} iterations",
            minimum.iterations
        );
    }
    Ok(ModelFit {
        model: M::from_params(minimum.x),
        objective: minimum.value,
        iterations: minimum.iterations,
        converged: minimum.converged,
    })
}
