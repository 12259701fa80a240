use ndarray::{Array1, ArrayView1};

/// Closed-form model `y(t; params)` with a fixed number of parameters
pub trait ParametricModel<const NPARAMS: usize>: Sized {
    fn from_params(params: [f64; NPARAMS]) -> Self;

    fn params(&self) -> [f64; NPARAMS];

    fn eval(&self, t: f64) -> f64;

    fn eval_array(&self, t: ArrayView1<f64>) -> Array1<f64> {
        t.mapv(|t| self.eval(t))
    }
}

/// Bacterial response model with amplitude `a` and time constant `tau`
///
/// `V(t) = 1 - exp(-t / tau)` is the enzyme response to a step change,
/// `W(t) = a (exp(-t / tau) - 1 + t / tau)` is the delayed response used for fitting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BacteriaModel {
    pub a: f64,
    pub tau: f64,
}

impl BacteriaModel {
    pub fn new(a: f64, tau: f64) -> Self {
        Self { a, tau }
    }

    pub fn v(&self, t: f64) -> f64 {
        1.0 - f64::exp(-t / self.tau)
    }

    pub fn w(&self, t: f64) -> f64 {
        self.a * (f64::exp(-t / self.tau) - 1.0 + t / self.tau)
    }
}

impl ParametricModel<2> for BacteriaModel {
    fn from_params([a, tau]: [f64; 2]) -> Self {
        Self { a, tau }
    }

    fn params(&self) -> [f64; 2] {
        [self.a, self.tau]
    }

    fn eval(&self, t: f64) -> f64 {
        self.w(t)
    }
}

/// Viral load decay under treatment, `A exp(-alpha t) + B exp(-beta t)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HivModel {
    pub a: f64,
    pub alpha: f64,
    pub b: f64,
    pub beta: f64,
}

impl HivModel {
    pub fn new(a: f64, alpha: f64, b: f64, beta: f64) -> Self {
        Self { a, alpha, b, beta }
    }

    pub fn viral_load(&self, t: f64) -> f64 {
        self.a * f64::exp(-self.alpha * t) + self.b * f64::exp(-self.beta * t)
    }
}

impl ParametricModel<4> for HivModel {
    fn from_params([a, alpha, b, beta]: [f64; 4]) -> Self {
        Self { a, alpha, b, beta }
    }

    fn params(&self) -> [f64; 4] {
        [self.a, self.alpha, self.b, self.beta]
    }

    fn eval(&self, t: f64) -> f64 {
        self.viral_load(t)
    }
}
