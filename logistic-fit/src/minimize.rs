#[derive(Clone, Debug, PartialEq)]
pub struct Minimum<const NPARAMS: usize> {
    pub x: [f64; NPARAMS],
    pub value: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Derivative-free minimiser of a scalar objective
pub trait Minimizer {
    fn minimize<F, const NPARAMS: usize>(
        &self,
        objective: F,
        x0: [f64; NPARAMS],
    ) -> Minimum<NPARAMS>
    where
        F: Fn(&[f64; NPARAMS]) -> f64;
}

/// Downhill simplex method of Nelder and Mead
///
/// See Press et al. sec. 10.5 Downhill Simplex Method in Multidimensions. Iterations stop when
/// both the spread of the objective over the simplex and the simplex size are below the tolerances.
#[derive(Clone, Debug, PartialEq)]
pub struct NelderMead {
    pub max_iterations: usize,
    /// Absolute tolerance on objective values
    pub f_tolerance: f64,
    /// Absolute tolerance on parameter values
    pub x_tolerance: f64,
    /// Relative size of the initial simplex along every non-zero parameter
    pub initial_step: f64,
    /// Size of the initial simplex along zero parameters
    pub zero_step: f64,
}

impl Default for NelderMead {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            f_tolerance: 1e-12,
            x_tolerance: 1e-10,
            initial_step: 0.05,
            zero_step: 2.5e-4,
        }
    }
}

const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINKAGE: f64 = 0.5;

struct Vertex<const NPARAMS: usize> {
    x: [f64; NPARAMS],
    f: f64,
}

/// `centroid + coeff * (centroid - x)`
fn along<const NPARAMS: usize>(
    centroid: &[f64; NPARAMS],
    x: &[f64; NPARAMS],
    coeff: f64,
) -> [f64; NPARAMS] {
    let mut result = [0.0; NPARAMS];
    for ((r, &c), &x) in result.iter_mut().zip(centroid.iter()).zip(x.iter()) {
        *r = c + coeff * (c - x);
    }
    result
}

fn total_order(a: f64, b: f64) -> std::cmp::Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        // NaN goes last
        None => b.is_nan().cmp(&a.is_nan()).reverse(),
    }
}

impl NelderMead {
    fn initial_simplex<F, const NPARAMS: usize>(
        &self,
        objective: &F,
        x0: [f64; NPARAMS],
    ) -> Vec<Vertex<NPARAMS>>
    where
        F: Fn(&[f64; NPARAMS]) -> f64,
    {
        let mut simplex = Vec::with_capacity(NPARAMS + 1);
        simplex.push(Vertex {
            x: x0,
            f: objective(&x0),
        });
        for i in 0..NPARAMS {
            let mut x = x0;
            x[i] = if x[i] != 0.0 {
                x[i] * (1.0 + self.initial_step)
            } else {
                self.zero_step
            };
            simplex.push(Vertex { x, f: objective(&x) });
        }
        simplex
    }

    fn is_converged<const NPARAMS: usize>(&self, simplex: &[Vertex<NPARAMS>]) -> bool {
        let best = &simplex[0];
        let f_spread = simplex[1..]
            .iter()
            .map(|v| (v.f - best.f).abs())
            .fold(0.0, f64::max);
        let x_spread = simplex[1..]
            .iter()
            .flat_map(|v| v.x.iter().zip(best.x.iter()).map(|(a, b)| (a - b).abs()))
            .fold(0.0, f64::max);
        f_spread <= self.f_tolerance && x_spread <= self.x_tolerance
    }
}

impl Minimizer for NelderMead {
    fn minimize<F, const NPARAMS: usize>(
        &self,
        objective: F,
        x0: [f64; NPARAMS],
    ) -> Minimum<NPARAMS>
    where
        F: Fn(&[f64; NPARAMS]) -> f64,
    {
        let mut simplex = self.initial_simplex(&objective, x0);
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations {
            simplex.sort_by(|a, b| total_order(a.f, b.f));
            if self.is_converged(&simplex) {
                converged = true;
                break;
            }
            iterations += 1;

            let worst = NPARAMS;
            let mut centroid = [0.0; NPARAMS];
            for vertex in &simplex[..worst] {
                for (c, &x) in centroid.iter_mut().zip(vertex.x.iter()) {
                    *c += x / (NPARAMS as f64);
                }
            }

            let reflected = along(&centroid, &simplex[worst].x, REFLECTION);
            let f_reflected = objective(&reflected);
            if f_reflected < simplex[0].f {
                let expanded = along(&centroid, &simplex[worst].x, EXPANSION);
                let f_expanded = objective(&expanded);
                simplex[worst] = if f_expanded < f_reflected {
                    Vertex {
                        x: expanded,
                        f: f_expanded,
                    }
                } else {
                    Vertex {
                        x: reflected,
                        f: f_reflected,
                    }
                };
                continue;
            }
            if f_reflected < simplex[worst - 1].f {
                simplex[worst] = Vertex {
                    x: reflected,
                    f: f_reflected,
                };
                continue;
            }

            // Outside contraction if the reflected point is better than the worst one
            let (contracted, threshold) = if f_reflected < simplex[worst].f {
                (
                    along(&centroid, &simplex[worst].x, REFLECTION * CONTRACTION),
                    f_reflected,
                )
            } else {
                (
                    along(&centroid, &simplex[worst].x, -CONTRACTION),
                    simplex[worst].f,
                )
            };
            let f_contracted = objective(&contracted);
            if f_contracted <= threshold {
                simplex[worst] = Vertex {
                    x: contracted,
                    f: f_contracted,
                };
                continue;
            }

            let best = simplex[0].x;
            for vertex in simplex[1..].iter_mut() {
                for (x, &b) in vertex.x.iter_mut().zip(best.iter()) {
                    *x = b + SHRINKAGE * (*x - b);
                }
                vertex.f = objective(&vertex.x);
            }
        }
        simplex.sort_by(|a, b| total_order(a.f, b.f));

        log::debug!(
            "Nelder-Mead stopped after {} iterations, converged: {}, objective: {}",
            iterations,
            converged,
            simplex[0].f,
        );
        Minimum {
            x: simplex[0].x,
            value: simplex[0].f,
            iterations,
            converged,
        }
    }
}
