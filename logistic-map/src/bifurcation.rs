use crate::error::BifurcationError;
use crate::float_trait::Float;
use crate::map::LogisticMap;
use crate::policy::SamplePolicy;
use crate::sweep::SweepSpec;

use conv::prelude::*;

use ndarray::{s, Array1, ArrayView1};
use rayon::prelude::*;

/// Initial value every growth rate of a sweep is started from, unless configured otherwise
///
/// It only affects the discarded transient, not the sampled attractor.
pub const DEFAULT_INITIAL_VALUE: f64 = 0.5;

/// Bifurcation diagram sampler
///
/// For every growth rate of the sweep the orbit is restarted from the initial value, the first
/// `n_discard` iterations are dropped and the following `n_iterations - n_discard` ones are
/// recorded. Columns of different growth rates are independent of each other.
#[derive(Clone, Debug, PartialEq)]
pub struct Bifurcation<T> {
    sweep: SweepSpec<T>,
    policy: SamplePolicy,
    initial_value: T,
}

impl<T> Bifurcation<T>
where
    T: Float,
{
    /// Sampler started from [DEFAULT_INITIAL_VALUE]
    pub fn new(sweep: SweepSpec<T>, policy: SamplePolicy) -> Self {
        Self {
            sweep,
            policy,
            initial_value: T::approx_from(DEFAULT_INITIAL_VALUE).unwrap(),
        }
    }

    pub fn with_initial_value(self, initial_value: T) -> Result<Self, BifurcationError> {
        if !initial_value.is_finite() {
            return Err(BifurcationError::NonFiniteInitialValue);
        }
        Ok(Self {
            initial_value,
            ..self
        })
    }

    pub fn sweep(&self) -> &SweepSpec<T> {
        &self.sweep
    }

    pub fn policy(&self) -> SamplePolicy {
        self.policy
    }

    pub fn initial_value(&self) -> T {
        self.initial_value
    }

    pub fn r_values(&self) -> Array1<T> {
        self.sweep.values()
    }

    /// State reached right after the transient is discarded
    pub fn final_state(&self, r: T) -> T {
        LogisticMap::new(r).advance(self.initial_value, self.policy.n_discard())
    }

    /// [Bifurcation::final_state] for every growth rate of the sweep
    pub fn final_states(&self) -> Array1<T> {
        self.r_values().mapv(|r| self.final_state(r))
    }

    /// Retained samples of a single growth rate, in iteration order
    pub fn column(&self, r: T) -> Vec<T> {
        let map = LogisticMap::new(r);
        let x = self.final_state(r);
        map.orbit(x)
            .skip(1)
            .take(self.policy.n_retained())
            .collect()
    }

    pub fn sample(&self) -> BifurcationCloud<T> {
        self.log_start();
        let r_values = self.sweep.to_vec();
        let columns = r_values.iter().map(|&r| self.column(r)).collect();
        self.assemble(r_values, columns)
    }

    /// Same as [Bifurcation::sample] but columns are computed by a pool of `n_jobs` threads
    ///
    /// `n_jobs == 0` lets rayon choose the number of threads. The result is identical to the
    /// sequential one.
    pub fn sample_parallel(
        &self,
        n_jobs: usize,
    ) -> Result<BifurcationCloud<T>, BifurcationError> {
        self.log_start();
        let r_values = self.sweep.to_vec();
        let columns = rayon::ThreadPoolBuilder::new()
            .num_threads(n_jobs)
            .build()
            .map_err(|err| BifurcationError::ThreadPool(err.to_string()))?
            .install(|| {
                r_values
                    .par_iter()
                    .map(|&r| self.column(r))
                    .collect::<Vec<_>>()
            });
        Ok(self.assemble(r_values, columns))
    }

    fn log_start(&self) {
        log::debug!(
            "sampling bifurcation diagram: r in [{}, {}], n_r = {}, n_iterations = {}, n_discard = {}, x0 = {}",
            self.sweep.r_min(),
            self.sweep.r_max(),
            self.sweep.n_r(),
            self.policy.n_iterations(),
            self.policy.n_discard(),
            self.initial_value,
        );
    }

    fn assemble(&self, r_values: Vec<T>, columns: Vec<Vec<T>>) -> BifurcationCloud<T> {
        let n_retained = self.policy.n_retained();
        let size = r_values.len() * n_retained;
        let mut r = Vec::with_capacity(size);
        let mut x = Vec::with_capacity(size);
        for (&r_value, column) in r_values.iter().zip(columns) {
            r.extend(std::iter::repeat(r_value).take(column.len()));
            x.extend(column);
        }
        let cloud = BifurcationCloud {
            r: Array1::from(r),
            x: Array1::from(x),
            n_retained,
        };
        log::debug!("bifurcation diagram has {} points", cloud.len());
        let non_finite = cloud.non_finite_count();
        if non_finite > 0 {
            log::warn!(
                "bifurcation diagram contains {} non-finite values out of {}",
                non_finite,
                cloud.len()
            );
        }
        cloud
    }
}

/// `(r, x)` points of a bifurcation diagram
///
/// Points are grouped by growth rate in sweep order and are in iteration order inside a group.
#[derive(Clone, Debug, PartialEq)]
pub struct BifurcationCloud<T> {
    r: Array1<T>,
    x: Array1<T>,
    n_retained: usize,
}

impl<T> BifurcationCloud<T>
where
    T: Float,
{
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Number of points per growth rate
    pub fn n_retained(&self) -> usize {
        self.n_retained
    }

    pub fn r_values(&self) -> ArrayView1<T> {
        self.r.view()
    }

    pub fn x_values(&self) -> ArrayView1<T> {
        self.x.view()
    }

    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.r.iter().copied().zip(self.x.iter().copied())
    }

    /// Growth rate and its samples, one item per growth rate of the sweep
    ///
    /// Nothing is yielded if no samples are retained.
    pub fn columns(&self) -> impl Iterator<Item = (T, ArrayView1<T>)> + '_ {
        let n = self.n_retained;
        let n_columns = if n == 0 { 0 } else { self.len() / n };
        (0..n_columns).map(move |i| {
            let range = i * n..(i + 1) * n;
            (self.r[range.start], self.x.slice(s![range]))
        })
    }

    pub fn non_finite_count(&self) -> usize {
        self.x.iter().filter(|x| !x.is_finite()).count()
    }

    pub fn into_arrays(self) -> (Array1<T>, Array1<T>) {
        (self.r, self.x)
    }
}
