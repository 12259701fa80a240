use crate::error::TrajectoryError;
use crate::float_trait::Float;

use ndarray::{Array1, ArrayView1};

/// One application of the logistic recurrence, `r * x * (1 - x)`
///
/// No clamping is done: values outside of `[0, 1]` and non-finite values propagate as is.
#[inline]
pub fn logistic_step<T: Float>(r: T, x: T) -> T {
    r * x * (T::one() - x)
}

/// Logistic map with a fixed growth rate
///
/// Any finite or non-finite `r` is accepted, the classical `[0, 4]` range is not enforced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogisticMap<T> {
    r: T,
}

impl<T> LogisticMap<T>
where
    T: Float,
{
    pub fn new(r: T) -> Self {
        Self { r }
    }

    #[inline]
    pub fn r(&self) -> T {
        self.r
    }

    #[inline]
    pub fn step(&self, x: T) -> T {
        logistic_step(self.r, x)
    }

    /// Applies the recurrence `n` times and returns the final state
    pub fn advance(&self, x0: T, n: usize) -> T {
        (0..n).fold(x0, |x, _| self.step(x))
    }

    /// Infinite orbit starting from `x0`, the first item is `x0` itself
    pub fn orbit(&self, x0: T) -> Orbit<T> {
        Orbit {
            map: *self,
            state: x0,
        }
    }

    /// Trajectory of length `n`, see [iterate_logistic]
    pub fn trajectory(&self, x0: T, n: usize) -> Result<Trajectory<T>, TrajectoryError> {
        if n == 0 {
            return Err(TrajectoryError::ZeroLength);
        }
        Ok(Trajectory {
            r: self.r,
            x: self.orbit(x0).take(n).collect(),
        })
    }
}

#[derive(Clone, Debug)]
pub struct Orbit<T> {
    map: LogisticMap<T>,
    state: T,
}

impl<T> Iterator for Orbit<T>
where
    T: Float,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.state;
        self.state = self.map.step(current);
        Some(current)
    }
}

/// Finite orbit of the logistic map: `x[0] = x0` and `x[i] = r * x[i-1] * (1 - x[i-1])`
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory<T> {
    r: T,
    x: Vec<T>,
}

impl<T> Trajectory<T>
where
    T: Float,
{
    #[inline]
    pub fn r(&self) -> T {
        self.r
    }

    #[inline]
    pub fn initial(&self) -> T {
        self.x[0]
    }

    #[inline]
    pub fn last(&self) -> T {
        self.x[self.x.len() - 1]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.x
    }

    pub fn view(&self) -> ArrayView1<T> {
        ArrayView1::from(&self.x[..])
    }

    pub fn into_array(self) -> Array1<T> {
        Array1::from(self.x)
    }
}

/// Iterates the logistic map
///
/// Returns the trajectory of length `n` started from `x0`, `n == 1` gives `[x0]`.
///
/// # Examples
///
/// ```
/// use logistic_map::iterate_logistic;
///
/// let trajectory = iterate_logistic(2.0, 0.5, 4).unwrap();
/// assert_eq!(&[0.5, 0.5, 0.5, 0.5], trajectory.as_slice());
/// ```
pub fn iterate_logistic<T: Float>(
    r: T,
    x0: T,
    n: usize,
) -> Result<Trajectory<T>, TrajectoryError> {
    LogisticMap::new(r).trajectory(x0, n)
}
