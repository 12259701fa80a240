use crate::error::SweepError;
use crate::float_trait::Float;

use conv::prelude::*;
use logistic_common::linspace;
use ndarray::Array1;

/// Evenly spaced growth rates, both `r_min` and `r_max` included
#[derive(Clone, Debug, PartialEq)]
pub struct SweepSpec<T> {
    r_min: T,
    r_max: T,
    n_r: usize,
}

impl<T> SweepSpec<T>
where
    T: Float,
{
    /// `r_max < r_min` is allowed and gives a descending sweep
    pub fn new(r_min: T, r_max: T, n_r: usize) -> Result<Self, SweepError> {
        if n_r == 0 {
            return Err(SweepError::ZeroParameterCount);
        }
        if !r_min.is_finite() {
            return Err(SweepError::NonFiniteBound("r_min"));
        }
        if !r_max.is_finite() {
            return Err(SweepError::NonFiniteBound("r_max"));
        }
        // Grid indices up to n_r - 1 must convert to T exactly
        if (n_r - 1).value_as::<T>().is_err() {
            return Err(SweepError::UnrepresentableCount(n_r));
        }
        Ok(Self { r_min, r_max, n_r })
    }

    /// Sweep consisting of the single value `r`
    pub fn single(r: T) -> Result<Self, SweepError> {
        Self::new(r, r, 1)
    }

    #[inline]
    pub fn r_min(&self) -> T {
        self.r_min
    }

    #[inline]
    pub fn r_max(&self) -> T {
        self.r_max
    }

    #[inline]
    pub fn n_r(&self) -> usize {
        self.n_r
    }

    pub fn to_vec(&self) -> Vec<T> {
        linspace(self.r_min, self.r_max, self.n_r)
    }

    pub fn values(&self) -> Array1<T> {
        Array1::from(self.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_values() {
        let sweep = SweepSpec::new(2.5_f64, 4.0, 3).unwrap();
        assert_eq!(&[2.5, 3.25, 4.0], sweep.values().as_slice().unwrap());
    }

    #[test]
    fn single_value_is_r_min() {
        let sweep = SweepSpec::new(2.5_f32, 4.0, 1).unwrap();
        assert_eq!(&[2.5_f32], sweep.values().as_slice().unwrap());
    }

    #[test]
    fn zero_values() {
        assert_eq!(
            Err(SweepError::ZeroParameterCount),
            SweepSpec::new(2.5_f64, 4.0, 0)
        );
    }

    #[test]
    fn too_many_values_for_f32() {
        assert_eq!(
            Err(SweepError::UnrepresentableCount(16_777_219)),
            SweepSpec::new(2.5_f32, 4.0, 16_777_219)
        );
        assert!(SweepSpec::new(2.5_f32, 4.0, 1 << 24).is_ok());
        assert!(SweepSpec::new(2.5_f64, 4.0, 16_777_219).is_ok());
    }

    #[test]
    fn non_finite_bounds() {
        assert_eq!(
            Err(SweepError::NonFiniteBound("r_min")),
            SweepSpec::new(f64::NAN, 4.0, 10)
        );
        assert_eq!(
            Err(SweepError::NonFiniteBound("r_max")),
            SweepSpec::new(2.5, f64::INFINITY, 10)
        );
    }

    #[test]
    fn uniform_spacing() {
        let sweep = SweepSpec::new(2.5_f64, 4.0, 1000).unwrap();
        let r = sweep.values();
        assert_eq!(1000, r.len());
        let step = 1.5 / 999.0;
        for w in r.as_slice().unwrap().windows(2) {
            assert!((w[1] - w[0] - step).abs() < 1e-12);
        }
    }
}
