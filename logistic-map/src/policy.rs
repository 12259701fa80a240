use crate::error::PolicyError;

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// How many iterations are done per growth rate and how many leading ones are dropped
///
/// `n_iterations - n_discard` iterations after the transient are retained, the policy with
/// `n_discard == n_iterations` is valid and retains nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SamplePolicyParameters")]
pub struct SamplePolicy {
    n_iterations: usize,
    n_discard: usize,
}

#[derive(Deserialize)]
#[serde(rename = "SamplePolicy")]
struct SamplePolicyParameters {
    n_iterations: usize,
    n_discard: usize,
}

impl TryFrom<SamplePolicyParameters> for SamplePolicy {
    type Error = PolicyError;

    fn try_from(p: SamplePolicyParameters) -> Result<Self, Self::Error> {
        Self::new(p.n_iterations, p.n_discard)
    }
}

impl SamplePolicy {
    pub fn new(n_iterations: usize, n_discard: usize) -> Result<Self, PolicyError> {
        if n_iterations == 0 {
            return Err(PolicyError::ZeroIterations);
        }
        if n_discard > n_iterations {
            return Err(PolicyError::DiscardExceedsIterations {
                n_iterations,
                n_discard,
            });
        }
        Ok(Self {
            n_iterations,
            n_discard,
        })
    }

    #[inline]
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    #[inline]
    pub fn n_discard(&self) -> usize {
        self.n_discard
    }

    /// Number of samples retained per growth rate
    #[inline]
    pub fn n_retained(&self) -> usize {
        self.n_iterations - self.n_discard
    }
}
