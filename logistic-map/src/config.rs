use crate::bifurcation::{Bifurcation, DEFAULT_INITIAL_VALUE};
use crate::error::BifurcationError;
use crate::policy::SamplePolicy;
use crate::sweep::SweepSpec;

use serde::{Deserialize, Serialize};

/// Plain settings of a bifurcation diagram run, validated by [BifurcationConfig::build]
///
/// Missing fields take their default values when deserialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BifurcationConfig {
    pub r_min: f64,
    pub r_max: f64,
    pub n_r: usize,
    pub n_iterations: usize,
    pub n_discard: usize,
    pub initial_value: f64,
    /// Number of threads, `1` samples sequentially and `0` uses all available cores
    pub n_jobs: usize,
}

impl Default for BifurcationConfig {
    fn default() -> Self {
        Self {
            r_min: 2.5,
            r_max: 4.0,
            n_r: 1000,
            n_iterations: 1000,
            n_discard: 100,
            initial_value: DEFAULT_INITIAL_VALUE,
            n_jobs: 1,
        }
    }
}

impl BifurcationConfig {
    pub fn build(&self) -> Result<Bifurcation<f64>, BifurcationError> {
        let sweep = SweepSpec::new(self.r_min, self.r_max, self.n_r)?;
        let policy = SamplePolicy::new(self.n_iterations, self.n_discard)?;
        Bifurcation::new(sweep, policy).with_initial_value(self.initial_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PolicyError, SweepError};

    use serde_test::{assert_de_tokens, Token};

    #[test]
    fn default_builds() {
        let b = BifurcationConfig::default().build().unwrap();
        assert_eq!(1000, b.sweep().n_r());
        assert_eq!(900, b.policy().n_retained());
        assert_eq!(0.5, b.initial_value());
    }

    #[test]
    fn partial_deserialization() {
        let config = BifurcationConfig {
            n_r: 3,
            n_jobs: 4,
            ..Default::default()
        };
        assert_de_tokens(
            &config,
            &[
                Token::Struct {
                    name: "BifurcationConfig",
                    len: 2,
                },
                Token::Str("n_r"),
                Token::U64(3),
                Token::Str("n_jobs"),
                Token::U64(4),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn invalid_values() {
        let config = BifurcationConfig {
            n_r: 0,
            ..Default::default()
        };
        assert_eq!(
            Err(BifurcationError::Sweep(SweepError::ZeroParameterCount)),
            config.build()
        );

        let config = BifurcationConfig {
            n_discard: 2000,
            ..Default::default()
        };
        assert_eq!(
            Err(BifurcationError::Policy(
                PolicyError::DiscardExceedsIterations {
                    n_iterations: 1000,
                    n_discard: 2000,
                }
            )),
            config.build()
        );

        let config = BifurcationConfig {
            initial_value: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(
            Err(BifurcationError::NonFiniteInitialValue),
            config.build()
        );
    }
}
