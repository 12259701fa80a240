//! Logistic map `x -> r x (1 - x)` trajectories and bifurcation diagrams
//!
//! ```
//! use logistic_map::{Bifurcation, SamplePolicy, SweepSpec};
//!
//! let bifurcation = Bifurcation::new(
//!     SweepSpec::new(2.5, 4.0, 3).unwrap(),
//!     SamplePolicy::new(5, 3).unwrap(),
//! );
//! let cloud = bifurcation.sample();
//! assert_eq!(6, cloud.len());
//! ```

mod bifurcation;
pub use bifurcation::{Bifurcation, BifurcationCloud, DEFAULT_INITIAL_VALUE};

mod config;
pub use config::BifurcationConfig;

mod error;
pub use error::{BifurcationError, PolicyError, SweepError, TrajectoryError};

mod float_trait;
pub use float_trait::Float;

mod map;
pub use map::{iterate_logistic, logistic_step, LogisticMap, Orbit, Trajectory};

mod policy;
pub use policy::SamplePolicy;

mod sweep;
pub use sweep::SweepSpec;
