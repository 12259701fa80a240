#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TrajectoryError {
    #[error("trajectory length must be at least one, zero iterations requested")]
    ZeroLength,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SweepError {
    #[error("parameter sweep must contain at least one value, n_r = 0 given")]
    ZeroParameterCount,

    #[error("parameter sweep bound {0} must be finite")]
    NonFiniteBound(&'static str),

    #[error("parameter sweep of {0} values cannot be spaced uniformly in the float type used")]
    UnrepresentableCount(usize),
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PolicyError {
    #[error("sample policy must have at least one iteration, n_iterations = 0 given")]
    ZeroIterations,

    #[error("number of discarded iterations {n_discard} exceeds total number of iterations {n_iterations}")]
    DiscardExceedsIterations {
        n_iterations: usize,
        n_discard: usize,
    },
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BifurcationError {
    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("initial value must be finite")]
    NonFiniteInitialValue,

    #[error("thread pool cannot be built: {0}")]
    ThreadPool(String),
}
