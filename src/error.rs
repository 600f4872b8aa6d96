use thiserror::Error;

/// Errors produced by the estimation routines and the CLI front ends.
#[derive(Debug, Error)]
pub enum Error {
    /// The estimator was asked to divide by a zero iteration count.
    #[error("iteration count must be positive")]
    ZeroIterations,

    /// The worker count given to the parallel estimator was zero.
    #[error("worker count must be positive")]
    InvalidWorkerCount,

    /// A command-line argument failed to parse as an integer.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] std::num::ParseIntError),

    /// The rayon thread pool could not be constructed.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
