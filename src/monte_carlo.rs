pub mod estimator;
pub mod sampler;

pub use estimator::{
    estimate_from_count, estimate_pi, estimate_pi_parallel, estimate_pi_parallel_seeded,
    estimate_pi_parallel_timed, estimate_pi_with_rng, partition_iterations,
};
pub use sampler::{count_in_circle, in_circle, SampleDomain};
