pub mod error;
pub mod monte_carlo;

pub use error::{Error, Result};
pub use monte_carlo::{
    count_in_circle, estimate_pi, estimate_pi_parallel, estimate_pi_parallel_seeded,
    estimate_pi_parallel_timed, estimate_pi_with_rng, SampleDomain,
};
