use std::time::{Duration, Instant};

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::monte_carlo::sampler::{count_in_circle, SampleDomain};

/// Converts an in-circle count over `iterations` samples into a π estimate.
///
/// The in-circle fraction approximates (circle area / square area) = π/4 in
/// both supported domains, so the scale factor is always 4.
///
/// # Errors
///
/// Returns `Error::ZeroIterations` if `iterations` is 0, rather than
/// dividing by zero.
pub fn estimate_from_count(in_circle: u64, iterations: u64) -> Result<f64> {
    if iterations == 0 {
        return Err(Error::ZeroIterations);
    }
    Ok(4.0 * in_circle as f64 / iterations as f64)
}

/// Splits `total` iterations into `workers` partitions that sum exactly to
/// `total`. Each partition gets `total / workers` iterations; the remainder
/// goes to the first partition so no samples are dropped.
///
/// # Errors
///
/// Returns `Error::InvalidWorkerCount` if `workers` is 0.
pub fn partition_iterations(total: u64, workers: usize) -> Result<Vec<u64>> {
    if workers == 0 {
        return Err(Error::InvalidWorkerCount);
    }
    let mut partitions = vec![total / workers as u64; workers];
    partitions[0] += total % workers as u64;
    Ok(partitions)
}

/// Estimates π sequentially using an explicit random generator.
///
/// Samples from the [0, 1]² quarter-circle geometry. Passing a seeded
/// generator makes the run reproducible.
pub fn estimate_pi_with_rng<R: Rng>(rng: &mut R, iterations: u64) -> Result<f64> {
    let hits = count_in_circle(rng, iterations, SampleDomain::UnitSquare);
    estimate_from_count(hits, iterations)
}

/// Estimates π sequentially with `iterations` samples drawn from the
/// thread-local generator.
pub fn estimate_pi(iterations: u64) -> Result<f64> {
    estimate_pi_with_rng(&mut rand::thread_rng(), iterations)
}

/// Estimates π by distributing `iterations` samples across a pool of
/// `workers` threads.
///
/// Samples from the [-1, 1]² full-circle geometry. The pool is built for
/// this call and torn down when it returns; all partitions are submitted at
/// once and reduced by summation, so completion order does not matter. Each
/// partition draws from its own thread-local generator.
///
/// # Errors
///
/// Returns `Error::ZeroIterations` if `iterations` is 0,
/// `Error::InvalidWorkerCount` if `workers` is 0, and `Error::ThreadPool`
/// if the pool cannot be constructed.
pub fn estimate_pi_parallel(iterations: u64, workers: usize) -> Result<f64> {
    if iterations == 0 {
        return Err(Error::ZeroIterations);
    }
    let partitions = partition_iterations(iterations, workers)?;
    debug!("partitioned {} iterations across {} workers", iterations, workers);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;
    let hits: u64 = pool.install(|| {
        partitions
            .par_iter()
            .map(|&n| count_in_circle(&mut rand::thread_rng(), n, SampleDomain::CenteredSquare))
            .sum()
    });
    estimate_from_count(hits, iterations)
}

/// Like [`estimate_pi_parallel`], but deterministic: every partition draws
/// from a ChaCha generator seeded with `seed` on its own stream, so the
/// result depends only on the inputs, not on worker scheduling.
pub fn estimate_pi_parallel_seeded(iterations: u64, workers: usize, seed: u64) -> Result<f64> {
    if iterations == 0 {
        return Err(Error::ZeroIterations);
    }
    let partitions = partition_iterations(iterations, workers)?;
    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;
    let hits: u64 = pool.install(|| {
        partitions
            .par_iter()
            .enumerate()
            .map(|(stream, &n)| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                rng.set_stream(stream as u64);
                count_in_circle(&mut rng, n, SampleDomain::CenteredSquare)
            })
            .sum()
    });
    estimate_from_count(hits, iterations)
}

/// Runs [`estimate_pi_parallel`] once and measures the elapsed wall-clock
/// time of that single call, exclusive of any output formatting.
pub fn estimate_pi_parallel_timed(iterations: u64, workers: usize) -> Result<(f64, Duration)> {
    let start = Instant::now();
    let estimate = estimate_pi_parallel(iterations, workers)?;
    Ok((estimate, start.elapsed()))
}
