use std::thread;

use montepi::Result;

const DEFAULT_ITERATIONS: u64 = 1_000_000;

/// One worker per available core, minus one core left for the rest of the
/// system, never below one.
fn default_workers() -> usize {
    let cores = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    cores.saturating_sub(1).max(1)
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let iterations = match args.next() {
        Some(arg) => arg.parse()?,
        None => DEFAULT_ITERATIONS,
    };
    let workers = match args.next() {
        Some(arg) => arg.parse()?,
        None => default_workers(),
    };

    let (estimate, elapsed) = montepi::estimate_pi_parallel_timed(iterations, workers)?;
    println!("PI ({}): {}", iterations, estimate);
    println!("     elapsed ({}): {}", workers, elapsed.as_secs_f64());
    Ok(())
}
