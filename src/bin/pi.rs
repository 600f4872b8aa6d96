use montepi::Result;

const DEFAULT_ITERATIONS: u64 = 1_000_000;

fn main() -> Result<()> {
    let iterations = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_ITERATIONS,
    };
    let estimate = montepi::estimate_pi(iterations)?;
    println!("PI: {}", estimate);
    Ok(())
}
