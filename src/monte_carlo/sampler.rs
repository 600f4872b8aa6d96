use rand::Rng;

/// The square region points are drawn from.
///
/// Both domains inscribe the unit circle arc with the same in-circle
/// probability (π/4), so the estimator applies the same scale factor to
/// either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleDomain {
    /// The quarter-circle geometry: coordinates uniform over [0, 1].
    UnitSquare,
    /// The full-circle geometry: coordinates uniform over [-1, 1].
    CenteredSquare,
}

impl SampleDomain {
    fn low(self) -> f64 {
        match self {
            SampleDomain::UnitSquare => 0.0,
            SampleDomain::CenteredSquare => -1.0,
        }
    }

    fn high(self) -> f64 {
        1.0
    }
}

/// Returns true if the point (x, y) lies in the unit circle.
/// Boundary points count as inside.
pub fn in_circle(x: f64, y: f64) -> bool {
    x * x + y * y <= 1.0
}

/// Draws `iterations` independent random points from `domain` and returns
/// how many fall inside the unit circle.
///
/// The generator is an explicit parameter so callers can seed it for
/// reproducible runs; each coordinate is drawn independently and uniformly.
/// `iterations == 0` returns 0.
pub fn count_in_circle<R: Rng>(rng: &mut R, iterations: u64, domain: SampleDomain) -> u64 {
    let (low, high) = (domain.low(), domain.high());
    let mut count = 0;
    for _ in 0..iterations {
        let x = rng.gen_range(low..=high);
        let y = rng.gen_range(low..=high);
        if in_circle(x, y) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_boundary_point_is_inside() {
        assert!(in_circle(1.0, 0.0));
        assert!(in_circle(0.0, -1.0));
    }

    #[test]
    fn test_corner_point_is_outside() {
        assert!(!in_circle(1.0, 1.0));
        assert!(!in_circle(-1.0, 1.0));
    }

    #[test]
    fn test_origin_is_inside() {
        assert!(in_circle(0.0, 0.0));
    }

    #[test]
    fn test_zero_iterations_counts_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(count_in_circle(&mut rng, 0, SampleDomain::UnitSquare), 0);
    }

    #[test]
    fn test_count_never_exceeds_iterations() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for &domain in &[SampleDomain::UnitSquare, SampleDomain::CenteredSquare] {
            let count = count_in_circle(&mut rng, 1000, domain);
            assert!(count <= 1000);
        }
    }

    #[test]
    fn test_seeded_count_is_reproducible() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(42);
        let mut rng2 = ChaCha8Rng::seed_from_u64(42);
        let a = count_in_circle(&mut rng1, 10_000, SampleDomain::CenteredSquare);
        let b = count_in_circle(&mut rng2, 10_000, SampleDomain::CenteredSquare);
        assert_eq!(a, b);
    }
}
