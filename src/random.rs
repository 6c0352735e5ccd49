use rand::{rngs::StdRng, RngCore, SeedableRng};

/// 1-in-4 chance of growing one more level, see Pugh's paper.
pub const BRANCHING_FACTOR: u32 = 4;

/// Source of node heights for the skip list.
///
/// Kept behind a trait so tests can substitute a deterministic sequence;
/// implementations must only return heights in `[1, max_height()]`.
pub trait HeightSampler {
    fn max_height(&self) -> usize;

    fn sample(&mut self) -> usize;
}

/// Approximates a geometric distribution with repeated fair-odds trials,
/// so results do not depend on any platform float distribution. Seeded
/// explicitly for reproducible runs.
pub struct GeometricSampler {
    max_height: usize,
    rng: StdRng,
}

impl GeometricSampler {
    pub fn new(max_height: usize, seed: u64) -> Self {
        GeometricSampler {
            max_height,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl HeightSampler for GeometricSampler {
    fn max_height(&self) -> usize {
        self.max_height
    }

    fn sample(&mut self) -> usize {
        let mut height = 1;
        while height < self.max_height && self.rng.next_u32() % BRANCHING_FACTOR == 0 {
            height += 1;
        }
        height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heights_in_range() {
        let mut sampler = GeometricSampler::new(12, 0xdeadbeef);
        for _ in 0..10_000 {
            let h = sampler.sample();
            assert!((1..=12).contains(&h));
        }
    }

    #[test]
    fn test_height_capped() {
        let mut sampler = GeometricSampler::new(1, 42);
        for _ in 0..100 {
            assert_eq!(sampler.sample(), 1);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GeometricSampler::new(12, 7);
        let mut b = GeometricSampler::new(12, 7);
        let sa: Vec<usize> = (0..1000).map(|_| a.sample()).collect();
        let sb: Vec<usize> = (0..1000).map(|_| b.sample()).collect();
        assert_eq!(sa, sb);
    }

    #[test]
    fn test_geometric_decay() {
        // Fraction of heights >= l should sit near 4^-(l-1).
        let mut sampler = GeometricSampler::new(20, 0xdeadbeef);
        let n = 100_000;
        let heights: Vec<usize> = (0..n).map(|_| sampler.sample()).collect();

        for (level, expect) in [(2usize, 0.25f64), (3, 0.0625), (4, 0.015625)] {
            let frac = heights.iter().filter(|&&h| h >= level).count() as f64 / n as f64;
            assert!(
                (frac - expect).abs() < expect * 0.2,
                "level {}: got {}, expect ~{}",
                level,
                frac,
                expect
            );
        }
    }
}
