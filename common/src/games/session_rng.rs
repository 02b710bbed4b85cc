use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer source used for food placement.
pub trait RandomSource {
    /// Returns a value uniformly distributed over `range`. `range` is never empty.
    fn random_range(&mut self, range: Range<usize>) -> usize;
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn random_range(&mut self, range: Range<usize>) -> usize {
        self.rng.random_range(range)
    }
}
