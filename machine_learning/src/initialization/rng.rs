use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Uniform};

use super::RandomSource;

/// A random source backed by any `rand` generator.
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Creates a new `RngSource` random source.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Creates a reproducible random source, two sources with the same `seed` yield the same
    /// sequence of draws.
    ///
    /// # Arguments
    /// * `seed` - The seed for the generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a random source seeded by the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self, lower: f32, upper: f32) -> f32 {
        match Uniform::new(lower, upper) {
            Ok(distribution) => distribution.sample(&mut self.rng),
            Err(_) => lower,
        }
    }

    fn uniform01(&mut self) -> f32 {
        self.rng.random()
    }
}
