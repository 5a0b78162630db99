//! Injectable source of uniform random draws.
//!
//! The solvers never touch a global generator. Every draw goes through
//! [`RandomSource`], which every [`rand::Rng`] implements, so tests can pass
//! either a seeded generator or a scripted fake.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform draws needed by the ant colony.
pub trait RandomSource {
    /// A city index uniformly distributed in `0..n`. `n` is always positive.
    fn uniform_index(&mut self, n: usize) -> usize;

    /// A real uniformly distributed in `low..high`. Callers guarantee
    /// `low < high` and both finite.
    fn uniform_real(&mut self, low: f64, high: f64) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn uniform_index(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }

    fn uniform_real(&mut self, low: f64, high: f64) -> f64 {
        self.random_range(low..high)
    }
}

/// Creates a seeded generator for reproducible runs.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
