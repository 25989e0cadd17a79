//! Seeded random stream shared by every generator.
//!
//! `RandomStream` is the only source of randomness in the framework. Every
//! higher-level generator (numbers, strings, patterns, containers, custom
//! factories) draws from the stream it is handed, so a run is fully described
//! by its seed and the order of generation calls.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};

/// Deterministic random stream wrapping a ChaCha8 generator.
///
/// ChaCha8 output is stable across platforms and `rand` releases.
#[derive(Debug, Clone)]
pub struct RandomStream {
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomStream {
    /// Create a stream from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a stream with a seed taken from system entropy.
    ///
    /// The chosen seed is exposed through [`RandomStream::seed`] so the run
    /// can be replayed later.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed the stream was last (re)initialized with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Reseed the stream. No state from the previous seed survives.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Draw 64 uniformly distributed bits.
    pub fn draw(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Draw a double uniformly distributed in `[0, 1)`.
    pub fn uniform_double(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Draw a float uniformly distributed in `[0, 1)`.
    pub fn uniform_float(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Draw from the standard normal distribution (mean 0, deviation 1).
    pub fn gaussian(&mut self) -> f64 {
        StandardNormal.sample(&mut self.rng)
    }

    /// Draw an integer uniformly in the half-open range `[min, max)`.
    ///
    /// Returns `min` when the range is empty; callers validate bounds before
    /// reaching the stream.
    pub fn range_i64(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..max)
    }

    /// Draw an index uniformly in `[0, len)`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot pick an index in an empty range");
        if len <= 1 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    /// Draw a boolean which is `true` with the given probability.
    pub fn bool(&mut self, probability: f64) -> bool {
        self.uniform_double() < probability
    }

    /// Fill a buffer with random bytes.
    pub fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.rng.fill_bytes(bytes);
    }
}
