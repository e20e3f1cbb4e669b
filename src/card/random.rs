use rand::{
    SeedableRng,
    prelude::RngExt,
    rngs::{StdRng, ThreadRng},
};

/// Source of uniformly distributed integers used by every synthesizer.
///
/// Implementations are injected into the generators so that tests can replace
/// the thread RNG with a seeded or scripted source.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `0..bound`. `bound` is never zero.
    fn next_below(&mut self, bound: u32) -> u32;

    /// Returns a decimal digit drawn uniformly from `0..=9`.
    fn next_digit(&mut self) -> u8 {
        self.next_below(10) as u8
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

/// Thread-local RNG of the `rand` crate.
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.rng.random_range(0..bound)
    }
}

/// Reproducible source: the same seed always yields the same sequence.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.rng.random_range(0..bound)
    }
}
