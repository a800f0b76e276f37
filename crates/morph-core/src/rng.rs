//! Uniform random sources.
//!
//! Every random draw in the crate goes through [`UnitRng`], so tests can
//! substitute a deterministic sequence while production code pulls from the
//! thread-local generator.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Source of uniform random numbers in `[0, 1)`.
pub trait UnitRng {
    /// Next uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f32;
}

/// Production source backed by `rand::thread_rng()`.
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    pub fn new() -> Self {
        Self(rand::thread_rng())
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitRng for ThreadRandom {
    fn next_unit(&mut self) -> f32 {
        self.0.gen()
    }
}

/// Deterministic splitmix64 sequence for reproducible point sets.
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl UnitRng for SplitMix64 {
    fn next_unit(&mut self) -> f32 {
        // Top 24 bits fill the f32 mantissa exactly, keeping the sample < 1.0
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splitmix_in_unit_range() {
        let mut rng = SplitMix64::new(12345);
        for _ in 0..10_000 {
            let u = rng.next_unit();
            assert!((0.0..1.0).contains(&u), "sample out of range: {u}");
        }
    }

    #[test]
    fn test_splitmix_reproducible() {
        let mut a = SplitMix64::new(7);
        let mut b = SplitMix64::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_splitmix_seeds_diverge() {
        let mut a = SplitMix64::new(1);
        let mut b = SplitMix64::new(2);
        let same = (0..100).filter(|_| a.next_unit() == b.next_unit()).count();
        assert!(same < 100, "different seeds should not produce the same stream");
    }

    #[test]
    fn test_thread_random_in_unit_range() {
        let mut rng = ThreadRandom::new();
        for _ in 0..1000 {
            let u = rng.next_unit();
            assert!((0.0..1.0).contains(&u), "sample out of range: {u}");
        }
    }
}
