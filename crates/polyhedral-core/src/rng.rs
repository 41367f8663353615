//! Random number source abstraction.
//!
//! Dice mechanics take an injected RNG so replays and tests can script
//! exact rolls.

use rand::Rng;

/// Source of randomness for dice resolution.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;
}

/// Production RNG backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl DeterministicRng for ThreadRandom {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        rand::rng().random_range(min..=max)
    }

    fn next_f64(&mut self) -> f64 {
        rand::rng().random_range(0.0..1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_stays_within_inclusive_range() {
        let mut rng = ThreadRandom;
        for _ in 0..1000 {
            let roll = rng.next_u32_range(1, 12);
            assert!((1..=12).contains(&roll));
        }
    }

    #[test]
    fn test_thread_random_f64_is_half_open_unit() {
        let mut rng = ThreadRandom;
        for _ in 0..1000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
