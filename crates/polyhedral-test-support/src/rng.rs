//! Deterministic `DeterministicRng` doubles for tests.

use polyhedral_core::rng::DeterministicRng;

/// An RNG that always returns the range minimum and `0.0`. For tests that
/// exercise logic around a roll without caring about its value.
#[derive(Debug, Default)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that replays a scripted sequence of values, for tests that pin a
/// specific dice outcome such as a matched duality roll.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }
}

impl DeterministicRng for SequenceRng {
    /// # Panics
    ///
    /// Panics when the scripted sequence is exhausted.
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let value = self.values[self.index];
        self.index += 1;
        value
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}
