use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Source of uniform samples for every probabilistic decision branch.
///
/// Injected into the episode loop so tests can supply deterministic
/// sequences instead of relying on ambient randomness.
pub trait RandomSource {
    /// Uniform sample in [0, 1).
    fn next_f32(&mut self) -> f32;
}

/// Production source: PCG stream seeded from a u64, so identical seeds
/// replay identical fights.
pub struct SeededRandom {
    rng: Pcg64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f32(&mut self) -> f32 {
        self.rng.gen()
    }
}

/// Replays a fixed sequence of samples, cycling when exhausted, and counts
/// how many draws were consumed. Useful for pinning decision branches in
/// tests.
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f32>) -> Self {
        assert!(!values.is_empty(), "ScriptedRandom needs at least one value");
        Self { values, cursor: 0 }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f32(&mut self) -> f32 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}
