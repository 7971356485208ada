//! Randomness source for the random walk
//!
//! The walk only ever needs one uniform float per step, so the source is
//! a single-method trait. Production code uses `FastRandom`; tests inject
//! scripted sequences to pin down exact values.

/// A uniform random number generator over [0, 1)
pub trait RandomSource {
    /// Next uniform sample in [0, 1)
    fn next_f32(&mut self) -> f32;
}

/// `fastrand`-backed source
pub struct FastRandom {
    rng: fastrand::Rng,
}

impl FastRandom {
    /// Seed from system entropy
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Deterministic source, reproducible across runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for FastRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastRandom {
    fn next_f32(&mut self) -> f32 {
        self.rng.f32()
    }
}

/// Replays a fixed list of samples in a cycle
///
/// An empty script always yields 0.5 (a zero perturbation).
#[cfg(test)]
pub struct Scripted {
    values: Vec<f32>,
    pos: usize,
}

#[cfg(test)]
impl Scripted {
    pub fn new(values: &[f32]) -> Self {
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }

    /// A source whose every sample is `value`
    pub fn constant(value: f32) -> Self {
        Self::new(&[value])
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn next_f32(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.5;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}
