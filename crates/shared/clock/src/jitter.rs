use cfm_ports::JitterSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random jitter in [-1, 1]
pub struct UniformJitter {
    rng: StdRng,
}

impl UniformJitter {
    /// Create a source seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create with a specific seed for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for UniformJitter {
    fn sample(&mut self) -> f64 {
        self.rng.gen_range(-1.0..=1.0)
    }

    fn name(&self) -> &str {
        "UniformJitter"
    }
}

/// Always returns the same sample - `ConstantJitter::zero()` gives exact mint periods
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantJitter(f64);

impl ConstantJitter {
    pub fn new(sample: f64) -> Self {
        Self(sample.clamp(-1.0, 1.0))
    }

    pub fn zero() -> Self {
        Self(0.0)
    }
}

impl JitterSource for ConstantJitter {
    fn sample(&mut self) -> f64 {
        self.0
    }

    fn name(&self) -> &str {
        "ConstantJitter"
    }
}

/// Replays a fixed sequence of samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedJitter {
    samples: Vec<f64>,
    next: usize,
}

impl ScriptedJitter {
    /// Samples outside [-1, 1] are clamped; an empty script yields zeros
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        Self {
            samples: samples.into_iter().map(|s| s.clamp(-1.0, 1.0)).collect(),
            next: 0,
        }
    }
}

impl JitterSource for ScriptedJitter {
    fn sample(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.next];
        self.next = (self.next + 1) % self.samples.len();
        sample
    }

    fn name(&self) -> &str {
        "ScriptedJitter"
    }
}
