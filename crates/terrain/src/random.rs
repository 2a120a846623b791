//! Pluggable randomness for heightfield generation.

use rand::Rng;
use rand_distr::{Distribution, Standard};

/// Supplies uniform random values to the generator.
///
/// Every `rand::Rng` is a source, so callers can pass `thread_rng()` for
/// unseeded terrain or a seeded `StdRng` for reproducible terrain.
/// [`ConstantSource`] returns the same value on every draw.
pub trait RandomSource {
    /// Returns a value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Returns a displacement in `[-variance / 2, variance / 2)`.
    fn displacement(&mut self, variance: f64) -> f64 {
        variance * (self.next_unit() - 0.5)
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        Standard.sample(self)
    }
}

/// A source that always yields the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSource(f64);

impl ConstantSource {
    /// Creates a source yielding `value`, clamped into `[0, 1)`.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0 - f64::EPSILON))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl RandomSource for ConstantSource {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}
