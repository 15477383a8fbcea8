//! Random sources for measurement values.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Yields uniformly distributed values in `[0, 1)`.
pub trait UnitSource: Send {
    /// Returns the next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// [`UnitSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandSource<R = StdRng> {
    rng: R,
}

impl RandSource<StdRng> {
    /// Creates a source seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible source from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore + Send> UnitSource for RandSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Source that always yields the same value.
///
/// Values outside `[0, 1)` are clamped into range.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource {
    value: f64,
}

impl FixedSource {
    pub fn new(value: f64) -> Self {
        Self {
            value: value.clamp(0.0, 1.0 - f64::EPSILON),
        }
    }

    /// Source fixed at the middle of the unit range.
    pub fn midpoint() -> Self {
        Self::new(0.5)
    }
}

impl UnitSource for FixedSource {
    fn next_unit(&mut self) -> f64 {
        self.value
    }
}
