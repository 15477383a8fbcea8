//! Snapshot generation.

use crate::clock::Clock;
use crate::reading::{Reading, Snapshot};
use crate::source::UnitSource;
use crate::City;

/// Lower bound of generated pH values (inclusive).
pub const PH_MIN: f64 = 6.0;

/// Upper bound of the raw draw (exclusive). Rounding can reach it.
pub const PH_MAX: f64 = 8.0;

/// Builds snapshots from a random source and a clock.
#[derive(Debug, Clone)]
pub struct Generator<S, C> {
    source: S,
    clock: C,
}

impl<S: UnitSource, C: Clock> Generator<S, C> {
    pub fn new(source: S, clock: C) -> Self {
        Self { source, clock }
    }

    /// Generates a fresh snapshot.
    ///
    /// The clock is read once; every reading shares that instant. One value
    /// is drawn per city, in [`City::ALL`] order.
    pub fn generate(&mut self) -> Snapshot {
        let now = self.clock.now();
        let readings = City::ALL
            .iter()
            .map(|&city| Reading {
                city,
                ph_level: round_to_hundredths(PH_MIN + self.source.next_unit() * (PH_MAX - PH_MIN)),
                timestamp: now,
            })
            .collect();
        Snapshot::new(now, readings)
    }
}

/// Rounds on the exact binary value, so `6.005` (stored just below the tie)
/// becomes `6.00`.
fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
