//! Periodic snapshot regeneration.

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};

use crate::clock::Clock;
use crate::generator::Generator;
use crate::reading::format_timestamp;
use crate::source::UnitSource;
use crate::store::SnapshotStore;

/// Default time between regenerations.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

/// Owns the generator and republishes a snapshot on a fixed interval.
///
/// Construction publishes the first snapshot synchronously, so the store is
/// populated before any listener starts accepting requests.
pub struct Regenerator<S, C> {
    generator: Generator<S, C>,
    store: SnapshotStore,
    interval: Duration,
}

impl<S: UnitSource, C: Clock> Regenerator<S, C> {
    /// Generates the initial snapshot and returns the regenerator together
    /// with the store it publishes into.
    pub fn new(mut generator: Generator<S, C>, interval: Duration) -> (Self, SnapshotStore) {
        let initial = generator.generate();
        tracing::info!(
            generated_at = %format_timestamp(&initial.generated_at()),
            readings = initial.len(),
            "initial pH snapshot generated"
        );
        metrics::counter!("ph_snapshots_generated_total").increment(1);

        let store = SnapshotStore::new(initial);
        let regenerator = Self {
            generator,
            store: store.clone(),
            interval,
        };
        (regenerator, store)
    }

    /// Returns the regeneration interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Runs one regeneration cycle: generate and publish.
    pub async fn tick(&mut self) {
        let snapshot = self.generator.generate();
        let generated_at = snapshot.generated_at();
        self.store.publish(snapshot).await;

        metrics::counter!("ph_snapshots_generated_total").increment(1);
        tracing::info!(updated_at = %format_timestamp(&generated_at), "pH data updated");
    }

    /// Regenerates every interval until the task is dropped.
    ///
    /// The first scheduled cycle runs one full interval after this is
    /// called. Late ticks are delayed, never bursted.
    pub async fn run(mut self) {
        let mut ticker = tokio::time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::debug!(interval_secs = self.interval.as_secs(), "regeneration loop started");

        loop {
            ticker.tick().await;
            self.tick().await;
        }
    }
}
