//! Synthetic pH readings for a fixed set of monitored cities.
//!
//! This crate provides the data side of the service:
//! - [`City`] enumerates the monitored locations in their fixed order
//! - [`Generator`] builds a fresh [`Snapshot`] from a [`UnitSource`] and a [`Clock`]
//! - [`SnapshotStore`] holds the latest snapshot for concurrent readers
//! - [`Regenerator`] republishes a snapshot on a fixed interval

pub mod city;
pub mod clock;
pub mod generator;
pub mod reading;
pub mod scheduler;
pub mod source;
pub mod store;

pub use city::City;
pub use clock::{Clock, ManualClock, SystemClock};
pub use generator::{Generator, PH_MAX, PH_MIN};
pub use reading::{Reading, Snapshot};
pub use scheduler::{DEFAULT_INTERVAL, Regenerator};
pub use source::{FixedSource, RandSource, UnitSource};
pub use store::SnapshotStore;
