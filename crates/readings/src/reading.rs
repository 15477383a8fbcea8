//! Reading and snapshot value types.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::City;

/// One city's pH measurement at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub city: City,
    pub ph_level: f64,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Formats an instant as ISO-8601 UTC with millisecond precision.
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_timestamp<S: Serializer>(
    instant: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(instant))
}

/// A complete, immutable set of readings: one per [`City`], in
/// [`City::ALL`] order, all stamped with the same instant.
///
/// Snapshots are only built by the [`Generator`](crate::Generator), which
/// keeps the one-reading-per-city invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    generated_at: DateTime<Utc>,
    readings: Vec<Reading>,
}

impl Snapshot {
    pub(crate) fn new(generated_at: DateTime<Utc>, readings: Vec<Reading>) -> Self {
        debug_assert_eq!(readings.len(), City::ALL.len());
        Self {
            generated_at,
            readings,
        }
    }

    /// Returns the instant shared by every reading.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Returns the readings in reporting order.
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
