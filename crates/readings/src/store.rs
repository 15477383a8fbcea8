//! Shared holder for the latest snapshot.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::Snapshot;

/// Holds the current [`Snapshot`] for many readers and one writer.
///
/// Readers get a cloned `Arc` to an immutable snapshot; publishing swaps the
/// `Arc`, so a reader never observes a partially replaced snapshot.
#[derive(Clone)]
pub struct SnapshotStore {
    current: Arc<RwLock<Arc<Snapshot>>>,
}

impl SnapshotStore {
    /// Creates a store seeded with an initial snapshot.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(initial))),
        }
    }

    /// Returns the latest published snapshot.
    pub async fn current(&self) -> Arc<Snapshot> {
        self.current.read().await.clone()
    }

    /// Replaces the current snapshot, returning the previous one.
    pub async fn publish(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let next = Arc::new(snapshot);
        std::mem::replace(&mut *self.current.write().await, next)
    }
}
