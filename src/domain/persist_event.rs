//! Persistence event emitted after every committed registry mutation.

use tokio::sync::watch;

use crate::domain::entities::LinkSnapshot;

/// Sending half of the persist channel, held by the registry and the health check.
pub type PersistSender = watch::Sender<Option<PersistEvent>>;

/// Receiving half of the persist channel, owned by the persist worker.
pub type PersistReceiver = watch::Receiver<Option<PersistEvent>>;

/// A request to persist the registry as it stood right after a mutation.
///
/// Sent by the repository while it still holds its write lock, so the value
/// in the channel always carries the newest committed state.
///
/// # Usage Flow
///
/// 1. A registration commits in [`crate::infrastructure::persistence::InMemoryLinkRepository`]
/// 2. The repository replaces the channel value with a new `PersistEvent`
/// 3. [`crate::domain::persist_worker::run_persist_worker`] writes the snapshot
#[derive(Debug, Clone)]
pub struct PersistEvent {
    /// The slug whose registration triggered this event.
    pub slug: String,
    pub snapshot: LinkSnapshot,
}

impl PersistEvent {
    pub fn new(slug: String, snapshot: LinkSnapshot) -> Self {
        Self { slug, snapshot }
    }
}

/// Creates the single-slot persist channel.
///
/// A newer event overwrites one the worker has not picked up yet, so at most
/// one pending snapshot is held regardless of how slow writes are.
pub fn persist_channel() -> (PersistSender, PersistReceiver) {
    watch::channel(None)
}
