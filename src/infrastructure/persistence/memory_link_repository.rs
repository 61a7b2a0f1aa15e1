//! In-memory implementation of the link registry.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::entities::{LinkEntry, LinkSnapshot};
use crate::domain::persist_event::{PersistEvent, PersistSender};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// The process-wide slug → link mapping.
///
/// Reads share the lock; `insert` is the single writer path. Each committed
/// insert publishes a [`PersistEvent`] with the full registry before the
/// write lock is released, so the persist channel never goes back to an older
/// state.
pub struct InMemoryLinkRepository {
    links: RwLock<HashMap<String, LinkEntry>>,
    changes: PersistSender,
}

impl InMemoryLinkRepository {
    /// Creates an empty registry that reports mutations on `changes`.
    pub fn new(changes: PersistSender) -> Self {
        Self::from_snapshot(LinkSnapshot::new(), changes)
    }

    /// Creates a registry pre-populated from a loaded snapshot.
    ///
    /// Loading does not emit a [`PersistEvent`]; the durable copy already
    /// holds this state.
    pub fn from_snapshot(snapshot: LinkSnapshot, changes: PersistSender) -> Self {
        let links = snapshot
            .into_entries()
            .map(|entry| (entry.slug.clone(), entry))
            .collect();

        Self {
            links: RwLock::new(links),
            changes,
        }
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, entry: LinkEntry) -> Result<LinkEntry, AppError> {
        let mut links = self.links.write().await;

        if links.contains_key(&entry.slug) {
            return Err(AppError::slug_conflict(&entry.slug));
        }

        links.insert(entry.slug.clone(), entry.clone());

        let snapshot: LinkSnapshot = links.values().cloned().collect();
        if self
            .changes
            .send(Some(PersistEvent::new(entry.slug.clone(), snapshot)))
            .is_err()
        {
            warn!(slug = %entry.slug, "Persist worker is not running; registration kept in memory only");
        }

        Ok(entry)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<LinkEntry>, AppError> {
        Ok(self.links.read().await.get(slug).cloned())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.links.read().await.len())
    }

    async fn snapshot(&self) -> Result<LinkSnapshot, AppError> {
        Ok(self.links.read().await.values().cloned().collect())
    }
}
