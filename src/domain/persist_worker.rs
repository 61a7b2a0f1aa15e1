//! Background worker that keeps the durable snapshot in step with the registry.

use std::sync::Arc;
use tracing::{debug, error, info};

use crate::domain::persist_event::PersistReceiver;
use crate::domain::repositories::SnapshotStore;

/// Writes the newest snapshot to `store` until all senders are dropped.
///
/// The channel holds one slot: events published while a write is in progress
/// replace each other, and only the newest is written next, since each
/// carries the full registry. A failed write is logged and not retried; the
/// next mutation rewrites everything.
///
/// Returns once every sender is gone and the last published event has been
/// handled, so awaiting the task at shutdown guarantees the last accepted
/// mutation reached the store (or failed loudly).
pub async fn run_persist_worker(mut rx: PersistReceiver, store: Arc<dyn SnapshotStore>) {
    info!(location = %store.location(), "Persist worker started");

    while rx.changed().await.is_ok() {
        let latest = rx.borrow_and_update().clone();
        let Some(event) = latest else {
            continue;
        };

        match store.save(&event.snapshot).await {
            Ok(()) => debug!(
                slug = %event.slug,
                links = event.snapshot.len(),
                "Snapshot written"
            ),
            Err(e) => error!(
                slug = %event.slug,
                error = %e,
                "Failed to write snapshot; durable state lags memory until the next registration"
            ),
        }
    }

    info!("Persist worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{LinkSnapshot, LinkTargets};
    use crate::domain::persist_event::{PersistEvent, persist_channel};
    use crate::domain::repositories::{MockSnapshotStore, SnapshotError};
    use std::sync::Mutex;
    use tokio::sync::Notify;

    fn snapshot_with(slugs: &[&str]) -> LinkSnapshot {
        let mut snapshot = LinkSnapshot::new();
        for slug in slugs {
            snapshot.insert(
                slug.to_string(),
                LinkTargets {
                    ios: "https://example.com/i".to_string(),
                    android: "https://example.com/a".to_string(),
                    default: "https://example.com/d".to_string(),
                },
            );
        }
        snapshot
    }

    fn mock_store() -> MockSnapshotStore {
        let mut store = MockSnapshotStore::new();
        store
            .expect_location()
            .returning(|| "memory".to_string());
        store
    }

    #[tokio::test]
    async fn test_worker_writes_snapshot() {
        let mut store = mock_store();
        store
            .expect_save()
            .withf(|snapshot| snapshot.contains("first"))
            .times(1)
            .returning(|_| Ok(()));

        let (tx, rx) = persist_channel();
        tx.send(Some(PersistEvent::new(
            "first".to_string(),
            snapshot_with(&["first"]),
        )))
        .unwrap();
        drop(tx);

        run_persist_worker(rx, Arc::new(store)).await;
    }

    #[tokio::test]
    async fn test_worker_coalesces_pending_events() {
        let mut store = mock_store();
        store
            .expect_save()
            .withf(|snapshot| snapshot.len() == 3)
            .times(1)
            .returning(|_| Ok(()));

        let (tx, rx) = persist_channel();
        tx.send(Some(PersistEvent::new("a".to_string(), snapshot_with(&["a"]))))
            .unwrap();
        tx.send(Some(PersistEvent::new(
            "b".to_string(),
            snapshot_with(&["a", "b"]),
        )))
        .unwrap();
        tx.send(Some(PersistEvent::new(
            "c".to_string(),
            snapshot_with(&["a", "b", "c"]),
        )))
        .unwrap();
        drop(tx);

        run_persist_worker(rx, Arc::new(store)).await;
    }

    #[tokio::test]
    async fn test_worker_skips_superseded_events() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let first_started = Arc::new(Notify::new());

        let mut store = mock_store();
        {
            let written = written.clone();
            let first_started = first_started.clone();
            store.expect_save().times(2).returning(move |snapshot| {
                let mut written = written.lock().unwrap();
                if written.is_empty() {
                    first_started.notify_one();
                }
                written.push(snapshot.len());
                Ok(())
            });
        }

        let (tx, rx) = persist_channel();
        let worker = tokio::spawn(run_persist_worker(rx, Arc::new(store)));

        tx.send(Some(PersistEvent::new("a".to_string(), snapshot_with(&["a"]))))
            .unwrap();
        first_started.notified().await;

        for slugs in [vec!["a", "b"], vec!["a", "b", "c"], vec!["a", "b", "c", "d"]] {
            let last = slugs[slugs.len() - 1].to_string();
            tx.send(Some(PersistEvent::new(last, snapshot_with(&slugs))))
                .unwrap();
        }
        drop(tx);

        worker.await.unwrap();

        assert_eq!(*written.lock().unwrap(), vec![1, 4]);
    }

    #[tokio::test]
    async fn test_worker_survives_write_failure() {
        let mut store = mock_store();
        store
            .expect_save()
            .times(1)
            .returning(|_| Err(SnapshotError::Write("disk full".to_string())));

        let (tx, rx) = persist_channel();
        let worker = tokio::spawn(run_persist_worker(rx, Arc::new(store)));

        tx.send(Some(PersistEvent::new("a".to_string(), snapshot_with(&["a"]))))
            .unwrap();
        drop(tx);

        worker.await.unwrap();
    }

    #[tokio::test]
    async fn test_worker_stops_without_events() {
        let store = mock_store();

        let (tx, rx) = persist_channel();
        drop(tx);

        run_persist_worker(rx, Arc::new(store)).await;
    }
}
