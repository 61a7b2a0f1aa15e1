//! HTTP server initialization and runtime setup.
//!
//! Handles snapshot loading, persist worker spawning, and the Axum server
//! lifecycle including a final snapshot flush on shutdown.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::entities::LinkSnapshot;
use crate::domain::persist_event::persist_channel;
use crate::domain::persist_worker::run_persist_worker;
use crate::domain::repositories::{SnapshotError, SnapshotStore};
use crate::infrastructure::persistence::{InMemoryLinkRepository, JsonFileSnapshotStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Registry from the snapshot file (empty if absent or unusable)
/// - Background persist worker
/// - Axum HTTP server
///
/// On Ctrl+C / SIGTERM the server stops accepting requests, finishes
/// in-flight ones, and waits for the persist worker to write the last
/// snapshot.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn SnapshotStore> =
        Arc::new(JsonFileSnapshotStore::new(&config.snapshot_path));

    let snapshot = load_initial_snapshot(store.as_ref()).await;

    let (persist_tx, persist_rx) = persist_channel();
    let persist_worker = tokio::spawn(run_persist_worker(persist_rx, store));

    let link_repository = Arc::new(InMemoryLinkRepository::from_snapshot(
        snapshot,
        persist_tx.clone(),
    ));
    let link_service = Arc::new(LinkService::new(link_repository));
    let state = AppState::new(link_service, persist_tx);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Redirectus listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router, and with it every persist sender, is gone once serve returns.
    tracing::info!("Server stopped, flushing snapshot");
    if let Err(e) = persist_worker.await {
        tracing::error!("Persist worker panicked: {}", e);
    }

    Ok(())
}

/// Loads the registry snapshot, falling back to an empty registry.
///
/// Never fails: a missing file is the normal first-run case, anything else is
/// logged as a warning because the durable copy will be overwritten by the
/// next registration.
pub async fn load_initial_snapshot(store: &dyn SnapshotStore) -> LinkSnapshot {
    match store.load().await {
        Ok(snapshot) => {
            tracing::info!(
                "Loaded {} links from {}",
                snapshot.len(),
                store.location()
            );
            snapshot
        }
        Err(SnapshotError::Missing(location)) => {
            tracing::info!("No snapshot at {}, starting with an empty registry", location);
            LinkSnapshot::new()
        }
        Err(e) => {
            tracing::warn!(
                "Snapshot at {} is unusable ({}); starting with an empty registry. \
                 The file will be replaced on the next registration.",
                store.location(),
                e
            );
            LinkSnapshot::new()
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
