use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::persist_event::PersistSender;
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// Link service over the in-memory registry, as wired by [`crate::server::run`].
pub type AppLinkService = LinkService<InMemoryLinkRepository>;

/// Shared state injected into every handler.
///
/// Built once at startup; no ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    /// Used by the health check to see whether the persist worker is alive.
    pub persist_sender: PersistSender,
}

impl AppState {
    pub fn new(link_service: Arc<AppLinkService>, persist_sender: PersistSender) -> Self {
        Self {
            link_service,
            persist_sender,
        }
    }
}
