//! # Redirectus
//!
//! A platform-aware link redirector built with Axum.
//!
//! Clients register a slug with up to three destination URLs (iOS, Android,
//! default). Visiting the slug redirects to the destination matching the
//! visitor's operating system, as detected from the `User-Agent` header.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entities, repository traits, persist worker
//! - **Application Layer** ([`application`]) - Registration and resolution rules
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry and JSON snapshot file
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Persistence
//!
//! The registry lives in memory. Every successful registration queues a full
//! snapshot for a background worker, which rewrites the snapshot file
//! atomically. The file is read once at startup.
//!
//! ## Quick Start
//!
//! ```bash
//! export SNAPSHOT_PATH="./links.json"  # Optional
//! cargo run
//!
//! curl -X POST localhost:3000/r/promo \
//!     -H 'content-type: application/json' \
//!     -d '{"ios":"https://apps.apple.com/app/id1","default":"https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{LinkEntry, LinkInput, LinkSnapshot, LinkTargets, Platform};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
