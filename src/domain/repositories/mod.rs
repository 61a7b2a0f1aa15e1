//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access and durable storage. Concrete
//! implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - The slug → link registry
//! - [`SnapshotStore`] - Durable whole-registry snapshots

pub mod link_repository;
pub mod snapshot_store;

pub use link_repository::LinkRepository;
pub use snapshot_store::{SnapshotError, SnapshotStore};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use snapshot_store::MockSnapshotStore;
