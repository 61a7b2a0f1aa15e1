//! Registry storage implementations.
//!
//! - [`InMemoryLinkRepository`] - The live slug → link mapping
//! - [`JsonFileSnapshotStore`] - Durable whole-registry snapshot in a JSON file

pub mod json_snapshot_store;
pub mod memory_link_repository;

pub use json_snapshot_store::JsonFileSnapshotStore;
pub use memory_link_repository::InMemoryLinkRepository;
