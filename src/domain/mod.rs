//! Domain layer containing the registry model and its persistence contract.
//!
//! # Architecture
//!
//! - [`entities`] - Link entries, targets, snapshots and platforms
//! - [`repositories`] - Registry and snapshot storage trait definitions
//! - [`persist_event`] - Mutation notification carrying the full registry
//! - [`persist_worker`] - Asynchronous snapshot writer
//!
//! # Persistence Flow
//!
//! 1. A registration commits in the registry
//! 2. A [`persist_event::PersistEvent`] with the whole registry is sent to a channel
//! 3. [`persist_worker::run_persist_worker`] coalesces queued events
//! 4. The newest snapshot replaces the durable copy via [`repositories::SnapshotStore`]

pub mod entities;
pub mod persist_event;
pub mod persist_worker;
pub mod repositories;
