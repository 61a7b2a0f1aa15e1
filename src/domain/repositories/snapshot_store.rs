//! Durable storage for registry snapshots.

use async_trait::async_trait;

use crate::domain::entities::LinkSnapshot;

/// Errors raised while loading or writing a snapshot.
///
/// Load failures are never fatal: the caller starts with an empty registry.
/// Write failures are logged by the persist worker and not retried.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot file {0} does not exist")]
    Missing(String),

    #[error("cannot read snapshot: {0}")]
    Read(String),

    #[error("cannot parse snapshot: {0}")]
    Parse(String),

    #[error("invalid snapshot entry '{slug}': {reason}")]
    InvalidEntry { slug: String, reason: String },

    #[error("cannot write snapshot: {0}")]
    Write(String),
}

/// Storage backend holding the durable copy of the registry.
///
/// Snapshots are always read and written whole.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileSnapshotStore`] - single JSON file
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Reads and validates the stored snapshot.
    ///
    /// # Errors
    ///
    /// - [`SnapshotError::Missing`] if nothing has been stored yet
    /// - [`SnapshotError::Read`] on I/O failure
    /// - [`SnapshotError::Parse`] if the content is not a slug-keyed JSON object
    /// - [`SnapshotError::InvalidEntry`] if any entry violates the link schema
    async fn load(&self) -> Result<LinkSnapshot, SnapshotError>;

    /// Replaces the stored snapshot with `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Write`] if the snapshot could not be stored.
    async fn save(&self, snapshot: &LinkSnapshot) -> Result<(), SnapshotError>;

    /// Human-readable location of the stored snapshot, for logs.
    fn location(&self) -> String;
}
