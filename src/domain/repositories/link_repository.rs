//! Repository trait for registry data access.

use crate::domain::entities::{LinkEntry, LinkSnapshot};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the slug → link registry.
///
/// The registry is append-only: entries are inserted once and never updated
/// or removed.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - in-memory map
///   with snapshot-on-write
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new entry.
    ///
    /// The existence check and the insert are atomic with respect to other
    /// inserts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SlugConflict`] if the slug is already registered.
    async fn insert(&self, entry: LinkEntry) -> Result<LinkEntry, AppError>;

    /// Finds an entry by slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LinkEntry))` if found
    /// - `Ok(None)` if not found
    async fn find_by_slug(&self, slug: &str) -> Result<Option<LinkEntry>, AppError>;

    /// Counts registered slugs.
    async fn count(&self) -> Result<usize, AppError>;

    /// Returns a copy of the whole registry.
    async fn snapshot(&self) -> Result<LinkSnapshot, AppError>;
}
