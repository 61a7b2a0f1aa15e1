//! Link registration and resolution service.

use std::sync::Arc;

use crate::domain::entities::{LinkEntry, LinkInput, Platform};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::url_validator::is_valid_url;

/// Service for registering and resolving platform-aware links.
///
/// Owns the registration policy: slug checks, URL validation, reconciliation
/// of missing targets, and create-only semantics.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Checks that `slug` can still be registered.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidSlug`] if the slug is empty
    /// - [`AppError::SlugConflict`] if the slug is already registered
    pub async fn ensure_available(&self, slug: &str) -> Result<(), AppError> {
        if slug.is_empty() {
            return Err(AppError::invalid_slug(slug));
        }

        if self.link_repository.find_by_slug(slug).await?.is_some() {
            return Err(AppError::slug_conflict(slug));
        }

        Ok(())
    }

    /// Registers a new slug.
    ///
    /// Missing targets are filled by [`LinkInput::reconcile`]. Nothing is
    /// stored unless every supplied target is a valid URL.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// - [`AppError::InvalidSlug`] if the slug is empty
    /// - [`AppError::SlugConflict`] if the slug is already registered
    /// - [`AppError::EmptyLinkSet`] if no target was supplied
    /// - [`AppError::InvalidUrl`] naming the first field that is not a URL
    pub async fn register(&self, slug: &str, input: LinkInput) -> Result<LinkEntry, AppError> {
        self.ensure_available(slug).await?;

        if input.is_empty() {
            return Err(AppError::empty_link_set());
        }

        if let Some((field, value)) = input
            .present_fields()
            .find(|(_, value)| !is_valid_url(value))
        {
            return Err(AppError::invalid_url(field, value));
        }

        let targets = input.reconcile().ok_or_else(AppError::empty_link_set)?;

        let entry = self
            .link_repository
            .insert(LinkEntry::new(slug.to_string(), targets))
            .await?;

        tracing::info!(slug = %entry.slug, "Link registered");

        Ok(entry)
    }

    /// Retrieves a registered link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug is empty or unknown.
    pub async fn resolve(&self, slug: &str) -> Result<LinkEntry, AppError> {
        if slug.is_empty() {
            return Err(AppError::not_found(slug));
        }

        self.link_repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found(slug))
    }

    /// Returns the redirect target for a visitor on `platform`.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve`].
    pub async fn resolve_for_platform(
        &self,
        slug: &str,
        platform: Platform,
    ) -> Result<String, AppError> {
        let entry = self.resolve(slug).await?;
        Ok(entry.target_for(platform).to_string())
    }

    /// Counts registered links.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.link_repository.count().await
    }
}
