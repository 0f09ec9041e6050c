//! Repository trait for content item data access.

use crate::domain::entities::{ContentItem, ContentStatus, NewContentItem};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the content store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgContentRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryContentRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Finds a content item by its numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<ContentItem>, AppError>;

    /// Finds the content item owning `slug`.
    ///
    /// An empty slug never resolves to an item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ContentItem>, AppError>;

    /// Lists all items with the given status, ordered by title ascending.
    ///
    /// # Arguments
    ///
    /// - `status` - status filter
    /// - `exclude_type` - optional content type to leave out of the result
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_by_status(
        &self,
        status: ContentStatus,
        exclude_type: Option<String>,
    ) -> Result<Vec<ContentItem>, AppError>;

    /// Creates a new content item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the non-empty slug is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, item: NewContentItem) -> Result<ContentItem, AppError>;

    /// Changes the status of an item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this id.
    async fn update_status(&self, id: i64, status: ContentStatus)
    -> Result<ContentItem, AppError>;

    /// Deletes an item. Returns `Ok(false)` if it did not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts all stored items.
    async fn count(&self) -> Result<i64, AppError>;
}
