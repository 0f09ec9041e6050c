//! Process-local content repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{ContentItem, ContentStatus, NewContentItem};
use crate::domain::repositories::ContentRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    next_id: i64,
    items: BTreeMap<i64, ContentItem>,
}

/// Content items held in memory, with the same slug uniqueness rule as the
/// `content_items` table.
#[derive(Default)]
pub struct MemoryContentRepository {
    inner: RwLock<Inner>,
}

impl MemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentRepository for MemoryContentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ContentItem>, AppError> {
        Ok(self.inner.read().await.items.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ContentItem>, AppError> {
        if slug.is_empty() {
            return Ok(None);
        }
        Ok(self
            .inner
            .read()
            .await
            .items
            .values()
            .find(|item| item.slug == slug)
            .cloned())
    }

    async fn list_by_status(
        &self,
        status: ContentStatus,
        exclude_type: Option<String>,
    ) -> Result<Vec<ContentItem>, AppError> {
        let inner = self.inner.read().await;
        let mut items: Vec<ContentItem> = inner
            .items
            .values()
            .filter(|item| item.status == status)
            .filter(|item| exclude_type.as_deref() != Some(item.content_type.as_str()))
            .cloned()
            .collect();
        // Same order as the Postgres repository: lowercased title, then id.
        items.sort_by_cached_key(|item| (item.title.to_lowercase(), item.id));
        Ok(items)
    }

    async fn create(&self, item: NewContentItem) -> Result<ContentItem, AppError> {
        let mut inner = self.inner.write().await;

        if !item.slug.is_empty() && inner.items.values().any(|i| i.slug == item.slug) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "content_items_slug_key" }),
            ));
        }

        inner.next_id += 1;
        let now = Utc::now();
        let stored = ContentItem {
            id: inner.next_id,
            title: item.title,
            slug: item.slug,
            content_type: item.content_type,
            status: item.status,
            body: item.body,
            created_at: now,
            updated_at: now,
        };
        inner.items.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn update_status(
        &self,
        id: i64,
        status: ContentStatus,
    ) -> Result<ContentItem, AppError> {
        let mut inner = self.inner.write().await;
        let item = inner
            .items
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Content item not found", json!({ "id": id })))?;

        item.status = status;
        item.updated_at = Utc::now();
        Ok(item.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.inner.write().await.items.remove(&id).is_some())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.inner.read().await.items.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(title: &str, slug: &str, content_type: &str, status: ContentStatus) -> NewContentItem {
        NewContentItem {
            title: title.to_string(),
            slug: slug.to_string(),
            content_type: content_type.to_string(),
            status,
            body: String::new(),
        }
    }

    #[tokio::test]
    async fn test_list_by_status_filters_and_orders() {
        let repo = MemoryContentRepository::new();
        repo.create(new_item("Zebra", "zebra", "post", ContentStatus::Draft)).await.unwrap();
        repo.create(new_item("Apple", "apple", "page", ContentStatus::Draft)).await.unwrap();
        repo.create(new_item("Manual", "manual", "sdm_downloads", ContentStatus::Draft))
            .await
            .unwrap();
        repo.create(new_item("Live", "live", "post", ContentStatus::Publish)).await.unwrap();

        let drafts = repo
            .list_by_status(ContentStatus::Draft, Some("sdm_downloads".to_string()))
            .await
            .unwrap();
        let titles: Vec<_> = drafts.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "Zebra"]);
    }

    #[tokio::test]
    async fn test_list_by_status_ignores_title_case() {
        let repo = MemoryContentRepository::new();
        repo.create(new_item("banana", "banana", "post", ContentStatus::Draft)).await.unwrap();
        repo.create(new_item("Cherry", "cherry", "post", ContentStatus::Draft)).await.unwrap();
        repo.create(new_item("apple", "apple", "post", ContentStatus::Draft)).await.unwrap();

        let drafts = repo.list_by_status(ContentStatus::Draft, None).await.unwrap();
        let titles: Vec<_> = drafts.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["apple", "banana", "Cherry"]);
    }

    #[tokio::test]
    async fn test_duplicate_slug_conflicts_but_empty_slug_does_not() {
        let repo = MemoryContentRepository::new();
        repo.create(new_item("A", "same", "post", ContentStatus::Draft)).await.unwrap();
        let err = repo
            .create(new_item("B", "same", "post", ContentStatus::Draft))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));

        repo.create(new_item("C", "", "post", ContentStatus::Draft)).await.unwrap();
        repo.create(new_item("D", "", "post", ContentStatus::Draft)).await.unwrap();
        assert_eq!(repo.find_by_slug("").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_status_and_delete() {
        let repo = MemoryContentRepository::new();
        let item = repo
            .create(new_item("A", "a", "post", ContentStatus::Draft))
            .await
            .unwrap();

        let updated = repo.update_status(item.id, ContentStatus::Publish).await.unwrap();
        assert!(updated.is_published());

        assert!(repo.delete(item.id).await.unwrap());
        assert!(!repo.delete(item.id).await.unwrap());
        assert!(matches!(
            repo.update_status(item.id, ContentStatus::Draft).await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }
}
