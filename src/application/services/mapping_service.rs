//! Admin-side listing and whole-map replacement of draft redirects.

use std::sync::Arc;
use tracing::{debug, info};

use crate::application::services::RedirectMapStore;
use crate::domain::entities::{ContentItem, ContentStatus, MappingEntry, RedirectMap};
use crate::domain::repositories::ContentRepository;
use crate::error::AppError;
use crate::utils::permalinks::Permalinks;
use crate::utils::url_sanitizer::sanitize_url;

/// A published item offered as a redirect target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOption {
    pub url: String,
    pub label: String,
    pub selected: bool,
}

/// One draft row of the mapping editor.
#[derive(Debug, Clone)]
pub struct EditorRow {
    pub item: ContentItem,
    pub saved_url: Option<String>,
    /// Public address of the draft slug, present only when a redirect is saved.
    pub test_url: Option<String>,
    pub options: Vec<TargetOption>,
}

/// Everything the mapping editor page shows.
#[derive(Debug, Clone)]
pub struct EditorView {
    pub rows: Vec<EditorRow>,
    pub current: RedirectMap,
}

/// Builds the editor listing and applies submitted mappings.
pub struct MappingService {
    content: Arc<dyn ContentRepository>,
    map_store: RedirectMapStore,
    permalinks: Permalinks,
    excluded_type: Option<String>,
}

impl MappingService {
    /// Creates a mapping service.
    ///
    /// # Arguments
    ///
    /// - `excluded_type` - content type whose drafts are hidden from the editor
    pub fn new(
        content: Arc<dyn ContentRepository>,
        map_store: RedirectMapStore,
        permalinks: Permalinks,
        excluded_type: Option<String>,
    ) -> Self {
        Self {
            content,
            map_store,
            permalinks,
            excluded_type,
        }
    }

    /// Collects drafts, published targets and the stored map.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn editor_view(&self) -> Result<EditorView, AppError> {
        let drafts = self
            .content
            .list_by_status(ContentStatus::Draft, self.excluded_type.clone())
            .await?;
        let published = self
            .content
            .list_by_status(ContentStatus::Publish, None)
            .await?;
        let current = self.map_store.load().await?;

        let targets: Vec<(String, String)> = published
            .iter()
            .map(|p| (self.permalinks.for_slug(&p.slug), p.label()))
            .collect();

        let rows = drafts
            .into_iter()
            .map(|item| {
                let saved_url = current.target(&item.slug).map(str::to_string);
                let options = targets
                    .iter()
                    .map(|(url, label)| TargetOption {
                        url: url.clone(),
                        label: label.clone(),
                        selected: saved_url.as_deref() == Some(url.as_str()),
                    })
                    .collect();
                let test_url = saved_url
                    .as_ref()
                    .map(|_| self.permalinks.for_slug(&item.slug));

                EditorRow {
                    item,
                    saved_url,
                    test_url,
                    options,
                }
            })
            .collect();

        Ok(EditorView { rows, current })
    }

    /// Rebuilds the map from a submission and replaces the stored one.
    ///
    /// Entries are skipped when the item is missing or no longer a draft, when
    /// its slug is empty, or when the sanitized URL is empty. Entries left out
    /// of the submission are dropped from the map.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn apply_submission(
        &self,
        entries: &[MappingEntry],
    ) -> Result<RedirectMap, AppError> {
        let mut map = RedirectMap::new();

        for entry in entries {
            let Some(item) = self.content.find_by_id(entry.item_id).await? else {
                debug!("Skipping mapping for unknown item {}", entry.item_id);
                continue;
            };
            if !item.is_draft() {
                debug!("Skipping mapping for item {} ({})", item.id, item.status);
                continue;
            }
            let Ok(url) = sanitize_url(&entry.target_url, self.permalinks.site_url()) else {
                continue;
            };
            map.insert(item.slug, url);
        }

        self.map_store.save(&map).await?;
        info!(entries = map.len(), "Redirect map replaced");

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockContentRepository, MockSettingsStore};
    use chrono::Utc;
    use serde_json::json;
    use url::Url;

    fn item(id: i64, title: &str, slug: &str, status: ContentStatus) -> ContentItem {
        ContentItem {
            id,
            title: title.to_string(),
            slug: slug.to_string(),
            content_type: "post".to_string(),
            status,
            body: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn permalinks() -> Permalinks {
        Permalinks::new(Url::parse("https://example.com/").unwrap())
    }

    fn content_with(items: Vec<ContentItem>) -> MockContentRepository {
        let mut content = MockContentRepository::new();
        content.expect_find_by_id().returning(move |id| {
            Ok(items.iter().find(|i| i.id == id).cloned())
        });
        content
    }

    fn entry(item_id: i64, url: &str) -> MappingEntry {
        MappingEntry {
            item_id,
            target_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_editor_view_preselects_saved_url() {
        let mut content = MockContentRepository::new();
        content
            .expect_list_by_status()
            .withf(|status, exclude| {
                *status == ContentStatus::Draft && exclude.as_deref() == Some("sdm_downloads")
            })
            .returning(|_, _| Ok(vec![item(1, "Old Sale", "old-sale", ContentStatus::Draft)]));
        content
            .expect_list_by_status()
            .withf(|status, exclude| *status == ContentStatus::Publish && exclude.is_none())
            .returning(|_, _| {
                Ok(vec![
                    item(2, "About", "about", ContentStatus::Publish),
                    item(3, "Sale", "sale", ContentStatus::Publish),
                ])
            });

        let mut settings = MockSettingsStore::new();
        settings
            .expect_get()
            .returning(|_| Ok(Some(json!({ "old-sale": "https://example.com/sale/" }))));

        let service = MappingService::new(
            Arc::new(content),
            RedirectMapStore::new(Arc::new(settings)),
            permalinks(),
            Some("sdm_downloads".to_string()),
        );

        let view = service.editor_view().await.unwrap();

        assert_eq!(view.rows.len(), 1);
        let row = &view.rows[0];
        assert_eq!(row.saved_url.as_deref(), Some("https://example.com/sale/"));
        assert_eq!(row.test_url.as_deref(), Some("https://example.com/old-sale/"));
        let selected: Vec<_> = row.options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "Sale (post)");
        assert_eq!(view.current.len(), 1);
    }

    #[tokio::test]
    async fn test_editor_view_without_mapping_has_no_test_link() {
        let mut content = MockContentRepository::new();
        content
            .expect_list_by_status()
            .returning(|status, _| match status {
                ContentStatus::Draft => Ok(vec![item(1, "Draft", "draft", ContentStatus::Draft)]),
                _ => Ok(vec![]),
            });

        let mut settings = MockSettingsStore::new();
        settings.expect_get().returning(|_| Ok(None));

        let service = MappingService::new(
            Arc::new(content),
            RedirectMapStore::new(Arc::new(settings)),
            permalinks(),
            None,
        );

        let view = service.editor_view().await.unwrap();
        assert!(view.rows[0].saved_url.is_none());
        assert!(view.rows[0].test_url.is_none());
        assert!(view.current.is_empty());
    }

    #[tokio::test]
    async fn test_apply_submission_replaces_whole_map() {
        let content = content_with(vec![
            item(1, "A", "draft-a", ContentStatus::Draft),
            item(2, "B", "draft-b", ContentStatus::Draft),
        ]);

        let mut settings = MockSettingsStore::new();
        settings
            .expect_set()
            .withf(|_, value| *value == json!({ "draft-a": "https://example.com/a/" }))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = MappingService::new(
            Arc::new(content),
            RedirectMapStore::new(Arc::new(settings)),
            permalinks(),
            None,
        );

        let map = service
            .apply_submission(&[entry(1, "https://example.com/a/"), entry(2, "")])
            .await
            .unwrap();

        assert_eq!(map.target("draft-a"), Some("https://example.com/a/"));
        assert_eq!(map.target("draft-b"), None);
    }

    #[tokio::test]
    async fn test_apply_submission_skips_invalid_entries() {
        let content = content_with(vec![
            item(1, "Live", "live", ContentStatus::Publish),
            item(2, "No slug", "", ContentStatus::Draft),
            item(3, "Draft", "draft", ContentStatus::Draft),
        ]);

        let mut settings = MockSettingsStore::new();
        settings
            .expect_set()
            .withf(|_, value| *value == json!({}))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = MappingService::new(
            Arc::new(content),
            RedirectMapStore::new(Arc::new(settings)),
            permalinks(),
            None,
        );

        let map = service
            .apply_submission(&[
                entry(1, "https://example.com/x/"),
                entry(2, "https://example.com/y/"),
                entry(3, "javascript:alert(1)"),
                entry(99, "https://example.com/z/"),
            ])
            .await
            .unwrap();

        assert!(map.is_empty());
    }

    #[tokio::test]
    async fn test_apply_submission_sanitizes_urls() {
        let content = content_with(vec![item(1, "Draft", "draft", ContentStatus::Draft)]);

        let mut settings = MockSettingsStore::new();
        settings.expect_set().returning(|_, _| Ok(()));

        let service = MappingService::new(
            Arc::new(content),
            RedirectMapStore::new(Arc::new(settings)),
            permalinks(),
            None,
        );

        let map = service
            .apply_submission(&[entry(1, "  /landing/ ")])
            .await
            .unwrap();

        assert_eq!(map.target("draft"), Some("https://example.com/landing/"));
    }
}
