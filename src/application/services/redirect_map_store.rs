//! Typed access to the redirect map held in the settings store.

use std::sync::Arc;

use crate::domain::entities::{REDIRECT_MAP_KEY, RedirectMap};
use crate::domain::repositories::SettingsStore;
use crate::error::AppError;

/// Loads and saves the whole [`RedirectMap`] under [`REDIRECT_MAP_KEY`].
#[derive(Clone)]
pub struct RedirectMapStore {
    settings: Arc<dyn SettingsStore>,
}

impl RedirectMapStore {
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self { settings }
    }

    /// Reads the stored map. A key that was never written reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails or the stored value
    /// is not a string-to-string object.
    pub async fn load(&self) -> Result<RedirectMap, AppError> {
        match self.settings.get(REDIRECT_MAP_KEY).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(RedirectMap::new()),
        }
    }

    /// Replaces the stored map.
    pub async fn save(&self, map: &RedirectMap) -> Result<(), AppError> {
        self.settings
            .set(REDIRECT_MAP_KEY, serde_json::to_value(map)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockSettingsStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_missing_key_is_empty() {
        let mut settings = MockSettingsStore::new();
        settings
            .expect_get()
            .withf(|key| key == REDIRECT_MAP_KEY)
            .returning(|_| Ok(None));

        let store = RedirectMapStore::new(Arc::new(settings));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_value() {
        let mut settings = MockSettingsStore::new();
        settings
            .expect_get()
            .returning(|_| Ok(Some(json!(["not", "a", "map"]))));

        let store = RedirectMapStore::new(Arc::new(settings));
        assert!(matches!(
            store.load().await.unwrap_err(),
            AppError::Internal { .. }
        ));
    }

    #[tokio::test]
    async fn test_save_writes_whole_object() {
        let mut settings = MockSettingsStore::new();
        settings
            .expect_set()
            .withf(|key, value| {
                key == REDIRECT_MAP_KEY && *value == json!({ "draft": "https://example.com/live/" })
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut map = RedirectMap::new();
        map.insert("draft", "https://example.com/live/");

        let store = RedirectMapStore::new(Arc::new(settings));
        store.save(&map).await.unwrap();
    }
}
