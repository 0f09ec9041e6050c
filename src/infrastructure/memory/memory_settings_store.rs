//! Process-local settings store.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::repositories::SettingsStore;
use crate::error::AppError;

/// Settings held in memory for the lifetime of the process.
///
/// Used for `SETTINGS_BACKEND=memory` during development and by tests.
#[derive(Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        debug!("Using in-memory settings store (not persisted)");
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, AppError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), AppError> {
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);

        store.set("k", json!({ "a": "b" })).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(json!({ "a": "b" })));

        store.set("k", json!({})).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(json!({})));
    }
}
