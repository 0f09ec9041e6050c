//! Redis-backed settings store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::repositories::SettingsStore;
use crate::error::AppError;

/// Settings kept as JSON strings under a `settings:` key prefix.
///
/// Uses connection pooling via `ConnectionManager`. Unlike a cache, errors are
/// propagated: the redirect map has no other copy.
pub struct RedisSettingsStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisSettingsStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        info!("Connecting to Redis settings store");

        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: "settings:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl SettingsStore for RedisSettingsStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, AppError> {
        let mut conn = self.client.clone();
        let raw: Option<String> = conn.get(self.build_key(key)).await?;

        debug!("Settings GET {} ({})", key, if raw.is_some() { "hit" } else { "miss" });

        raw.map(|s| serde_json::from_str(&s))
            .transpose()
            .map_err(AppError::from)
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), AppError> {
        let mut conn = self.client.clone();
        let raw = serde_json::to_string(&value)?;
        conn.set::<_, _, ()>(self.build_key(key), raw).await?;

        debug!("Settings SET {}", key);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
