//! Key-value settings store.

use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Named settings holding JSON values.
///
/// Reads and writes are atomic per call; concurrent writers follow
/// last-writer-wins semantics.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSettingsStore`] - `settings` table
/// - [`crate::infrastructure::kv::RedisSettingsStore`] - Redis strings
/// - [`crate::infrastructure::memory::MemorySettingsStore`] - process-local map
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Reads a setting. Returns `Ok(None)` if the key was never written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get(&self, key: &str) -> Result<Option<Value>, AppError>;

    /// Writes a setting, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn set(&self, key: &str, value: Value) -> Result<(), AppError>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
