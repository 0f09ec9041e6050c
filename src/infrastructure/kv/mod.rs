//! Key-value backends for the settings store.

pub mod redis_settings_store;

pub use redis_settings_store::RedisSettingsStore;
