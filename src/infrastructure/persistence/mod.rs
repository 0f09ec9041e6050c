//! PostgreSQL repository implementations.
//!
//! Queries are built with SQLx runtime-checked statements and bound
//! parameters.
//!
//! # Repositories
//!
//! - [`PgContentRepository`] - Content items
//! - [`PgSettingsStore`] - JSONB settings rows
//! - [`PgTokenRepository`] - Admin token storage and validation

pub mod pg_content_repository;
pub mod pg_settings_store;
pub mod pg_token_repository;

pub use pg_content_repository::PgContentRepository;
pub use pg_settings_store::PgSettingsStore;
pub use pg_token_repository::PgTokenRepository;
