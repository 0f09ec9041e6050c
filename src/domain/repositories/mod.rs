//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure`. Mock implementations are generated with `mockall`
//! for unit tests.
//!
//! # Available Repositories
//!
//! - [`ContentRepository`] - Draft and published content lookups
//! - [`SettingsStore`] - Named key-value settings (holds the redirect map)
//! - [`TokenRepository`] - Admin token authentication

pub mod content_repository;
pub mod settings_store;
pub mod token_repository;

pub use content_repository::ContentRepository;
pub use settings_store::SettingsStore;
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use content_repository::MockContentRepository;
#[cfg(test)]
pub use settings_store::MockSettingsStore;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
