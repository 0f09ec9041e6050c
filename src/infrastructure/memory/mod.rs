//! In-memory implementations of the repository traits.
//!
//! Nothing here survives a restart. The settings store backs
//! `SETTINGS_BACKEND=memory`; all three back the HTTP tests.

pub mod memory_content_repository;
pub mod memory_settings_store;
pub mod memory_token_repository;

pub use memory_content_repository::MemoryContentRepository;
pub use memory_settings_store::MemorySettingsStore;
pub use memory_token_repository::MemoryTokenRepository;
