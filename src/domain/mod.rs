//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Content items, the redirect map, principals
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Behaviour lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
