//! Core domain entities.
//!
//! - [`ContentItem`] - A draft or published piece of content
//! - [`RedirectMap`] - Draft slug to published URL mapping
//! - [`Principal`] - Authenticated admin identity with capabilities
//!
//! Creation inputs use separate structs (`NewContentItem`), following the
//! same pattern as the repositories that consume them.

pub mod content_item;
pub mod principal;
pub mod redirect_map;

pub use content_item::{ContentItem, ContentStatus, NewContentItem};
pub use principal::{Capability, Principal};
pub use redirect_map::{MappingEntry, REDIRECT_MAP_KEY, RedirectMap, RedirectResponse};
