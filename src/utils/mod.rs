//! Utility functions for URL processing, slugs and token generation.
//!
//! - [`url_sanitizer`] - Redirect target sanitization
//! - [`permalinks`] - Public URL construction from the site root
//! - [`slug`] - Request path trimming and slug validation
//! - [`token_generator`] - Random admin token generation

pub mod permalinks;
pub mod slug;
pub mod token_generator;
pub mod url_sanitizer;
