//! Slug helpers shared by the request path and the admin CLI.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Slugs accepted when creating content: lowercase words joined by hyphens,
/// or percent-encoded octets for non-ASCII titles.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-z0-9_]|%[0-9a-f]{2})+(?:-(?:[a-z0-9_]|%[0-9a-f]{2})+)*$").unwrap());

/// One percent-encoded octet, in either hex case.
static PERCENT_TRIPLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[0-9A-Fa-f]{2}").unwrap());

/// Reserved first path segments that belong to the service itself.
const RESERVED_SLUGS: &[&str] = &["admin", "health"];

/// Turns a raw request path into a lookup slug by trimming `/` on both ends.
///
/// Percent-encoded octets are lowercased to match stored slugs, since clients
/// send them in uppercase. Everything else is left as is.
///
/// ```ignore
/// assert_eq!(request_slug("/spring-sale/"), "spring-sale");
/// assert_eq!(request_slug("/caf%C3%A9/"), "caf%c3%a9");
/// assert_eq!(request_slug("/"), "");
/// ```
pub fn request_slug(path: &str) -> Cow<'_, str> {
    PERCENT_TRIPLET.replace_all(path.trim_matches('/'), |caps: &Captures| {
        caps[0].to_ascii_lowercase()
    })
}

/// Returns true if `slug` may be assigned to a content item.
///
/// The empty slug is allowed (drafts often have none) and is never matched.
pub fn is_valid_slug(slug: &str) -> bool {
    slug.is_empty() || (SLUG_REGEX.is_match(slug) && !RESERVED_SLUGS.contains(&slug))
}

/// Derives a slug from a title: lowercase ASCII alphanumerics joined by `-`.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
