//! Redirect map: draft slug to published URL.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Settings key under which the whole map is persisted.
pub const REDIRECT_MAP_KEY: &str = "draft_slug_map";

/// Mapping of draft slugs onto absolute target URLs.
///
/// Keys are case-sensitive. Empty keys are never stored and never matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedirectMap(BTreeMap<String, String>);

impl RedirectMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites an entry. Empty slugs or URLs are ignored.
    pub fn insert(&mut self, slug: impl Into<String>, url: impl Into<String>) -> bool {
        let slug = slug.into();
        let url = url.into();
        if slug.is_empty() || url.is_empty() {
            return false;
        }
        self.0.insert(slug, url);
        true
    }

    /// Looks up the target for a slug. An empty slug never matches.
    pub fn target(&self, slug: &str) -> Option<&str> {
        if slug.is_empty() {
            return None;
        }
        self.0.get(slug).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for RedirectMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (slug, url) in iter {
            map.insert(slug, url);
        }
        map
    }
}

/// A permanent redirect decided by the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectResponse {
    pub location: String,
}

/// One row of a submitted mapping form: a draft item id and its chosen target.
///
/// `target_url` is raw user input; it is sanitized before storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub item_id: i64,
    pub target_url: String,
}
