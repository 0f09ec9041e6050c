//! Public URL construction for content items.

use url::Url;

/// Builds public addresses below the configured site root.
#[derive(Debug, Clone)]
pub struct Permalinks {
    site_url: Url,
}

impl Permalinks {
    /// Creates a builder rooted at `site_url`.
    ///
    /// A missing trailing `/` is added so that joins stay below the root path.
    pub fn new(mut site_url: Url) -> Self {
        if !site_url.path().ends_with('/') {
            let path = format!("{}/", site_url.path());
            site_url.set_path(&path);
        }
        site_url.set_query(None);
        site_url.set_fragment(None);
        Self { site_url }
    }

    pub fn site_url(&self) -> &Url {
        &self.site_url
    }

    /// Returns `SITE_URL/<slug>/`, the public address of a slug.
    ///
    /// An empty slug yields the site root.
    pub fn for_slug(&self, slug: &str) -> String {
        if slug.is_empty() {
            return self.site_url.to_string();
        }
        match self.site_url.join(&format!("{}/", slug)) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{}/", self.site_url, slug),
        }
    }
}
