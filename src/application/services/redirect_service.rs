//! Request-time matching of draft slugs against the redirect map.

use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::application::services::RedirectMapStore;
use crate::domain::entities::{ContentItem, RedirectMap, RedirectResponse};
use crate::domain::repositories::ContentRepository;
use crate::error::AppError;
use crate::utils::slug::request_slug;

/// What the public surface should do with a request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// Answer with `301 Moved Permanently`.
    Redirect(RedirectResponse),
    /// Render the resolved, published item.
    Render(ContentItem),
    /// Answer with the standard not-found page.
    NotFound,
}

/// Decides whether an incoming request is answered with a redirect.
pub struct RedirectService {
    content: Arc<dyn ContentRepository>,
    map_store: RedirectMapStore,
}

impl RedirectService {
    pub fn new(content: Arc<dyn ContentRepository>, map_store: RedirectMapStore) -> Self {
        Self { content, map_store }
    }

    /// Matches a request against a given map.
    ///
    /// - A resolved draft redirects if its non-empty slug is mapped.
    /// - A resolved published item never redirects.
    /// - Anything else (no item, or one that is pending, private or trashed)
    ///   redirects if its trimmed path is mapped.
    pub fn match_request(
        map: &RedirectMap,
        path: &str,
        resolved: Option<&ContentItem>,
    ) -> Option<RedirectResponse> {
        let key: Cow<'_, str> = match resolved {
            Some(item) if item.is_draft() => Cow::Borrowed(item.slug.as_str()),
            Some(item) if item.is_published() => return None,
            _ => request_slug(path),
        };

        map.target(&key).map(|location| RedirectResponse {
            location: location.to_string(),
        })
    }

    /// Loads the current map and matches the request against it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the map cannot be loaded.
    pub async fn on_incoming_request(
        &self,
        path: &str,
        resolved: Option<&ContentItem>,
    ) -> Result<Option<RedirectResponse>, AppError> {
        let map = self.map_store.load().await?;
        Ok(Self::match_request(&map, path, resolved))
    }

    /// Resolves a raw request path end to end.
    ///
    /// Storage failures are logged and treated as "no match" so that the
    /// public surface only ever answers with a redirect, a page or not-found.
    pub async fn resolve(&self, path: &str) -> RequestOutcome {
        let slug = request_slug(path);

        let resolved = if slug.is_empty() {
            None
        } else {
            match self.content.find_by_slug(&slug).await {
                Ok(item) => item,
                Err(e) => {
                    warn!("Content lookup failed for {}: {}", slug, e);
                    None
                }
            }
        };

        match self.on_incoming_request(path, resolved.as_ref()).await {
            Ok(Some(redirect)) => {
                info!(slug = %slug, target = %redirect.location, "Draft slug redirected");
                return RequestOutcome::Redirect(redirect);
            }
            Ok(None) => {}
            Err(e) => warn!("Redirect map unavailable: {}", e),
        }

        match resolved {
            Some(item) if item.is_published() => RequestOutcome::Render(item),
            Some(item) => {
                debug!("Item {} is {}, not publicly visible", item.id, item.status);
                RequestOutcome::NotFound
            }
            None => RequestOutcome::NotFound,
        }
    }
}
