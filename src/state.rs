//! Shared application state injected into every handler.

use anyhow::Result;
use std::sync::Arc;
use url::Url;

use crate::application::services::{
    AuthService, CsrfService, MappingService, RedirectMapStore, RedirectService,
};
use crate::config::Config;
use crate::domain::repositories::{ContentRepository, SettingsStore, TokenRepository};
use crate::utils::permalinks::Permalinks;

/// Tunables that shape the services built into [`AppState`].
#[derive(Debug, Clone)]
pub struct StateOptions {
    pub site_url: Url,
    pub signing_secret: String,
    pub csrf_lifetime_seconds: u64,
    pub session_max_age_seconds: u64,
    pub excluded_content_type: Option<String>,
}

impl StateOptions {
    /// Extracts state options from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `SITE_URL` does not parse.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            site_url: config.parsed_site_url()?,
            signing_secret: config.token_signing_secret.clone(),
            csrf_lifetime_seconds: config.csrf_lifetime_seconds,
            session_max_age_seconds: config.session_max_age_seconds,
            excluded_content_type: config.excluded_content_type.clone(),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService>,
    pub mapping_service: Arc<MappingService>,
    pub auth_service: Arc<AuthService>,
    pub csrf_service: Arc<CsrfService>,
    pub content: Arc<dyn ContentRepository>,
    pub settings: Arc<dyn SettingsStore>,
    pub session_max_age_seconds: u64,
    /// Adds `Secure` to the session cookie; set when the site is served over https.
    pub secure_cookies: bool,
}

impl AppState {
    /// Wires services on top of the given storage backends.
    pub fn new(
        content: Arc<dyn ContentRepository>,
        settings: Arc<dyn SettingsStore>,
        tokens: Arc<dyn TokenRepository>,
        options: StateOptions,
    ) -> Self {
        let map_store = RedirectMapStore::new(settings.clone());
        let secure_cookies = options.site_url.scheme() == "https";
        let permalinks = Permalinks::new(options.site_url);

        let redirect_service = Arc::new(RedirectService::new(content.clone(), map_store.clone()));
        let mapping_service = Arc::new(MappingService::new(
            content.clone(),
            map_store,
            permalinks,
            options.excluded_content_type,
        ));
        let auth_service = Arc::new(AuthService::new(tokens, options.signing_secret.clone()));
        let csrf_service = Arc::new(CsrfService::new(
            options.signing_secret,
            options.csrf_lifetime_seconds,
        ));

        Self {
            redirect_service,
            mapping_service,
            auth_service,
            csrf_service,
            content,
            settings,
            session_max_age_seconds: options.session_max_age_seconds,
            secure_cookies,
        }
    }
}
