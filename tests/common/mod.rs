#![allow(dead_code)]

use axum::extract::ConnectInfo;
use axum::{Extension, Router};
use axum_test::TestServer;
use draft_redirects::application::services::RedirectMapStore;
use draft_redirects::domain::entities::{
    ContentItem, ContentStatus, NewContentItem, Principal, RedirectMap,
};
use draft_redirects::domain::repositories::{ContentRepository, SettingsStore};
use draft_redirects::infrastructure::memory::{
    MemoryContentRepository, MemorySettingsStore, MemoryTokenRepository,
};
use draft_redirects::routes::{app_router, router};
use draft_redirects::state::{AppState, StateOptions};
use std::net::SocketAddr;
use std::sync::Arc;
use url::Url;

pub const SITE_URL: &str = "http://example.com/";

/// Everything a handler test needs: the state plus direct handles on the stores.
pub struct TestContext {
    pub state: AppState,
    pub content: Arc<MemoryContentRepository>,
    pub settings: Arc<MemorySettingsStore>,
}

pub fn create_test_context() -> TestContext {
    create_test_context_excluding(Some("sdm_downloads"))
}

pub fn create_test_context_excluding(excluded: Option<&str>) -> TestContext {
    let content = Arc::new(MemoryContentRepository::new());
    let settings = Arc::new(MemorySettingsStore::new());
    let tokens = Arc::new(MemoryTokenRepository::new());

    let options = StateOptions {
        site_url: Url::parse(SITE_URL).unwrap(),
        signing_secret: "test-signing-secret".to_string(),
        csrf_lifetime_seconds: 86_400,
        session_max_age_seconds: 3_600,
        excluded_content_type: excluded.map(str::to_string),
    };

    let state = AppState::new(content.clone(), settings.clone(), tokens, options);

    TestContext {
        state,
        content,
        settings,
    }
}

fn peer_addr() -> ConnectInfo<SocketAddr> {
    ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40_000)))
}

/// Router with a fixed peer address for the rate limiter.
pub fn create_test_server(ctx: &TestContext) -> TestServer {
    let app: Router = router(ctx.state.clone()).layer(Extension(peer_addr()));
    TestServer::new(app).unwrap()
}

/// The served application, trailing-slash normalisation included.
pub fn create_app_test_server(ctx: &TestContext) -> TestServer {
    let app: Router = Router::new()
        .fallback_service(app_router(ctx.state.clone()))
        .layer(Extension(peer_addr()));
    TestServer::new(app).unwrap()
}

pub async fn create_item(
    ctx: &TestContext,
    title: &str,
    slug: &str,
    content_type: &str,
    status: ContentStatus,
) -> ContentItem {
    ctx.content
        .create(NewContentItem {
            title: title.to_string(),
            slug: slug.to_string(),
            content_type: content_type.to_string(),
            status,
            body: format!("Body of {}", title),
        })
        .await
        .unwrap()
}

/// Issues a token and returns it with the principal it authenticates as.
pub async fn create_token(
    ctx: &TestContext,
    name: &str,
    capabilities: &[&str],
) -> (String, Principal) {
    let (_, raw) = ctx
        .state
        .auth_service
        .issue_token(
            name,
            None,
            capabilities.iter().map(|c| c.to_string()).collect(),
        )
        .await
        .unwrap();
    let principal = ctx.state.auth_service.authenticate(&raw).await.unwrap();
    (raw, principal)
}

pub fn auth_cookie(token: &str) -> String {
    format!("auth_token={}", token)
}

pub async fn stored_map(ctx: &TestContext) -> RedirectMap {
    let store: Arc<dyn SettingsStore> = ctx.settings.clone();
    RedirectMapStore::new(store).load().await.unwrap()
}

pub async fn store_map(ctx: &TestContext, pairs: &[(&str, &str)]) {
    let store: Arc<dyn SettingsStore> = ctx.settings.clone();
    let map: RedirectMap = pairs
        .iter()
        .map(|(slug, url)| (slug.to_string(), url.to_string()))
        .collect();
    RedirectMapStore::new(store).save(&map).await.unwrap();
}
