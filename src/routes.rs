//! Top-level router configuration combining public and admin routes.
//!
//! # Route Structure
//!
//! - `GET  /health`            - Health check: database, settings store (public)
//! - `GET|POST /admin/login`   - Admin sign-in (public)
//! - `POST /admin/logout`      - Admin sign-out (public)
//! - `GET|POST /admin/redirects` - Draft redirect editor (cookie session required)
//! - everything else           - Draft redirect, published content or not-found
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/admin` only
//! - **Authentication** - Cookie session on protected admin pages
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::public_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The rate limiter keys on the peer address, so the router must be served
/// with `into_make_service_with_connect_info::<SocketAddr>`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes and middleware without trailing-slash normalisation.
pub fn router(state: AppState) -> Router {
    let admin_protected = web::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ))
        .layer(rate_limit::layer());

    let admin_public = web::routes::public_routes().layer(rate_limit::login_layer());

    let admin_router = Router::new().merge(admin_protected).merge(admin_public);

    Router::new()
        .merge(api::routes::public_routes())
        .nest("/admin", admin_router)
        .fallback(public_handler)
        .with_state(state)
        .layer(tracing::layer())
}
