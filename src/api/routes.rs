//! Public route configuration.

use crate::api::handlers::health_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Unauthenticated JSON routes.
///
/// # Endpoints
///
/// - `GET /health` - Database and settings store checks
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
