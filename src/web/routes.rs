//! Admin route configuration.

use crate::state::AppState;
use crate::web::handlers::{login_page, login_submit, logout, redirects_page, save_redirects};
use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

/// Admin routes requiring a session.
///
/// Protected via [`crate::web::middleware::web_auth`].
///
/// # Endpoints
///
/// - `GET  /`           - Redirects to the editor
/// - `GET  /redirects`  - Draft redirect editor
/// - `POST /redirects`  - Save the redirect map
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/admin/redirects") }))
        .route("/redirects", get(redirects_page).post(save_redirects))
}

/// Admin routes without authentication.
///
/// # Endpoints
///
/// - `GET  /login`  - Login page
/// - `POST /login`  - Exchange a token for a session cookie
/// - `POST /logout` - Clear the session cookie
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login_submit))
        .route("/logout", post(logout))
}
