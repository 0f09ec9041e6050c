//! Cookie-based authentication middleware for the admin pages.

use axum::{
    extract::{Request, State},
    http::header::COOKIE,
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;

/// Name of the session cookie holding the raw admin token.
pub const AUTH_COOKIE: &str = "auth_token";

/// Extracts the `auth_token` value from a `Cookie` header.
///
/// Handles multiple cookies by splitting on semicolons and ignoring the rest.
fn token_from_cookies(cookie_header: &str) -> Option<&str> {
    cookie_header.split(';').find_map(|cookie| {
        let mut parts = cookie.trim().splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(AUTH_COOKIE), Some(value)) if !value.is_empty() => Some(value),
            _ => None,
        }
    })
}

/// Authenticates admin requests using the session cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: auth_token=<token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract `auth_token` cookie from request
/// 2. Validate token via [`crate::application::services::AuthService`]
/// 3. On success, insert the [`crate::domain::entities::Principal`] into request
///    extensions and continue
/// 4. On failure or missing token, redirect to `/admin/login`
///
/// Capability checks are left to the handlers.
///
/// # Errors
///
/// Returns `Redirect` to `/admin/login` if the cookie is missing or the
/// token is unknown or revoked.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let token = req
        .headers()
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(token_from_cookies)
        .map(str::to_string);

    let Some(token) = token else {
        return Err(Redirect::to("/admin/login"));
    };

    match st.auth_service.authenticate(&token).await {
        Ok(principal) => {
            req.extensions_mut().insert(principal);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::debug!("Admin session rejected: {}", e);
            Err(Redirect::to("/admin/login"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_cookies() {
        assert_eq!(token_from_cookies("auth_token=abc"), Some("abc"));
        assert_eq!(
            token_from_cookies("theme=dark; auth_token=abc==; lang=en"),
            Some("abc==")
        );
        assert_eq!(token_from_cookies("theme=dark"), None);
        assert_eq!(token_from_cookies("auth_token="), None);
    }
}
