//! Login and logout handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};
use tracing::{info, warn};
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::LoginForm;
use crate::web::middleware::web_auth::AUTH_COOKIE;

/// Template for the login page.
///
/// Renders `templates/login.html` with a token input form and an optional
/// error line.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: Option<String>,
}

fn session_cookie(state: &AppState, value: &str, max_age: u64) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/admin; Max-Age={}",
        AUTH_COOKIE, value, max_age
    );
    if state.secure_cookies {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /admin/login`
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate { error: None }
}

/// Exchanges an admin token for a session cookie.
///
/// # Endpoint
///
/// `POST /admin/login`
///
/// On success sets the `auth_token` cookie and redirects to the editor.
/// Malformed forms re-render with `400`, unknown or revoked tokens with `401`.
pub async fn login_submit(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if form.validate().is_err() {
        let page = LoginTemplate {
            error: Some("Enter a valid access token.".to_string()),
        };
        return Ok((StatusCode::BAD_REQUEST, page).into_response());
    }

    match state.auth_service.authenticate(&form.token).await {
        Ok(principal) => {
            info!(principal = %principal.name, "Admin signed in");
            let cookie = session_cookie(&state, &form.token, state.session_max_age_seconds);
            Ok((
                StatusCode::SEE_OTHER,
                [
                    (header::LOCATION, "/admin/redirects".to_string()),
                    (header::SET_COOKIE, cookie),
                ],
            )
                .into_response())
        }
        Err(AppError::Unauthorized { .. }) => {
            warn!("Rejected admin sign-in with unknown token");
            let page = LoginTemplate {
                error: Some("Invalid or revoked token.".to_string()),
            };
            Ok((StatusCode::UNAUTHORIZED, page).into_response())
        }
        Err(e) => Err(e),
    }
}

/// Clears the session cookie.
///
/// # Endpoint
///
/// `POST /admin/logout`
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::SET_COOKIE, session_cookie(&state, "", 0))],
        Redirect::to("/admin/login"),
    )
}
