//! Public page handler: draft redirects, published content, not-found.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::application::services::RequestOutcome;
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "content.html")]
struct ContentTemplate {
    title: String,
    body: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    path: String,
}

fn not_found(uri: &Uri) -> Response {
    let page = NotFoundTemplate {
        path: uri.path().to_string(),
    };
    (StatusCode::NOT_FOUND, page).into_response()
}

/// Answers every request that no other route claims.
///
/// # Request Flow
///
/// 1. Resolve the content item owning the trimmed request path
/// 2. Match the request against the redirect map
/// 3. Return `301 Moved Permanently` on a match
/// 4. Otherwise render the item if it is published, or the not-found page
///
/// Store failures never surface here; they degrade to not-found.
pub async fn public_handler(State(state): State<AppState>, uri: Uri) -> Response {
    match state.redirect_service.resolve(uri.path()).await {
        RequestOutcome::Redirect(redirect) => match HeaderValue::from_str(&redirect.location) {
            Ok(location) => {
                (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
            }
            Err(_) => {
                error!("Stored redirect target is not a valid header: {:?}", redirect.location);
                not_found(&uri)
            }
        },
        RequestOutcome::Render(item) => ContentTemplate {
            title: item.title,
            body: item.body,
        }
        .into_response(),
        RequestOutcome::NotFound => not_found(&uri),
    }
}
