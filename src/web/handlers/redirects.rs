//! Draft redirect editor.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension, Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::application::services::EditorRow;
use crate::domain::entities::{Capability, Principal};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::MappingSubmission;

/// CSRF action the editor form is bound to.
pub const SAVE_REDIRECTS_ACTION: &str = "save_redirects";

#[derive(Template, WebTemplate)]
#[template(path = "redirects.html")]
struct RedirectsTemplate {
    principal: String,
    rows: Vec<EditorRow>,
    mappings: Vec<(String, String)>,
    nonce: String,
    saved: bool,
}

async fn render_editor(
    state: &AppState,
    principal: &Principal,
    saved: bool,
) -> Result<Response, AppError> {
    let view = state.mapping_service.editor_view().await?;

    let mappings = view
        .current
        .iter()
        .map(|(slug, url)| (slug.to_string(), url.to_string()))
        .collect();

    Ok(RedirectsTemplate {
        principal: principal.name.clone(),
        rows: view.rows,
        mappings,
        nonce: state.csrf_service.issue(SAVE_REDIRECTS_ACTION, principal),
        saved,
    }
    .into_response())
}

/// Renders the editor.
///
/// # Endpoint
///
/// `GET /admin/redirects`
///
/// Principals without `manage_settings` get an empty `403`.
pub async fn redirects_page(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Response, AppError> {
    if !principal.can(Capability::ManageSettings) {
        return Ok(StatusCode::FORBIDDEN.into_response());
    }

    render_editor(&state, &principal, false).await
}

/// Replaces the redirect map with the submitted rows.
///
/// # Endpoint
///
/// `POST /admin/redirects`
///
/// A missing or stale `redirect_nonce` leaves the stored map untouched and
/// re-renders the editor without the success banner.
pub async fn save_redirects(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    if !principal.can(Capability::ManageSettings) {
        return Ok(StatusCode::FORBIDDEN.into_response());
    }

    let submission = MappingSubmission::from_fields(fields);

    let verified = submission
        .nonce
        .as_deref()
        .is_some_and(|token| state.csrf_service.verify(SAVE_REDIRECTS_ACTION, &principal, token));

    if !verified {
        warn!(principal = %principal.name, "Rejected redirect update with invalid CSRF token");
        return render_editor(&state, &principal, false).await;
    }

    state
        .mapping_service
        .apply_submission(&submission.entries)
        .await?;

    render_editor(&state, &principal, true).await
}
