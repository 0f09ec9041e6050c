//! Login form payload.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

/// Characters a session token may contain; anything else cannot travel in a cookie.
static TOKEN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\-.~+/=]+$").expect("valid token regex"));

/// Token submitted on the login page.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, max = 256), regex(path = *TOKEN_CHARS))]
    pub token: String,
}
