//! URL sanitization for submitted redirect targets.
//!
//! Produces an absolute `http`/`https` URL from admin input, or rejects it.

use url::Url;

/// Errors that can occur during URL sanitization.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlSanitizeError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Sanitizes a submitted URL into its stored form.
///
/// # Rules
///
/// 1. Surrounding whitespace and control characters are removed; inner spaces
///    become `%20`
/// 2. Input starting with `/`, `?` or `#` is resolved against `site_url`
/// 3. Other input without a scheme gets `http://` prepended
/// 4. Only HTTP and HTTPS survive, and a host is required
///
/// The result is the serialized [`Url`], so sanitizing an already sanitized
/// URL returns it unchanged.
///
/// # Errors
///
/// Returns [`UrlSanitizeError::Empty`] when nothing is left after cleaning,
/// [`UrlSanitizeError::UnsupportedProtocol`] for schemes like `javascript:`,
/// and [`UrlSanitizeError::InvalidFormat`] for unparsable input.
pub fn sanitize_url(input: &str, site_url: &Url) -> Result<String, UrlSanitizeError> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .replace(' ', "%20");

    if cleaned.is_empty() {
        return Err(UrlSanitizeError::Empty);
    }

    let url = if cleaned.starts_with(['/', '?', '#']) {
        site_url
            .join(&cleaned)
            .map_err(|e| UrlSanitizeError::InvalidFormat(e.to_string()))?
    } else {
        match Url::parse(&cleaned) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Url::parse(&format!("http://{}", cleaned))
                    .map_err(|e| UrlSanitizeError::InvalidFormat(e.to_string()))?
            }
            Err(e) => return Err(UrlSanitizeError::InvalidFormat(e.to_string())),
        }
    };

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlSanitizeError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlSanitizeError::MissingHost);
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Url {
        Url::parse("https://example.com/").unwrap()
    }

    #[test]
    fn test_absolute_url_kept() {
        assert_eq!(
            sanitize_url("https://example.com/spring-sale/", &site()).unwrap(),
            "https://example.com/spring-sale/"
        );
    }

    #[test]
    fn test_sanitizing_is_idempotent() {
        let once = sanitize_url("  HTTPS://Example.COM/a b/  ", &site()).unwrap();
        assert_eq!(once, "https://example.com/a%20b/");
        assert_eq!(sanitize_url(&once, &site()).unwrap(), once);
    }

    #[test]
    fn test_empty_and_whitespace_rejected() {
        assert_eq!(sanitize_url("", &site()), Err(UrlSanitizeError::Empty));
        assert_eq!(sanitize_url("   \t", &site()), Err(UrlSanitizeError::Empty));
    }

    #[test]
    fn test_relative_path_resolved_against_site() {
        assert_eq!(
            sanitize_url("/about/", &site()).unwrap(),
            "https://example.com/about/"
        );
    }

    #[test]
    fn test_scheme_less_host_gets_http() {
        assert_eq!(
            sanitize_url("other.org/landing", &site()).unwrap(),
            "http://other.org/landing"
        );
    }

    #[test]
    fn test_dangerous_protocols_rejected() {
        assert_eq!(
            sanitize_url("javascript:alert(1)", &site()),
            Err(UrlSanitizeError::UnsupportedProtocol)
        );
        assert_eq!(
            sanitize_url("data:text/html,hi", &site()),
            Err(UrlSanitizeError::UnsupportedProtocol)
        );
        assert_eq!(
            sanitize_url("ftp://files.example.com/x", &site()),
            Err(UrlSanitizeError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_control_characters_removed() {
        assert_eq!(
            sanitize_url("https://example.com/\u{0}x\n", &site()).unwrap(),
            "https://example.com/x"
        );
    }
}
