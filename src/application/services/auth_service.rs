//! Authentication service for admin token validation.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::Principal;
use crate::domain::entities::principal::parse_capabilities;
use crate::domain::repositories::{ApiToken, TokenRepository};
use crate::error::AppError;
use crate::utils::token_generator::generate_token;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Service for authenticating admin requests via tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before storage
/// and comparison. An attacker with read-only access to the database cannot verify
/// or forge tokens without the server-side secret.
pub struct AuthService {
    repository: Arc<dyn TokenRepository>,
    signing_secret: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - token repository
    /// - `signing_secret` - HMAC key; must match the value used when tokens were created
    pub fn new(repository: Arc<dyn TokenRepository>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    pub fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Authenticates a raw token and returns the principal it belongs to.
    ///
    /// On success the `last_used` timestamp is refreshed; failures to do so
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown or revoked.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn authenticate(&self, token: &str) -> Result<Principal, AppError> {
        let token_hash = self.hash_token(token);

        let Some(stored) = self.repository.find_active(&token_hash).await? else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid or revoked token"}),
            ));
        };

        let _ = self.repository.update_last_used(&token_hash).await;

        Ok(Principal {
            token_id: stored.id,
            name: stored.name,
            capabilities: parse_capabilities(&stored.capabilities),
        })
    }

    /// Issues a new token and stores its hash.
    ///
    /// Returns the stored record and the raw token, which is never persisted
    /// and cannot be recovered later.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on a hash collision.
    pub async fn issue_token(
        &self,
        name: &str,
        raw_token: Option<String>,
        capabilities: Vec<String>,
    ) -> Result<(ApiToken, String), AppError> {
        let raw = raw_token.unwrap_or_else(generate_token);
        let token_hash = self.hash_token(&raw);
        let stored = self
            .repository
            .create_token(name, &token_hash, capabilities)
            .await?;
        Ok((stored, raw))
    }
}
