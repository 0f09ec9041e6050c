//! Time-ticked CSRF tokens for admin forms.
//!
//! A token is bound to an action name, the principal's token id and a tick
//! counter. One tick is half the configured lifetime; a token verifies during
//! the tick it was issued in and the following one.

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::entities::Principal;

type HmacSha256 = Hmac<Sha256>;

/// Number of MAC bytes kept in a token (hex-encoded to 32 characters).
const TOKEN_BYTES: usize = 16;

/// Issues and verifies CSRF tokens with HMAC-SHA256.
pub struct CsrfService {
    secret: String,
    lifetime_seconds: i64,
}

impl CsrfService {
    pub fn new(secret: String, lifetime_seconds: u64) -> Self {
        Self {
            secret,
            lifetime_seconds: lifetime_seconds.max(2) as i64,
        }
    }

    fn tick(&self, now: i64) -> i64 {
        let half = self.lifetime_seconds / 2;
        (now + half - 1).div_euclid(half)
    }

    fn mac(&self, action: &str, principal: &Principal, tick: i64) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(format!("{}|{}|{}", action, principal.token_id, tick).as_bytes());
        mac
    }

    /// Issues a token for `action` on behalf of `principal`.
    pub fn issue(&self, action: &str, principal: &Principal) -> String {
        self.issue_at(action, principal, Utc::now().timestamp())
    }

    fn issue_at(&self, action: &str, principal: &Principal, now: i64) -> String {
        let tag = self.mac(action, principal, self.tick(now)).finalize().into_bytes();
        hex::encode(&tag[..TOKEN_BYTES])
    }

    /// Verifies a submitted token in constant time.
    pub fn verify(&self, action: &str, principal: &Principal, token: &str) -> bool {
        self.verify_at(action, principal, token, Utc::now().timestamp())
    }

    fn verify_at(&self, action: &str, principal: &Principal, token: &str, now: i64) -> bool {
        let Ok(bytes) = hex::decode(token) else {
            return false;
        };
        if bytes.len() != TOKEN_BYTES {
            return false;
        }

        let tick = self.tick(now);
        [tick, tick - 1].into_iter().any(|t| {
            self.mac(action, principal, t)
                .verify_truncated_left(&bytes)
                .is_ok()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Capability;

    const DAY: i64 = 86_400;

    fn principal(token_id: i64) -> Principal {
        Principal {
            token_id,
            name: "editor".to_string(),
            capabilities: vec![Capability::ManageSettings],
        }
    }

    fn service() -> CsrfService {
        CsrfService::new("csrf-secret".to_string(), DAY as u64)
    }

    #[test]
    fn test_issued_token_verifies() {
        let csrf = service();
        let now = 1_800_000_000;
        let token = csrf.issue_at("save_redirects", &principal(1), now);

        assert_eq!(token.len(), 32);
        assert!(csrf.verify_at("save_redirects", &principal(1), &token, now));
    }

    #[test]
    fn test_token_bound_to_action_and_principal() {
        let csrf = service();
        let now = 1_800_000_000;
        let token = csrf.issue_at("save_redirects", &principal(1), now);

        assert!(!csrf.verify_at("delete_everything", &principal(1), &token, now));
        assert!(!csrf.verify_at("save_redirects", &principal(2), &token, now));
    }

    #[test]
    fn test_token_valid_for_next_tick_only() {
        let csrf = service();
        let now = 1_800_000_000;
        let token = csrf.issue_at("save_redirects", &principal(1), now);

        assert!(csrf.verify_at("save_redirects", &principal(1), &token, now + DAY / 2));
        assert!(!csrf.verify_at("save_redirects", &principal(1), &token, now + DAY + 1));
    }

    #[test]
    fn test_secret_matters() {
        let now = 1_800_000_000;
        let token = service().issue_at("save_redirects", &principal(1), now);
        let other = CsrfService::new("other-secret".to_string(), DAY as u64);

        assert!(!other.verify_at("save_redirects", &principal(1), &token, now));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let csrf = service();
        let now = 1_800_000_000;

        assert!(!csrf.verify_at("save_redirects", &principal(1), "", now));
        assert!(!csrf.verify_at("save_redirects", &principal(1), "not-hex", now));
        assert!(!csrf.verify_at("save_redirects", &principal(1), "abcd", now));
    }
}
