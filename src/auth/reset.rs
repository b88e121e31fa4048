/**
 * Password Reset Tokens
 *
 * Generates the random tokens mailed out by forgot-password and the hashes
 * stored in their place. The raw token only ever exists in the reset link;
 * the database sees the SHA-256 hex digest.
 */

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// How long a reset token stays valid
pub const RESET_TOKEN_TTL_MINUTES: i64 = 10;

/// Generate a new raw reset token (32 random bytes, URL-safe base64).
pub fn new_reset_token() -> String {
    let mut raw = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut raw);
    URL_SAFE_NO_PAD.encode(raw)
}

/// Hash a raw token for storage or lookup.
pub fn hash_reset_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(new_reset_token(), new_reset_token());
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = new_reset_token();
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_hash_is_deterministic() {
        let token = new_reset_token();
        assert_eq!(hash_reset_token(&token), hash_reset_token(&token));
    }

    #[test]
    fn test_hash_differs_from_token() {
        let token = new_reset_token();
        let hash = hash_reset_token(&token);
        assert_ne!(hash, token);
        // SHA-256 hex digest
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
