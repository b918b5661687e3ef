//! Secret hashing for the account password and the unlock PIN.
//!
//! Secrets are hashed with Argon2id under a fresh random salt and stored as
//! PHC strings (`$argon2id$v=19$...`), so the salt and parameters travel with
//! the hash. Verification re-derives with the embedded salt.

use crate::error::{JournalError, Result};
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::RngCore;

const SALT_SIZE: usize = 16; // 128 bits

/// Hash a secret into a self-describing PHC string.
pub fn hash_secret(secret: &str) -> Result<String> {
    let mut salt = [0u8; SALT_SIZE];
    rand::thread_rng().fill_bytes(&mut salt);

    let salt_string = SaltString::encode_b64(&salt)
        .map_err(|e| JournalError::Hash(format!("Salt encoding failed: {}", e)))?;

    let hash = Argon2::default()
        .hash_password(secret.as_bytes(), &salt_string)
        .map_err(|e| JournalError::Hash(format!("Hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Check a secret against a stored PHC string.
///
/// A stored value that is not a valid PHC string (e.g. a legacy checksum)
/// never verifies.
pub fn verify_secret(secret: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => {
            tracing::warn!("stored hash is not a PHC string; treating as mismatch");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verify() {
        let hash = hash_secret("correct horse").unwrap();
        assert!(verify_secret("correct horse", &hash));
        assert!(!verify_secret("wrong horse", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_secret("1234").unwrap();
        let b = hash_secret("1234").unwrap();
        assert_ne!(a, b);
        assert!(verify_secret("1234", &a));
        assert!(verify_secret("1234", &b));
    }

    #[test]
    fn test_hash_is_phc_argon2id() {
        let hash = hash_secret("pw").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_legacy_checksum_never_verifies() {
        // What the old rolling checksum produced for "a".
        assert!(!verify_secret("a", "61"));
    }

    #[test]
    fn test_unicode_and_empty_secrets() {
        let hash = hash_secret("пароль密码").unwrap();
        assert!(verify_secret("пароль密码", &hash));

        let empty = hash_secret("").unwrap();
        assert!(verify_secret("", &empty));
        assert!(!verify_secret(" ", &empty));
    }
}
