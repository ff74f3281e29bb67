//! # Rollcall Credentials Crate
//!
//! Production [`PasswordEncoder`] implementation for the Rollcall membership
//! domain, backed by salted Argon2. The domain crate only sees the
//! [`PasswordEncoder`] trait; hosts that want hashing-error detail can use
//! the fallible [`hash_password`] / [`verify_password`] functions directly.

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use thiserror::Error;
use tracing::debug;

pub use rollcall_members::PasswordEncoder;

/// Errors from the low-level hashing functions.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("password hashing failed: {0}")]
    Hash(argon2::password_hash::Error),
    #[error("invalid password hash")]
    InvalidHash,
}

/// Hash a password with Argon2 and a freshly generated salt.
pub fn hash_password(raw_password: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(raw_password.as_bytes(), &salt)
        .map_err(HashError::Hash)?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against a PHC-format hash.
///
/// A wrong password is `Ok(false)`; only an unparseable hash is an error.
pub fn verify_password(raw_password: &str, hash: &str) -> Result<bool, HashError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| HashError::InvalidHash)?;
    let argon2 = Argon2::default();

    match argon2.verify_password(raw_password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(_) => Ok(false),
    }
}

/// Salted Argon2 password encoder.
///
/// `encode` produces a PHC-format string with a per-password salt, so two
/// hashes of the same password differ; `matches` reads the salt back out of
/// the hash. An unparseable stored hash verifies as `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Encoder;

impl Argon2Encoder {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordEncoder for Argon2Encoder {
    fn encode(&self, raw_password: &str) -> String {
        // Default parameters with a fresh salt cannot be rejected; a failure
        // here is a bug in the hashing stack, not a caller error.
        match hash_password(raw_password) {
            Ok(hash) => hash,
            Err(err) => unreachable!("argon2 rejected its default parameters: {err}"),
        }
    }

    fn matches(&self, raw_password: &str, password_hash: &str) -> bool {
        match verify_password(raw_password, password_hash) {
            Ok(matched) => matched,
            Err(err) => {
                debug!(%err, "stored password hash could not be parsed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing() {
        let password = "test_password_123";
        let hash = hash_password(password).unwrap();

        assert!(verify_password(password, &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_invalid_hash_is_an_error() {
        let result = verify_password("anything", "not-a-phc-hash");
        assert!(matches!(result, Err(HashError::InvalidHash)));
    }

    #[test]
    fn test_encoder_round_trip() {
        let encoder = Argon2Encoder::new();
        let hash = encoder.encode("secret");

        assert!(encoder.matches("secret", &hash));
        assert!(!encoder.matches("wrong", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let encoder = Argon2Encoder::new();

        let hash1 = encoder.encode("secret");
        let hash2 = encoder.encode("secret");

        assert_ne!(hash1, hash2);
        assert!(encoder.matches("secret", &hash1));
        assert!(encoder.matches("secret", &hash2));
    }

    #[test]
    fn test_garbage_hash_never_matches() {
        let encoder = Argon2Encoder::new();

        assert!(!encoder.matches("secret", "not-a-phc-hash"));
        assert!(!encoder.matches("secret", ""));
    }
}
