//! Test-support password encoder.
//!
//! Compiled unconditionally so integration tests of downstream crates can
//! exercise [`Member`](crate::Member) without a real hashing scheme. Not for
//! production use: the "hash" is trivially reversible.

use crate::types::PasswordEncoder;

/// Encoder whose scheme is plain uppercasing.
///
/// `encode("secret")` yields `"SECRET"`, and `matches` uppercases the raw
/// password before comparing, so the encode-then-matches contract holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakePasswordEncoder;

impl PasswordEncoder for FakePasswordEncoder {
    fn encode(&self, raw_password: &str) -> String {
        raw_password.to_uppercase()
    }

    fn matches(&self, raw_password: &str, password_hash: &str) -> bool {
        raw_password.to_uppercase() == password_hash
    }
}
