//! Password hashing capability injected by the host application.

/// One-way password hashing and verification strategy.
///
/// [`Member`](crate::Member) stores only the output of [`encode`] and checks
/// credentials through [`matches`]; it never sees a hashing scheme. The host
/// picks the implementation (see `rollcall-credentials` for the production
/// Argon2 one).
///
/// [`encode`]: PasswordEncoder::encode
/// [`matches`]: PasswordEncoder::matches
pub trait PasswordEncoder {
    /// Hash a raw password. The scheme is implementation-defined (salted or
    /// deterministic), but `matches` must be able to verify any hash this
    /// produces.
    fn encode(&self, raw_password: &str) -> String;

    /// Check a raw password against a stored hash. Returns `false` for a
    /// mismatch or an unparseable hash rather than erroring.
    fn matches(&self, raw_password: &str, password_hash: &str) -> bool;
}
