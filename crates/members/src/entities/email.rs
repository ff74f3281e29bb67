//! Email address value type.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::{ValidationError, ValidationResult};

/// Structural pattern an address must fully match. Purely syntactic: no
/// trimming, no case folding, no DNS/MX lookups.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+(?:\.[a-zA-Z0-9._%+-]+)*@(?:[a-zA-Z0-9.-]+\.)+[a-zA-Z]{2,7}$")
        .expect("email pattern is a valid regex")
});

/// A validated email address.
///
/// Construction goes through [`Email::new`], so holding an `Email` is proof
/// the wrapped string matched the format. Equality and hashing compare the
/// address itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email {
    address: String,
}

impl Email {
    /// Validate a raw address and wrap it.
    pub fn new(address: impl Into<String>) -> ValidationResult<Self> {
        let address = address.into();
        if !EMAIL_PATTERN.is_match(&address) {
            return Err(ValidationError::InvalidEmail(address));
        }
        Ok(Self { address })
    }

    /// The address exactly as it was validated.
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(address: String) -> ValidationResult<Self> {
        Self::new(address)
    }
}

impl FromStr for Email {
    type Err = ValidationError;

    fn from_str(address: &str) -> ValidationResult<Self> {
        Self::new(address)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.address
    }
}
