//! Request payloads consumed by the membership domain.

use serde::{Deserialize, Serialize};

/// Request to register a new member.
///
/// Carries raw, unvalidated strings from the upstream request-handling
/// layer; validation happens in [`Member::create`](crate::Member::create).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMemberRequest {
    /// Member email address
    pub email: String,
    /// Display nickname
    pub nickname: String,
    /// Raw password, hashed before it is stored
    pub password: String,
}

impl CreateMemberRequest {
    pub fn new(
        email: impl Into<String>,
        nickname: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            nickname: nickname.into(),
            password: password.into(),
        }
    }
}
