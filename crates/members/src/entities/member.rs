//! Member aggregate and its lifecycle state machine.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entities::Email;
use crate::types::{
    CreateMemberRequest, PasswordEncoder, TransitionError, TransitionResult, ValidationResult,
};

/// Member lifecycle status.
///
/// Transitions are one-directional: `Pending` → `Active` → `Deactivated`,
/// with `Deactivated` terminal. There is no reactivation path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Pending,
    Active,
    Deactivated,
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MemberStatus::Pending => "PENDING",
            MemberStatus::Active => "ACTIVE",
            MemberStatus::Deactivated => "DEACTIVATED",
        };
        f.write_str(name)
    }
}

impl From<&str> for MemberStatus {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "active" => MemberStatus::Active,
            "deactivated" => MemberStatus::Deactivated,
            _ => MemberStatus::Pending,
        }
    }
}

impl From<MemberStatus> for String {
    fn from(status: MemberStatus) -> Self {
        match status {
            MemberStatus::Pending => "pending".to_string(),
            MemberStatus::Active => "active".to_string(),
            MemberStatus::Deactivated => "deactivated".to_string(),
        }
    }
}

/// A membership account: identity, credential, and lifecycle status.
///
/// Fields are private; every mutation goes through the methods below, so the
/// status guards and the hashed-credential invariant cannot be bypassed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    email: Email,
    nickname: String,
    password_hash: String,
    status: MemberStatus,
}

impl Member {
    /// Register a new member in `Pending` status.
    ///
    /// The email is validated through [`Email::new`]; the raw password is
    /// hashed by the supplied encoder and never stored. Nickname and password
    /// are deliberately not validated here.
    pub fn create(
        request: CreateMemberRequest,
        encoder: &dyn PasswordEncoder,
    ) -> ValidationResult<Self> {
        let email = Email::new(request.email)?;
        let password_hash = encoder.encode(&request.password);

        debug!(email = %email, "member created");
        Ok(Self {
            email,
            nickname: request.nickname,
            password_hash,
            status: MemberStatus::Pending,
        })
    }

    /// Move a `Pending` member to `Active`.
    ///
    /// Fails without mutating when the member is in any other status.
    pub fn activate(&mut self) -> TransitionResult<()> {
        if self.status != MemberStatus::Pending {
            return Err(TransitionError {
                expected: MemberStatus::Pending,
            });
        }

        self.status = MemberStatus::Active;
        debug!(email = %self.email, "member activated");
        Ok(())
    }

    /// Move an `Active` member to the terminal `Deactivated` status.
    ///
    /// Fails without mutating when the member is in any other status.
    pub fn deactivate(&mut self) -> TransitionResult<()> {
        if self.status != MemberStatus::Active {
            return Err(TransitionError {
                expected: MemberStatus::Active,
            });
        }

        self.status = MemberStatus::Deactivated;
        debug!(email = %self.email, "member deactivated");
        Ok(())
    }

    /// Check a raw password against the stored hash. Never fails; a mismatch
    /// is just `false`.
    pub fn verify_password(&self, raw_password: &str, encoder: &dyn PasswordEncoder) -> bool {
        encoder.matches(raw_password, &self.password_hash)
    }

    /// Overwrite the nickname. Legal in any status.
    pub fn change_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = nickname.into();
    }

    /// Replace the stored credential with the hash of a new raw password.
    /// Legal in any status.
    pub fn change_password(&mut self, raw_password: &str, encoder: &dyn PasswordEncoder) {
        self.password_hash = encoder.encode(raw_password);
        debug!(email = %self.email, "member password changed");
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// The hashed credential. Never a raw password.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn status(&self) -> MemberStatus {
        self.status
    }

    /// True iff the member is in `Active` status.
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }
}
