//! Error types for the membership domain.

use thiserror::Error;

use crate::entities::MemberStatus;

/// Errors raised while validating raw input for a new member.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// Error raised when a lifecycle transition is attempted from the wrong
/// status. The member is left unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("member is not in {expected} state")]
pub struct TransitionError {
    /// The status the member had to be in for the transition to be legal.
    pub expected: MemberStatus,
}

/// Result types for domain operations
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type TransitionResult<T> = Result<T, TransitionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let validation_err = ValidationError::InvalidEmail("nope".to_string());
        assert_eq!(validation_err.to_string(), "invalid email address: nope");

        let transition_err = TransitionError {
            expected: MemberStatus::Pending,
        };
        assert_eq!(transition_err.to_string(), "member is not in PENDING state");

        let transition_err = TransitionError {
            expected: MemberStatus::Active,
        };
        assert_eq!(transition_err.to_string(), "member is not in ACTIVE state");
    }
}
