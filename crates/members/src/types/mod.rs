//! Shared types and interfaces for the membership domain.
//!
//! This module contains the error definitions, request payloads, and the
//! password-hashing capability contract used across the crate.

pub mod encoder;
pub mod errors;
pub mod requests;

// Re-export common types
pub use encoder::PasswordEncoder;
pub use errors::{TransitionError, TransitionResult, ValidationError, ValidationResult};
pub use requests::CreateMemberRequest;
