//! # Rollcall Members Crate
//!
//! Membership domain core for the Rollcall registration system: the
//! [`Member`] aggregate, its [`Email`] identity, and the three-state
//! activation lifecycle (pending → active → deactivated).
//!
//! ## Architecture
//!
//! - **Entities**: Domain models ([`Member`], [`Email`], [`MemberStatus`])
//! - **Types**: Errors, request payloads, and the [`PasswordEncoder`]
//!   capability contract
//! - **Testing**: A fake encoder for exercising the domain in tests
//!
//! Persistence, transport, and DTO mapping are host concerns; the crate is
//! synchronous and in-memory. Callers sharing a [`Member`] across threads
//! are responsible for their own mutual exclusion.
//!
//! ## Usage
//!
//! ```
//! use rollcall_members::{CreateMemberRequest, Member, MemberStatus};
//! use rollcall_members::testing::FakePasswordEncoder;
//!
//! let request = CreateMemberRequest::new("user@example.com", "Nick", "secret");
//! let mut member = Member::create(request, &FakePasswordEncoder)?;
//! assert_eq!(member.status(), MemberStatus::Pending);
//!
//! member.activate()?;
//! assert!(member.is_active());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod entities;
pub mod testing;
pub mod types;

// Re-export main types for convenience
pub use entities::{Email, Member, MemberStatus};
pub use types::{
    CreateMemberRequest, PasswordEncoder, TransitionError, TransitionResult, ValidationError,
    ValidationResult,
};
