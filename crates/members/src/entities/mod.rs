//! Domain entities for the membership system.
//!
//! Pure domain objects without persistence or API concerns: the validated
//! [`Email`] value type and the [`Member`] aggregate with its lifecycle
//! state machine.

pub mod email;
pub mod member;

// Re-export all entity types
pub use email::Email;
pub use member::{Member, MemberStatus};
