//! # taskgate-entity
//!
//! Value types for the entities the auth core references but does not own:
//! organization members with their rank, project memberships with their
//! role, and the inclusive date windows memberships and tasks live in.
//! Persistence of these types is the job of the surrounding services.

pub mod member;
pub mod membership;
pub mod window;

pub use member::{Member, MemberRole, Rank};
pub use membership::{MembershipStatus, ProjectMembership, ProjectRole};
pub use window::DateWindow;

/// Error returned when parsing an enum from its string form fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {what}: '{value}'")]
pub struct ParseEnumError {
    /// Which enum was being parsed.
    pub what: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(what: &'static str, value: &str) -> Self {
        Self {
            what,
            value: value.to_string(),
        }
    }
}
