//! Hierarchical authorization checks.

pub mod enforcer;
pub mod window;

pub use enforcer::{AuthorizationGate, Requirement};
pub use window::MembershipWindowValidator;
