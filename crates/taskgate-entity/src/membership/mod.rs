//! Project membership entities.

pub mod model;
pub mod role;
pub mod status;

pub use model::ProjectMembership;
pub use role::ProjectRole;
pub use status::MembershipStatus;
