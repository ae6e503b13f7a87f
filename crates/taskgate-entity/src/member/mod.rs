//! Organization member entities.

pub mod model;
pub mod rank;
pub mod role;

pub use model::Member;
pub use rank::Rank;
pub use role::MemberRole;
