//! Session lifecycle: login, logout, access reissue, request authentication.

pub mod bearer;
pub mod lifecycle;

pub use bearer::extract_bearer;
pub use lifecycle::{SessionLifecycle, authenticate_token, revoke_token};
