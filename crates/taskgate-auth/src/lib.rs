//! # taskgate-auth
//!
//! Stateless session credentials and the layered permission checks that
//! guard every mutation in TaskGate.
//!
//! ## Modules
//!
//! - `jwt`: signed access and refresh token issuing and validation
//! - `fingerprint`: one-way token digests used as revocation keys
//! - `revocation`: revoked-token markers and the current refresh token per member
//! - `password`: Argon2id password verification
//! - `directory`: member and membership lookups consumed from persistence
//! - `session`: login, logout, access reissue, and request authentication
//! - `gate`: rank, project-role, and ownership checks plus date windows

pub mod directory;
pub mod fingerprint;
pub mod gate;
pub mod jwt;
pub mod password;
pub mod principal;
pub mod revocation;
pub mod session;

pub use directory::{MemberDirectory, MembershipDirectory};
pub use fingerprint::fingerprint;
pub use gate::{AuthorizationGate, MembershipWindowValidator, Requirement};
pub use jwt::{AccessClaims, AccessGrant, AccessPayload, RefreshClaims, TokenIssuer, TokenPair, TokenType};
pub use password::PasswordHasher;
pub use principal::Principal;
pub use revocation::RevocationStore;
pub use session::{SessionLifecycle, authenticate_token, extract_bearer, revoke_token};
