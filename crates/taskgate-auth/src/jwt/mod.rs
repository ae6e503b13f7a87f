//! Signed token issuing, validation, and claims.

pub mod claims;
pub mod issuer;

pub use claims::{AccessClaims, AccessPayload, RefreshClaims, TokenType};
pub use issuer::{AccessGrant, TokenIssuer, TokenPair};
