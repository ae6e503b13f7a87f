//! Token fingerprinting.

use sha2::{Digest, Sha256};

/// SHA-256 of the token, lowercase hex.
///
/// Revocation keys are built from this digest so the raw credential never
/// appears in the cache keyspace.
pub fn fingerprint(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
