//! Password verification seam.

use crate::result::AppResult;

/// Checks a raw password against a stored hash.
///
/// Implementations return `Ok(false)` for a mismatch and reserve `Err` for
/// hashes that cannot be parsed or verifier failures.
pub trait PasswordVerifier: Send + Sync + std::fmt::Debug + 'static {
    /// Returns whether `raw` matches `hash`.
    fn matches(&self, raw: &str, hash: &str) -> AppResult<bool>;
}
