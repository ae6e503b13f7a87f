//! Cache key builders for the revocation store.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application writes. Backend-level prefixes
//! (e.g. `taskgate:` on Redis) are applied by the provider on top.

use taskgate_core::types::MemberId;

/// Key marking an access token as logged out, by its fingerprint.
pub fn logout(fingerprint: &str) -> String {
    format!("logout:{fingerprint}")
}

/// Key holding the single current refresh token of a member.
pub fn current_refresh(member_id: MemberId) -> String {
    format!("refresh:{member_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logout_key() {
        assert_eq!(logout("ab12"), "logout:ab12");
    }

    #[test]
    fn test_refresh_key() {
        assert_eq!(current_refresh(MemberId::new(7)), "refresh:7");
    }
}
