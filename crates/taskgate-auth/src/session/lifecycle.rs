//! Session lifecycle orchestration.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use taskgate_core::error::AppError;
use taskgate_core::result::AppResult;
use taskgate_core::traits::PasswordVerifier;

use crate::directory::MemberDirectory;
use crate::fingerprint::fingerprint;
use crate::jwt::{AccessClaims, AccessGrant, AccessPayload, TokenIssuer, TokenPair};
use crate::principal::Principal;
use crate::revocation::RevocationStore;

use super::bearer::extract_bearer;

/// Issues, rotates, and revokes session credentials.
///
/// Holds no session state of its own: the only shared state is the
/// revocation store, which keeps revoked access tokens and the single
/// current refresh token per member. A new login overwrites that refresh
/// token, so the previous session can no longer reissue; its access token
/// stays valid until it expires.
#[derive(Clone)]
pub struct SessionLifecycle {
    /// Token signing and validation.
    issuer: Arc<TokenIssuer>,
    /// Revocation bookkeeping.
    revocations: Arc<RevocationStore>,
    /// Member lookup.
    members: Arc<dyn MemberDirectory>,
    /// Password check.
    passwords: Arc<dyn PasswordVerifier>,
}

impl std::fmt::Debug for SessionLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionLifecycle")
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl SessionLifecycle {
    /// Creates a session lifecycle over its collaborators.
    pub fn new(
        issuer: Arc<TokenIssuer>,
        revocations: Arc<RevocationStore>,
        members: Arc<dyn MemberDirectory>,
        passwords: Arc<dyn PasswordVerifier>,
    ) -> Self {
        Self {
            issuer,
            revocations,
            members,
            passwords,
        }
    }

    /// Authenticates a member and issues an access and refresh token.
    ///
    /// An unknown identifier and a wrong password fail identically with
    /// `InvalidCredentials`; the cause is only logged.
    pub async fn login(&self, external_id: &str, raw_password: &str) -> AppResult<TokenPair> {
        let Some(member) = self.members.find_active_by_external_id(external_id).await? else {
            warn!(reason = "unknown_identifier", "Login rejected");
            return Err(AppError::invalid_credentials());
        };

        if !self.passwords.matches(raw_password, &member.password_hash)? {
            warn!(member_id = %member.id, reason = "password_mismatch", "Login rejected");
            return Err(AppError::invalid_credentials());
        }

        let tokens = self.issuer.issue_pair(&AccessPayload::from(&member))?;
        self.revocations
            .set_current_refresh(member.id, &tokens.refresh_token, self.issuer.refresh_ttl())
            .await?;

        info!(member_id = %member.id, "Member logged in");
        Ok(tokens)
    }

    /// Revokes an access token until its natural expiry.
    pub async fn logout(&self, access_token: &str) -> AppResult<()> {
        let claims = revoke_token(&self.issuer, &self.revocations, access_token).await?;
        info!(member_id = %claims.mid, "Member logged out");
        Ok(())
    }

    /// Exchanges the current refresh token for a new access token.
    ///
    /// The refresh token is not rotated. It must equal the member's stored
    /// current refresh token exactly, so a token superseded by a newer
    /// login fails with `InvalidToken`.
    pub async fn reissue_access(&self, refresh_token: &str) -> AppResult<AccessGrant> {
        if refresh_token.trim().is_empty() {
            return Err(AppError::invalid_token("Refresh token is required"));
        }

        // Expired refresh tokens cannot be exchanged either.
        let claims = self.issuer.validate_refresh(refresh_token).map_err(|e| {
            if e.is_token_expired() {
                AppError::invalid_token("Refresh token has expired")
            } else {
                e
            }
        })?;

        let member = self
            .members
            .find_active_by_external_id(&claims.sub)
            .await?
            .ok_or_else(|| AppError::member_not_found("Member no longer exists"))?;

        let current = self.revocations.get_current_refresh(member.id).await?;
        if current.as_deref() != Some(refresh_token) {
            warn!(member_id = %member.id, "Superseded or unknown refresh token presented");
            return Err(AppError::invalid_token("Refresh token is not current"));
        }

        let grant = self.issuer.issue_access(&AccessPayload::from(&member))?;
        info!(member_id = %member.id, "Access token reissued");
        Ok(grant)
    }

    /// Validates an access token and checks it has not been revoked.
    pub async fn authenticate_request(&self, access_token: &str) -> AppResult<Principal> {
        authenticate_token(&self.issuer, &self.revocations, access_token).await
    }

    /// Authenticates the value of an `Authorization` header.
    pub async fn authenticate_header(&self, header: Option<&str>) -> AppResult<Principal> {
        let token = extract_bearer(header)?;
        self.authenticate_request(token).await
    }
}

/// Validates an access token and checks its fingerprint against the
/// revocation store. Needs no member lookup: the principal comes from the
/// token claims alone.
pub async fn authenticate_token(
    issuer: &TokenIssuer,
    revocations: &RevocationStore,
    access_token: &str,
) -> AppResult<Principal> {
    let claims = issuer.validate_access(access_token)?;

    if revocations.is_revoked(&fingerprint(access_token)).await? {
        return Err(AppError::invalid_token("Token has been revoked"));
    }

    Ok(Principal::from(claims))
}

/// Marks a valid access token revoked until the issuer stops accepting it
/// (`exp` plus the clock-skew leeway) and returns its claims. Fails with `InvalidToken` or `ExpiredToken` when the
/// token cannot be validated.
pub async fn revoke_token(
    issuer: &TokenIssuer,
    revocations: &RevocationStore,
    access_token: &str,
) -> AppResult<AccessClaims> {
    let claims = issuer.validate_access(access_token)?;
    let ttl = claims.remaining_at(Utc::now()) + issuer.leeway();

    revocations
        .mark_revoked(&fingerprint(access_token), ttl)
        .await?;
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration as StdDuration;

    use chrono::Duration;
    use taskgate_cache::memory::MemoryCacheProvider;
    use taskgate_core::config::AuthConfig;
    use taskgate_core::config::cache::MemoryCacheConfig;
    use taskgate_core::error::ErrorKind;
    use taskgate_core::types::MemberId;
    use taskgate_entity::Rank;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(&AuthConfig {
            jwt_secret: "lifecycle-test-secret".to_string(),
            jwt_access_ttl_minutes: 1,
            clock_skew_leeway_seconds: 5,
            ..AuthConfig::default()
        })
    }

    fn store() -> RevocationStore {
        let provider = MemoryCacheProvider::new(&MemoryCacheConfig::default());
        RevocationStore::new(Arc::new(provider))
    }

    fn payload() -> AccessPayload {
        AccessPayload {
            subject: "E1001".to_string(),
            member_id: MemberId::new(1),
            department: "Platform".to_string(),
            role: "MEMBER".to_string(),
            rank: Some(Rank::new("STAFF", 2)),
        }
    }

    #[tokio::test]
    async fn test_revoked_token_stays_rejected_through_leeway() {
        let issuer = issuer();
        let store = store();

        // Expires within two seconds; still accepted for five more.
        let grant = issuer
            .issue_access_at(&payload(), Utc::now() - Duration::seconds(58))
            .unwrap();
        revoke_token(&issuer, &store, &grant.access_token).await.unwrap();

        tokio::time::sleep(StdDuration::from_millis(3500)).await;
        assert!(Utc::now() > grant.access_expires_at);

        let err = authenticate_token(&issuer, &store, &grant.access_token)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
        assert!(store.is_revoked(&fingerprint(&grant.access_token)).await.unwrap());
    }

    #[tokio::test]
    async fn test_revoke_returns_claims() {
        let issuer = issuer();
        let store = store();
        let grant = issuer.issue_access(&payload()).unwrap();

        let claims = revoke_token(&issuer, &store, &grant.access_token).await.unwrap();
        assert_eq!(claims.mid, MemberId::new(1));

        let err = authenticate_token(&issuer, &store, &grant.access_token)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }
}
