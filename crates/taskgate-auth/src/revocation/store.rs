//! Revoked access tokens and the current refresh token per member.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error};

use taskgate_cache::keys;
use taskgate_core::error::{AppError, ErrorKind};
use taskgate_core::result::AppResult;
use taskgate_core::traits::CacheProvider;
use taskgate_core::types::MemberId;

/// Value stored under a revoked token's key.
const LOGOUT_MARKER: &str = "logout";

/// Keyed TTL store for revocation markers and current refresh tokens.
///
/// Every read fails closed: a backend error surfaces as
/// `AuthInfrastructureUnavailable` and is never read as "not revoked".
#[derive(Debug, Clone)]
pub struct RevocationStore {
    /// Backing key-value provider.
    cache: Arc<dyn CacheProvider>,
}

impl RevocationStore {
    /// Creates a store over the given provider.
    pub fn new(cache: Arc<dyn CacheProvider>) -> Self {
        Self { cache }
    }

    /// Marks a token fingerprint revoked for `ttl`.
    ///
    /// Revoking an already revoked fingerprint overwrites the marker.
    pub async fn mark_revoked(&self, fingerprint: &str, ttl: Duration) -> AppResult<()> {
        let ttl = ttl.max(Duration::from_secs(1));
        self.cache
            .set(&keys::logout(fingerprint), LOGOUT_MARKER, ttl)
            .await
            .map_err(|e| unavailable("Failed to record revocation", e))?;
        debug!(ttl_secs = ttl.as_secs(), "Access token revoked");
        Ok(())
    }

    /// Returns whether the fingerprint is revoked.
    pub async fn is_revoked(&self, fingerprint: &str) -> AppResult<bool> {
        self.cache
            .exists(&keys::logout(fingerprint))
            .await
            .map_err(|e| unavailable("Failed to check revocation", e))
    }

    /// Stores `token` as the member's current refresh token, replacing any previous one.
    pub async fn set_current_refresh(
        &self,
        member_id: MemberId,
        token: &str,
        ttl: Duration,
    ) -> AppResult<()> {
        self.cache
            .set(&keys::current_refresh(member_id), token, ttl)
            .await
            .map_err(|e| unavailable("Failed to store refresh token", e))
    }

    /// Returns the member's current refresh token, if any.
    pub async fn get_current_refresh(&self, member_id: MemberId) -> AppResult<Option<String>> {
        self.cache
            .get(&keys::current_refresh(member_id))
            .await
            .map_err(|e| unavailable("Failed to read refresh token", e))
    }

    /// Pings the backend.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.cache.health_check().await
    }
}

fn unavailable(context: &str, err: AppError) -> AppError {
    error!(error = %err, "{context}");
    if err.kind == ErrorKind::AuthInfrastructureUnavailable {
        err
    } else {
        AppError::with_source(ErrorKind::AuthInfrastructureUnavailable, context, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use taskgate_cache::memory::MemoryCacheProvider;
    use taskgate_core::config::cache::MemoryCacheConfig;

    fn store() -> RevocationStore {
        let provider = MemoryCacheProvider::new(&MemoryCacheConfig::default());
        RevocationStore::new(Arc::new(provider))
    }

    #[derive(Debug)]
    struct Unreachable;

    #[async_trait]
    impl CacheProvider for Unreachable {
        async fn get(&self, _key: &str) -> AppResult<Option<String>> {
            Err(AppError::internal("connection refused"))
        }

        async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> AppResult<()> {
            Err(AppError::internal("connection refused"))
        }

        async fn exists(&self, _key: &str) -> AppResult<bool> {
            Err(AppError::internal("connection refused"))
        }

        async fn health_check(&self) -> AppResult<bool> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn test_mark_and_check() {
        let store = store();
        assert!(!store.is_revoked("fp").await.unwrap());
        store.mark_revoked("fp", Duration::from_secs(60)).await.unwrap();
        assert!(store.is_revoked("fp").await.unwrap());

        // idempotent
        store.mark_revoked("fp", Duration::from_secs(60)).await.unwrap();
        assert!(store.is_revoked("fp").await.unwrap());
    }

    #[tokio::test]
    async fn test_current_refresh_last_write_wins() {
        let store = store();
        let member = MemberId::new(7);
        assert_eq!(store.get_current_refresh(member).await.unwrap(), None);

        store
            .set_current_refresh(member, "first", Duration::from_secs(60))
            .await
            .unwrap();
        store
            .set_current_refresh(member, "second", Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(
            store.get_current_refresh(member).await.unwrap().as_deref(),
            Some("second")
        );
    }

    #[tokio::test]
    async fn test_backend_failure_is_not_read_as_absent() {
        let store = RevocationStore::new(Arc::new(Unreachable));

        let err = store.is_revoked("fp").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::AuthInfrastructureUnavailable);

        let err = store.get_current_refresh(MemberId::new(1)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::AuthInfrastructureUnavailable);

        assert!(!store.health_check().await.unwrap());
    }
}
