//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use taskgate_auth::{
    AuthorizationGate, MemberDirectory, MembershipDirectory, PasswordHasher, RevocationStore,
    SessionLifecycle, TokenIssuer,
};
use taskgate_cache::CacheManager;
use taskgate_cache::memory::MemoryCacheProvider;
use taskgate_core::config::AppConfig;
use taskgate_core::config::cache::MemoryCacheConfig;
use taskgate_core::error::AppError;
use taskgate_core::result::AppResult;
use taskgate_core::traits::CacheProvider;
use taskgate_core::types::{MemberId, MembershipId, ProjectId};
use taskgate_entity::{
    DateWindow, Member, MembershipStatus, ProjectMembership, ProjectRole, Rank,
};

/// Password every fixture member is created with.
pub const PASSWORD: &str = "correct horse battery staple";

/// In-memory member directory.
#[derive(Debug, Default)]
pub struct InMemoryMembers {
    members: RwLock<HashMap<String, Member>>,
}

impl InMemoryMembers {
    pub fn insert(&self, member: Member) {
        self.members
            .write()
            .unwrap()
            .insert(member.external_id.clone(), member);
    }

    pub fn remove(&self, external_id: &str) {
        self.members.write().unwrap().remove(external_id);
    }
}

#[async_trait]
impl MemberDirectory for InMemoryMembers {
    async fn find_active_by_external_id(&self, external_id: &str) -> AppResult<Option<Member>> {
        Ok(self.members.read().unwrap().get(external_id).cloned())
    }

    async fn find_active_by_id(&self, id: MemberId) -> AppResult<Option<Member>> {
        Ok(self
            .members
            .read()
            .unwrap()
            .values()
            .find(|m| m.id == id)
            .cloned())
    }
}

/// In-memory membership directory.
#[derive(Debug, Default)]
pub struct InMemoryMemberships {
    memberships: RwLock<Vec<ProjectMembership>>,
}

impl InMemoryMemberships {
    pub fn insert(&self, membership: ProjectMembership) {
        self.memberships.write().unwrap().push(membership);
    }
}

#[async_trait]
impl MembershipDirectory for InMemoryMemberships {
    async fn find_active_membership(
        &self,
        member_id: MemberId,
        project_id: ProjectId,
    ) -> AppResult<Option<ProjectMembership>> {
        Ok(self
            .memberships
            .read()
            .unwrap()
            .iter()
            .find(|m| m.member_id == member_id && m.project_id == project_id && m.is_active())
            .cloned())
    }
}

/// Cache provider whose backend is always unreachable.
#[derive(Debug)]
pub struct FailingCacheProvider;

#[async_trait]
impl CacheProvider for FailingCacheProvider {
    async fn get(&self, _key: &str) -> AppResult<Option<String>> {
        Err(AppError::infrastructure_unavailable("connection refused"))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> AppResult<()> {
        Err(AppError::infrastructure_unavailable("connection refused"))
    }

    async fn exists(&self, _key: &str) -> AppResult<bool> {
        Err(AppError::infrastructure_unavailable("connection refused"))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(false)
    }
}

/// Test application context
pub struct TestApp {
    pub config: AppConfig,
    pub issuer: Arc<TokenIssuer>,
    pub revocations: Arc<RevocationStore>,
    pub members: Arc<InMemoryMembers>,
    pub memberships: Arc<InMemoryMemberships>,
    pub lifecycle: SessionLifecycle,
    pub gate: AuthorizationGate,
    hasher: PasswordHasher,
    next_id: AtomicI64,
}

impl TestApp {
    /// Create a test application over an in-memory cache.
    pub fn new() -> Self {
        let cache = MemoryCacheProvider::new(&MemoryCacheConfig::default());
        Self::with_cache(Arc::new(cache))
    }

    /// Create a test application over the given cache provider.
    pub fn with_cache(cache: Arc<dyn CacheProvider>) -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let issuer = Arc::new(TokenIssuer::new(&config.auth));
        let cache = CacheManager::from_provider(cache);
        let revocations = Arc::new(RevocationStore::new(Arc::new(cache)));
        let members = Arc::new(InMemoryMembers::default());
        let memberships = Arc::new(InMemoryMemberships::default());
        let hasher = PasswordHasher::new();

        let lifecycle = SessionLifecycle::new(
            issuer.clone(),
            revocations.clone(),
            members.clone(),
            Arc::new(hasher.clone()),
        );
        let gate = AuthorizationGate::new(memberships.clone(), &config.gate)
            .expect("default gate config is valid");

        Self {
            config,
            issuer,
            revocations,
            members,
            memberships,
            lifecycle,
            gate,
            hasher,
            next_id: AtomicI64::new(1),
        }
    }

    /// Add a member with [`PASSWORD`] and the given rank level.
    pub fn add_member(&self, external_id: &str, role: &str, rank_level: Option<u8>) -> Member {
        let member = Member {
            id: MemberId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            external_id: external_id.to_string(),
            password_hash: self.hasher.hash_password(PASSWORD).expect("hash fixture password"),
            department: "Platform".to_string(),
            role: role.to_string(),
            rank: rank_level.map(|level| Rank::new(format!("LEVEL_{level}"), level)),
        };
        self.members.insert(member.clone());
        member
    }

    /// Enrol a member on a project.
    pub fn enrol(
        &self,
        member: &Member,
        project_id: ProjectId,
        role: ProjectRole,
        window: DateWindow,
    ) -> ProjectMembership {
        let membership = ProjectMembership {
            id: MembershipId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            member_id: member.id,
            project_id,
            role,
            status: MembershipStatus::Active,
            window,
        };
        self.memberships.insert(membership.clone());
        membership
    }

    /// Log in and return the access token.
    pub async fn login(&self, external_id: &str) -> String {
        self.lifecycle
            .login(external_id, PASSWORD)
            .await
            .expect("fixture login")
            .access_token
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn window(start: NaiveDate, end: NaiveDate) -> DateWindow {
    DateWindow::new(start, end).expect("valid window")
}
