//! Lookups the auth core consumes from the persistence layer.

use async_trait::async_trait;

use taskgate_core::result::AppResult;
use taskgate_core::types::{MemberId, ProjectId};
use taskgate_entity::{Member, ProjectMembership};

/// Resolves active members.
#[async_trait]
pub trait MemberDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Find an active member by login identifier.
    async fn find_active_by_external_id(&self, external_id: &str) -> AppResult<Option<Member>>;

    /// Find an active member by id.
    ///
    /// Part of the consumed directory interface for callers holding a
    /// member id; the session flow resolves members by login identifier.
    async fn find_active_by_id(&self, id: MemberId) -> AppResult<Option<Member>>;
}

/// Resolves active project memberships.
#[async_trait]
pub trait MembershipDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Find the member's active membership on the project, if any.
    async fn find_active_membership(
        &self,
        member_id: MemberId,
        project_id: ProjectId,
    ) -> AppResult<Option<ProjectMembership>>;
}
