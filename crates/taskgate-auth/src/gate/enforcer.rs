//! Rank, project-role, and ownership enforcement.
//!
//! Every denial surfaces as the same `NoPermission` error. Which check
//! failed (no membership, role too low, not the owner, rank too low) is
//! logged server-side only, so a non-member cannot probe whether a
//! project exists or who belongs to it.

use std::sync::Arc;

use tracing::debug;

use taskgate_core::config::GateConfig;
use taskgate_core::error::AppError;
use taskgate_core::result::AppResult;
use taskgate_core::types::{MemberId, MembershipId, ProjectId};
use taskgate_entity::{DateWindow, ProjectMembership, ProjectRole};

use crate::directory::MembershipDirectory;
use crate::principal::Principal;

use super::window::MembershipWindowValidator;

/// A single permission requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Organizational rank level at or above the value.
    MinimumRank(u8),
    /// Active membership on the project with role level at or above `level`.
    ProjectRoleAtLeast {
        /// Project the role must be held on.
        project_id: ProjectId,
        /// Minimum role level.
        level: u8,
    },
    /// The caller's active membership on the project is the resource owner.
    Ownership {
        /// Project the resource belongs to.
        project_id: ProjectId,
        /// Membership owning the resource.
        owner: MembershipId,
    },
}

/// Evaluates permission requirements against a principal.
///
/// Rank checks use the claims carried in the token; role and ownership
/// checks resolve the active membership fresh from the directory.
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    /// Membership lookup.
    memberships: Arc<dyn MembershipDirectory>,
    /// Rank required to create a project.
    project_creation_min_rank: u8,
    /// Role required to edit a project or its roster.
    project_admin_role: ProjectRole,
}

impl AuthorizationGate {
    /// Creates a gate from its directory and thresholds.
    pub fn new(memberships: Arc<dyn MembershipDirectory>, config: &GateConfig) -> AppResult<Self> {
        let project_admin_role: ProjectRole = config.project_admin_role.parse().map_err(|e| {
            AppError::configuration(format!("gate.project_admin_role: {e}"))
        })?;

        Ok(Self {
            memberships,
            project_creation_min_rank: config.project_creation_min_rank,
            project_admin_role,
        })
    }

    /// Fails unless the principal's rank level is at least `required`.
    pub fn require_minimum_rank(&self, principal: &Principal, required: u8) -> AppResult<()> {
        if principal.rank.is_at_least(required) {
            Ok(())
        } else {
            debug!(
                member_id = %principal.id,
                rank_level = principal.rank_level(),
                required,
                reason = "insufficient_rank",
                "Permission denied"
            );
            Err(AppError::no_permission())
        }
    }

    /// Fails unless the member holds an active membership on the project
    /// with role level at least `required`. Returns that membership.
    pub async fn require_project_role_at_least(
        &self,
        member_id: MemberId,
        project_id: ProjectId,
        required: u8,
    ) -> AppResult<ProjectMembership> {
        let membership = self.active_membership(member_id, project_id).await?;

        if !membership.role.is_at_least(required) {
            debug!(
                member_id = %member_id,
                project_id = %project_id,
                role = %membership.role,
                required,
                reason = "insufficient_role",
                "Permission denied"
            );
            return Err(AppError::no_permission());
        }
        Ok(membership)
    }

    /// Fails unless the member's active membership on the project is `owner`.
    pub async fn require_ownership(
        &self,
        member_id: MemberId,
        project_id: ProjectId,
        owner: MembershipId,
    ) -> AppResult<ProjectMembership> {
        let membership = self.active_membership(member_id, project_id).await?;

        if membership.id != owner {
            debug!(
                member_id = %member_id,
                project_id = %project_id,
                membership_id = %membership.id,
                owner_membership_id = %owner,
                reason = "not_owner",
                "Permission denied"
            );
            return Err(AppError::no_permission());
        }
        Ok(membership)
    }

    /// Checks a single requirement.
    pub async fn authorize(&self, principal: &Principal, requirement: Requirement) -> AppResult<()> {
        match requirement {
            Requirement::MinimumRank(level) => self.require_minimum_rank(principal, level),
            Requirement::ProjectRoleAtLeast { project_id, level } => self
                .require_project_role_at_least(principal.id, project_id, level)
                .await
                .map(|_| ()),
            Requirement::Ownership { project_id, owner } => self
                .require_ownership(principal.id, project_id, owner)
                .await
                .map(|_| ()),
        }
    }

    /// Project creation: rank at least the configured threshold.
    pub fn guard_project_creation(&self, principal: &Principal) -> AppResult<()> {
        self.require_minimum_rank(principal, self.project_creation_min_rank)
    }

    /// Project edit or delete: the configured admin role on the project.
    pub async fn guard_project_update(
        &self,
        principal: &Principal,
        project_id: ProjectId,
    ) -> AppResult<ProjectMembership> {
        self.require_project_role_at_least(principal.id, project_id, self.project_admin_role.level())
            .await
    }

    /// Roster change: admin role on the project, then the proposed
    /// membership window must lie within the project's.
    pub async fn guard_membership_write(
        &self,
        principal: &Principal,
        project_id: ProjectId,
        project_window: &DateWindow,
        proposed: &DateWindow,
    ) -> AppResult<()> {
        self.guard_project_update(principal, project_id).await?;
        MembershipWindowValidator::check_window(proposed, project_window)
    }

    /// Task creation: any active membership on the project, then the task
    /// window must lie within the project's. Returns the caller's
    /// membership, which becomes the task owner.
    pub async fn guard_task_create(
        &self,
        principal: &Principal,
        project_id: ProjectId,
        project_window: &DateWindow,
        proposed: &DateWindow,
    ) -> AppResult<ProjectMembership> {
        let membership = self
            .require_project_role_at_least(principal.id, project_id, ProjectRole::Member.level())
            .await?;
        MembershipWindowValidator::check_window(proposed, project_window)?;
        Ok(membership)
    }

    /// Task edit or delete: only the owning membership.
    pub async fn guard_task_mutation(
        &self,
        principal: &Principal,
        project_id: ProjectId,
        owner: MembershipId,
    ) -> AppResult<ProjectMembership> {
        self.require_ownership(principal.id, project_id, owner).await
    }

    /// Task edit that changes dates: only the owning membership, then the
    /// new task window must lie within the project's.
    pub async fn guard_task_update(
        &self,
        principal: &Principal,
        project_id: ProjectId,
        owner: MembershipId,
        project_window: &DateWindow,
        proposed: &DateWindow,
    ) -> AppResult<ProjectMembership> {
        let membership = self.require_ownership(principal.id, project_id, owner).await?;
        MembershipWindowValidator::check_window(proposed, project_window)?;
        Ok(membership)
    }

    /// Task read: organization managers see every task, others only their own.
    pub async fn guard_task_view(
        &self,
        principal: &Principal,
        project_id: ProjectId,
        owner: MembershipId,
    ) -> AppResult<()> {
        if principal.is_manager() {
            return Ok(());
        }
        self.require_ownership(principal.id, project_id, owner)
            .await
            .map(|_| ())
    }

    async fn active_membership(
        &self,
        member_id: MemberId,
        project_id: ProjectId,
    ) -> AppResult<ProjectMembership> {
        match self
            .memberships
            .find_active_membership(member_id, project_id)
            .await?
        {
            Some(membership) if membership.is_active() => Ok(membership),
            _ => {
                debug!(
                    member_id = %member_id,
                    project_id = %project_id,
                    reason = "no_active_membership",
                    "Permission denied"
                );
                Err(AppError::no_permission())
            }
        }
    }
}
