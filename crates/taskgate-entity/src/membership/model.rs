//! Project membership entity as exposed by the membership directory.

use serde::{Deserialize, Serialize};

use taskgate_core::types::{MemberId, MembershipId, ProjectId};

use super::role::ProjectRole;
use super::status::MembershipStatus;
use crate::window::DateWindow;

/// One member's participation in one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMembership {
    /// Membership row identifier; tasks reference their assignee by it.
    pub id: MembershipId,
    /// The participating member.
    pub member_id: MemberId,
    /// The project.
    pub project_id: ProjectId,
    /// Role held on the project.
    pub role: ProjectRole,
    /// Whether the membership is currently in force.
    pub status: MembershipStatus,
    /// Dates the membership covers.
    pub window: DateWindow,
}

impl ProjectMembership {
    /// Check if the membership is in force.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
