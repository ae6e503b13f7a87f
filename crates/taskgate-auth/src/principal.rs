//! The authenticated caller of one request.

use serde::Serialize;

use taskgate_core::types::MemberId;
use taskgate_entity::{MemberRole, Rank};

use crate::jwt::AccessClaims;

/// Identity and claims materialized from a validated access token.
///
/// Never persisted; lives for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    /// Member id.
    pub id: MemberId,
    /// Login identifier.
    pub external_id: String,
    /// Department name.
    pub department: String,
    /// Organizational role.
    pub role: MemberRole,
    /// Rank at token issue time.
    pub rank: Rank,
}

impl Principal {
    /// Rank level used by rank gates.
    pub fn rank_level(&self) -> u8 {
        self.rank.level
    }

    /// Whether the principal holds the organization manager role.
    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }
}

impl From<AccessClaims> for Principal {
    fn from(claims: AccessClaims) -> Self {
        Self {
            id: claims.mid,
            external_id: claims.sub,
            department: claims.department,
            role: claims.role,
            rank: Rank::new(claims.rank_label, claims.rank_level),
        }
    }
}
