//! Membership status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a project membership is in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipStatus {
    /// The member currently participates in the project.
    Active,
    /// The membership was ended or soft-deleted.
    Inactive,
}

impl MembershipStatus {
    /// Check if the membership is in force.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("ACTIVE"),
            Self::Inactive => f.write_str("INACTIVE"),
        }
    }
}
