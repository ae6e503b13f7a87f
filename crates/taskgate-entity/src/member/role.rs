//! Organizational role claim.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseEnumError;

/// Organization-wide role carried in the access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberRole {
    /// Can read every member's tasks.
    #[serde(rename = "ROLE_MANAGER")]
    Manager,
    /// Regular member.
    #[serde(rename = "ROLE_MEMBER")]
    Member,
}

impl MemberRole {
    /// Resolve a stored role value. Accepts both the bare name and the
    /// `ROLE_` claim form, case-insensitively.
    pub fn resolve(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let bare = match trimmed.get(..5) {
            Some(prefix) if prefix.eq_ignore_ascii_case("ROLE_") => &trimmed[5..],
            _ => trimmed,
        };

        if bare.eq_ignore_ascii_case("MANAGER") {
            Some(Self::Manager)
        } else if bare.eq_ignore_ascii_case("MEMBER") {
            Some(Self::Member)
        } else {
            None
        }
    }

    /// Return the claim value embedded in tokens.
    pub fn as_claim(&self) -> &'static str {
        match self {
            Self::Manager => "ROLE_MANAGER",
            Self::Member => "ROLE_MEMBER",
        }
    }

    /// Check if this role is the organization manager role.
    pub fn is_manager(&self) -> bool {
        matches!(self, Self::Manager)
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_claim())
    }
}

impl FromStr for MemberRole {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| ParseEnumError::new("member role", s))
    }
}
