//! Project-scoped role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseEnumError;

/// Role held on a single project.
///
/// Roles are ordered by level: Leader (3) > Manager (2) > Member (1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectRole {
    /// Runs the project; edits it and its roster.
    Leader,
    /// Assists the leader.
    Manager,
    /// Regular participant.
    Member,
}

impl ProjectRole {
    /// Return the ordinal level (higher = more privileged).
    pub fn level(&self) -> u8 {
        match self {
            Self::Leader => 3,
            Self::Manager => 2,
            Self::Member => 1,
        }
    }

    /// Check if this role is at or above the given level.
    pub fn is_at_least(&self, level: u8) -> bool {
        self.level() >= level
    }

    /// Return the role as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Leader => "LEADER",
            Self::Manager => "MANAGER",
            Self::Member => "MEMBER",
        }
    }
}

impl fmt::Display for ProjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectRole {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LEADER" => Ok(Self::Leader),
            "MANAGER" => Ok(Self::Manager),
            "MEMBER" => Ok(Self::Member),
            _ => Err(ParseEnumError::new("project role", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(ProjectRole::Leader.is_at_least(ProjectRole::Manager.level()));
        assert!(ProjectRole::Leader.is_at_least(3));
        assert!(ProjectRole::Manager.is_at_least(2));
        assert!(!ProjectRole::Member.is_at_least(2));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("leader".parse::<ProjectRole>().unwrap(), ProjectRole::Leader);
        assert_eq!("MEMBER".parse::<ProjectRole>().unwrap(), ProjectRole::Member);
        assert!("owner".parse::<ProjectRole>().is_err());
    }
}
