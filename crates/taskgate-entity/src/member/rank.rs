//! Organizational rank.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A member's position, with the ordinal level used by rank gates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rank {
    /// Display label of the position, e.g. `DIRECTOR`.
    pub label: String,
    /// Seniority level; higher is more senior.
    pub level: u8,
}

impl Rank {
    /// Create a rank from its label and level.
    pub fn new(label: impl Into<String>, level: u8) -> Self {
        Self {
            label: label.into(),
            level,
        }
    }

    /// Check if this rank is at or above the given level.
    pub fn is_at_least(&self, level: u8) -> bool {
        self.level >= level
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (level {})", self.label, self.level)
    }
}
