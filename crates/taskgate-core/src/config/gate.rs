//! Authorization threshold configuration.

use serde::{Deserialize, Serialize};

/// Thresholds applied by the composite authorization guards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Minimum organizational rank level allowed to create a project.
    #[serde(default = "default_project_creation_min_rank")]
    pub project_creation_min_rank: u8,
    /// Project role (by name) required to edit a project or its roster.
    #[serde(default = "default_project_admin_role")]
    pub project_admin_role: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            project_creation_min_rank: default_project_creation_min_rank(),
            project_admin_role: default_project_admin_role(),
        }
    }
}

fn default_project_creation_min_rank() -> u8 {
    5
}

fn default_project_admin_role() -> String {
    "leader".to_string()
}
