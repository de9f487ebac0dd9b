use serde::{Deserialize, Serialize};

use crate::config::Options;

/// Refined configuration: ordered per-org overrides.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PlusConfigs {
    #[serde(default)]
    pub orgs: Vec<OrgConfig>,
}

/// Org-scoped options with nested workspace overrides.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct OrgConfig {
    pub name: String,
    #[serde(default)]
    pub options: Options,
    #[serde(default)]
    pub workspaces: Vec<WorkspaceConfig>,
}

/// Workspace-scoped options, only meaningful under its org.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct WorkspaceConfig {
    pub name: String,
    #[serde(default)]
    pub options: Options,
}

impl PlusConfigs {
    /// First org with exactly this name.
    pub fn org(&self, name: &str) -> Option<&OrgConfig> {
        self.orgs.iter().find(|o| o.name == name)
    }
}

impl OrgConfig {
    /// First workspace with exactly this name.
    pub fn workspace(&self, name: &str) -> Option<&WorkspaceConfig> {
        self.workspaces.iter().find(|w| w.name == name)
    }
}
