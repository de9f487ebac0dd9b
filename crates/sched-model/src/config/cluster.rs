use serde::{Deserialize, Serialize};

use crate::{
    ModelError, ModelResult,
    config::{Options, OrgConfig, PlusConfigs, WorkspaceConfig},
    constants::{ENABLE_ORG, ENABLE_WORKSPACE, ENABLETAG, PRESERVEPROJECTS, WORKSPACETAGS},
};

/// Configuration model consumed by the label pipeline.
///
/// `basic` holds cluster-wide settings, `plus` the optional refined tree.
/// A missing tree, org or workspace falls back to `basic`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ClusterConfig {
    pub basic: Options,
    pub plus: Option<PlusConfigs>,
}

impl ClusterConfig {
    pub fn new(basic: Options, plus: Option<PlusConfigs>) -> Self {
        Self { basic, plus }
    }

    /// `ENABLETAG`: whether label scheduling applies at all.
    pub fn enable_label_schedule(&self) -> bool {
        self.basic.flag(ENABLETAG)
    }

    /// Cluster-wide `ENABLE_ORG`.
    pub fn enable_org(&self) -> bool {
        self.basic.flag(ENABLE_ORG)
    }

    /// Cluster-wide `ENABLE_WORKSPACE`.
    pub fn enable_workspace(&self) -> bool {
        self.basic.flag(ENABLE_WORKSPACE)
    }

    /// Deprecated `WORKSPACETAGS` list.
    pub fn workspace_tags(&self) -> Vec<String> {
        self.basic.list(WORKSPACETAGS).unwrap_or_default()
    }

    /// Deprecated `PRESERVEPROJECTS` list.
    pub fn preserve_projects(&self) -> Vec<String> {
        self.basic.list(PRESERVEPROJECTS).unwrap_or_default()
    }

    /// Refined org entry, if refined configuration exists and names it.
    pub fn refined_org(&self, org: &str) -> Option<&OrgConfig> {
        self.plus.as_ref()?.org(org)
    }

    /// Refined workspace entry nested under the given org.
    pub fn refined_workspace(&self, org: &str, workspace: &str) -> Option<&WorkspaceConfig> {
        self.refined_org(org)?.workspace(workspace)
    }
}

/// Serialized shape of one configured executor instance.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorConfig {
    #[serde(default)]
    pub cluster_name: String,
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub options: Options,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_plus: Option<PlusConfigs>,
}

impl ExecutorConfig {
    /// Parse from JSON, rejecting configs without a name or kind.
    pub fn from_json(raw: &str) -> ModelResult<Self> {
        let cfg: ExecutorConfig =
            serde_json::from_str(raw).map_err(|e| ModelError::InvalidConfig(e.to_string()))?;
        if cfg.name.trim().is_empty() {
            return Err(ModelError::InvalidConfig("executor name is empty".into()));
        }
        if cfg.kind.trim().is_empty() {
            return Err(ModelError::InvalidConfig(format!(
                "executor '{}' has no kind",
                cfg.name
            )));
        }
        Ok(cfg)
    }

    /// Configuration model view used by the label pipeline.
    pub fn whole_configs(&self) -> ClusterConfig {
        ClusterConfig::new(self.options.clone(), self.options_plus.clone())
    }
}
