use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Selector, schedule::HostUniqueGroups};

/// Typed rendering of a scheduling decision.
///
/// `PreferXxx` fields only carry meaning when the matching `Xxx` field is `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInfo2 {
    #[serde(default)]
    pub has_host_unique: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub host_unique: HostUniqueGroups,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specific_host: Vec<String>,

    #[serde(default)]
    pub is_platform: bool,
    #[serde(default)]
    pub is_daemonset: bool,
    /// Always `true` for now.
    #[serde(default)]
    pub is_un_locked: bool,

    #[serde(default)]
    pub location: BTreeMap<String, Selector>,

    /// `org` is only meaningful when `has_org` is set.
    #[serde(default)]
    pub has_org: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub org: String,

    /// Acceptable workspaces, alternatives.
    #[serde(default)]
    pub has_work_space: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub work_spaces: Vec<String>,

    #[serde(default)]
    pub job: bool,
    #[serde(default)]
    pub prefer_job: bool,

    #[serde(default)]
    pub pack: bool,
    #[serde(default)]
    pub prefer_pack: bool,

    #[serde(default)]
    pub stateful: bool,
    #[serde(default)]
    pub prefer_stateful: bool,

    #[serde(default)]
    pub stateless: bool,
    #[serde(default)]
    pub prefer_stateless: bool,

    #[serde(default)]
    pub big_data: bool,

    /// Deprecated project pinning.
    #[serde(default)]
    pub has_project: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project: String,
}

impl Default for ScheduleInfo2 {
    fn default() -> Self {
        Self {
            has_host_unique: false,
            host_unique: Vec::new(),
            specific_host: Vec::new(),
            is_platform: false,
            is_daemonset: false,
            is_un_locked: true,
            location: BTreeMap::new(),
            has_org: false,
            org: String::new(),
            has_work_space: false,
            work_spaces: Vec::new(),
            job: false,
            prefer_job: false,
            pack: false,
            prefer_pack: false,
            stateful: false,
            prefer_stateful: false,
            stateless: false,
            prefer_stateless: false,
            big_data: false,
            has_project: false,
            project: String::new(),
        }
    }
}
