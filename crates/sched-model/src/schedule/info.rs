use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Selector, schedule::HostUniqueGroups};

/// Legacy tag-list rendering of a scheduling decision.
///
/// Executors that match host attributes by tag (e.g. Marathon `LIKE`/`UNLIKE`) consume this form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInfo {
    /// Tags the workload prefers; combined with `any` when `flag` is set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub likes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub un_likes: Vec<String>,

    /// Tag prefixes: match / exclude every tag starting with the prefix.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub like_prefixs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub un_like_prefixs: Vec<String>,

    /// Exact tags that do not coexist with `any`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusive_likes: Vec<String>,
    /// Alternatives, any one of which is acceptable.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inclusive_likes: Vec<String>,

    /// Workload may share the generic `any` slot.
    #[serde(default)]
    pub flag: bool,

    #[serde(default)]
    pub host_unique: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub host_unique_info: HostUniqueGroups,

    /// Hosts the workload is pinned to; alternatives.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specific_host: Vec<String>,

    #[serde(default)]
    pub is_platform: bool,
    #[serde(default)]
    pub is_un_locked: bool,

    /// Location selector per service name.
    #[serde(default)]
    pub location: BTreeMap<String, Selector>,
}

impl Default for ScheduleInfo {
    /// Unconstrained output: only `is_un_locked` is set.
    fn default() -> Self {
        Self {
            likes: Vec::new(),
            un_likes: Vec::new(),
            like_prefixs: Vec::new(),
            un_like_prefixs: Vec::new(),
            exclusive_likes: Vec::new(),
            inclusive_likes: Vec::new(),
            flag: false,
            host_unique: false,
            host_unique_info: Vec::new(),
            specific_host: Vec::new(),
            is_platform: false,
            is_un_locked: true,
            location: BTreeMap::new(),
        }
    }
}
