use std::collections::BTreeMap;

use sched_model::{
    HostUniqueGroups, ScheduleInfo, ScheduleInfo2, Selector,
    constants::{
        TAG_BIGDATA, TAG_JOB, TAG_ORG_PREFIX, TAG_PROJECT_PREFIX, TAG_STATEFUL, TAG_STATELESS,
        TAG_WORKSPACE_PREFIX,
    },
};

/// Org dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OrgDecision {
    /// Stay off every org-pinned host.
    #[default]
    Unpinned,
    /// Run only on hosts of this org.
    Pinned(String),
}

/// Workspace dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WorkspaceDecision {
    /// Stay off every workspace-pinned host.
    #[default]
    Unpinned,
    /// Run only on hosts of this workspace.
    Exclusive(String),
    /// Job redirected away from its own workspace.
    ///
    /// `destinations` are acceptable host workspaces, `recorded` is what the typed view reports.
    Redirected {
        destinations: Vec<String>,
        recorded: Vec<String>,
    },
}

/// Deprecated project dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProjectDecision {
    #[default]
    Unpinned,
    Pinned(String),
}

/// Workload identity flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityDecision {
    pub job: bool,
    pub pack: bool,
    pub daemonset: bool,
    pub stateful: bool,
    pub stateless: bool,
    pub bigdata: bool,
    pub platform: bool,
    pub unlocked: bool,
    /// May share the generic `any` slot.
    pub any: bool,
}

/// The single record every filter writes to.
///
/// [`ScheduleInfo`] and [`ScheduleInfo2`] are both rendered from it and cannot disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleDecision {
    pub org: OrgDecision,
    pub workspace: WorkspaceDecision,
    pub project: ProjectDecision,
    pub identity: IdentityDecision,
    pub host_unique: Option<HostUniqueGroups>,
    pub specific_hosts: Vec<String>,
    pub location: BTreeMap<String, Selector>,
}

impl ScheduleDecision {
    /// Legacy tag-list view.
    ///
    /// `exclusive_likes` is ordered org, workspace, bigdata, project; `un_like_prefixs` org, workspace, project.
    pub fn schedule_info(&self) -> ScheduleInfo {
        let mut info = ScheduleInfo {
            flag: self.identity.any,
            is_platform: self.identity.platform,
            is_un_locked: self.identity.unlocked,
            specific_host: self.specific_hosts.clone(),
            location: self.location.clone(),
            ..Default::default()
        };

        match &self.org {
            OrgDecision::Unpinned => info.un_like_prefixs.push(TAG_ORG_PREFIX.to_string()),
            OrgDecision::Pinned(org) => info.exclusive_likes.push(format!("{TAG_ORG_PREFIX}{org}")),
        }

        match &self.workspace {
            WorkspaceDecision::Unpinned => {
                info.un_like_prefixs.push(TAG_WORKSPACE_PREFIX.to_string())
            }
            WorkspaceDecision::Exclusive(ws) => info
                .exclusive_likes
                .push(format!("{TAG_WORKSPACE_PREFIX}{ws}")),
            WorkspaceDecision::Redirected { destinations, .. } => info.inclusive_likes.extend(
                destinations
                    .iter()
                    .map(|d| format!("{TAG_WORKSPACE_PREFIX}{d}")),
            ),
        }

        if self.identity.job {
            info.likes.push(TAG_JOB.to_string());
        }
        if self.identity.stateful {
            info.likes.push(TAG_STATEFUL.to_string());
        }
        if self.identity.stateless {
            info.likes.push(TAG_STATELESS.to_string());
        }
        if self.identity.bigdata {
            info.exclusive_likes.push(TAG_BIGDATA.to_string());
        }

        match &self.project {
            ProjectDecision::Unpinned => info.un_like_prefixs.push(TAG_PROJECT_PREFIX.to_string()),
            ProjectDecision::Pinned(id) => info
                .exclusive_likes
                .push(format!("{TAG_PROJECT_PREFIX}{id}")),
        }

        if let Some(groups) = &self.host_unique {
            info.host_unique = true;
            info.host_unique_info = groups.clone();
        }

        info
    }

    /// Typed view.
    pub fn schedule_info2(&self) -> ScheduleInfo2 {
        let id = &self.identity;
        let mut info = ScheduleInfo2 {
            is_platform: id.platform,
            is_daemonset: id.daemonset,
            is_un_locked: id.unlocked,
            specific_host: self.specific_hosts.clone(),
            location: self.location.clone(),
            job: id.job,
            pack: id.pack,
            stateful: id.stateful,
            stateless: id.stateless,
            big_data: id.bigdata,
            prefer_job: id.any,
            prefer_pack: id.any,
            prefer_stateful: id.any,
            prefer_stateless: id.any,
            ..Default::default()
        };

        if let OrgDecision::Pinned(org) = &self.org {
            info.has_org = true;
            info.org = org.clone();
        }

        match &self.workspace {
            WorkspaceDecision::Unpinned => {}
            WorkspaceDecision::Exclusive(ws) => {
                info.has_work_space = true;
                info.work_spaces = vec![ws.clone()];
            }
            WorkspaceDecision::Redirected { recorded, .. } => {
                info.has_work_space = true;
                info.work_spaces = recorded.clone();
            }
        }

        if let ProjectDecision::Pinned(project) = &self.project {
            info.has_project = true;
            info.project = project.clone();
        }

        if let Some(groups) = &self.host_unique {
            info.has_host_unique = true;
            info.host_unique = groups.clone();
        }

        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpinned_dimensions_render_unlike_prefixes() {
        let info = ScheduleDecision::default().schedule_info();
        assert_eq!(info.un_like_prefixs, vec!["org-", "workspace-", "project-"]);
        assert!(info.exclusive_likes.is_empty());
        assert!(info.inclusive_likes.is_empty());

        let info2 = ScheduleDecision::default().schedule_info2();
        assert!(!info2.has_org && !info2.has_work_space && !info2.has_project);
    }

    #[test]
    fn exclusive_likes_follow_dimension_order() {
        let d = ScheduleDecision {
            org: OrgDecision::Pinned("acme".into()),
            workspace: WorkspaceDecision::Exclusive("prod".into()),
            project: ProjectDecision::Pinned("42".into()),
            identity: IdentityDecision {
                bigdata: true,
                ..Default::default()
            },
            ..Default::default()
        };

        let info = d.schedule_info();
        assert_eq!(
            info.exclusive_likes,
            vec!["org-acme", "workspace-prod", "bigdata", "project-42"]
        );
        assert!(info.un_like_prefixs.is_empty());

        let info2 = d.schedule_info2();
        assert!(info2.has_org && info2.has_work_space && info2.has_project && info2.big_data);
        assert_eq!(info2.work_spaces, vec!["prod".to_string()]);
        assert_eq!(info2.project, "42");
    }

    #[test]
    fn redirection_splits_tags_and_recorded_workspaces() {
        let d = ScheduleDecision {
            workspace: WorkspaceDecision::Redirected {
                destinations: vec!["dev".into(), "test".into()],
                recorded: vec!["staging".into()],
            },
            ..Default::default()
        };

        let info = d.schedule_info();
        assert_eq!(info.inclusive_likes, vec!["workspace-dev", "workspace-test"]);
        assert!(!info.un_like_prefixs.iter().any(|p| p == "workspace-"));
        assert_eq!(d.schedule_info2().work_spaces, vec!["staging".to_string()]);
    }

    #[test]
    fn any_sets_every_preference() {
        let d = ScheduleDecision {
            identity: IdentityDecision {
                any: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let info2 = d.schedule_info2();
        assert!(info2.prefer_job && info2.prefer_pack && info2.prefer_stateful && info2.prefer_stateless);
        assert!(d.schedule_info().flag);
    }

    #[test]
    fn host_unique_is_copied_to_both_views() {
        let groups = vec![vec!["a".to_string(), "b".to_string()]];
        let d = ScheduleDecision {
            host_unique: Some(groups.clone()),
            ..Default::default()
        };
        let info = d.schedule_info();
        let info2 = d.schedule_info2();
        assert!(info.host_unique && info2.has_host_unique);
        assert_eq!(info.host_unique_info, groups);
        assert_eq!(info2.host_unique, groups);
    }
}
