//! Well-known label keys, configuration keys and tag strings.
//!
//! Label keys are read from workloads, configuration keys from the executor's
//! basic or refined options, tags are what ends up in the legacy constraint lists.

// Workload label keys.

/// Organization the workload belongs to.
pub const LABEL_ORG: &str = "DICE_ORG_NAME";
/// Workspace (environment) the workload belongs to.
pub const LABEL_WORKSPACE: &str = "DICE_WORKSPACE";
/// Service type: `STATELESS`, `ADDONS` or `DAEMONSET`.
pub const LABEL_SERVICE_TYPE: &str = "SERVICE_TYPE";
/// Job kind; only `bigdata` is meaningful.
pub const LABEL_JOB_KIND: &str = "JOB_KIND";
/// Pack job marker (`"true"`).
pub const LABEL_PACK: &str = "pack";
/// JSON array of service-name groups that must land on distinct hosts.
pub const LABEL_HOST_UNIQUE: &str = "HOST_UNIQUE";
/// Comma separated list of hosts the workload is pinned to.
pub const LABEL_SPECIFIC_HOSTS: &str = "SPECIFIC_HOSTS";
/// Presence marks a platform workload.
pub const LABEL_PLATFORM: &str = "PLATFORM";
/// Deprecated project pinning.
pub const LABEL_PROJECT: &str = "DICE_PROJECT";
/// Legacy location convention: `LOCATION-<VALUE>`.
pub const LABEL_LOCATION_PREFIX: &str = "LOCATION-";

pub const SERVICE_TYPE_STATELESS: &str = "STATELESS";
pub const SERVICE_TYPE_ADDONS: &str = "ADDONS";
pub const SERVICE_TYPE_DAEMONSET: &str = "DAEMONSET";
pub const JOB_KIND_BIGDATA: &str = "bigdata";

// Executor configuration keys.

/// Master switch for label scheduling.
pub const ENABLETAG: &str = "ENABLETAG";
pub const ENABLE_ORG: &str = "ENABLE_ORG";
pub const ENABLE_WORKSPACE: &str = "ENABLE_WORKSPACE";
/// Deprecated: workspaces that keep exclusive scheduling while `ENABLE_WORKSPACE` is off.
pub const WORKSPACETAGS: &str = "WORKSPACETAGS";
/// Deprecated: project ids that are pinned to their own hosts.
pub const PRESERVEPROJECTS: &str = "PRESERVEPROJECTS";
pub const STAGING_JOB_DEST: &str = "STAGING_JOB_DEST";
pub const PROD_JOB_DEST: &str = "PROD_JOB_DEST";

// Selector dimensions.

pub const SELECTOR_ORG: &str = "org";
pub const SELECTOR_WORKSPACE: &str = "workspace";
pub const SELECTOR_PLATFORM: &str = "platform";
pub const SELECTOR_LOCATION: &str = "location";

// Tags.

pub const TAG_ORG_PREFIX: &str = "org-";
pub const TAG_WORKSPACE_PREFIX: &str = "workspace-";
pub const TAG_PROJECT_PREFIX: &str = "project-";
pub const TAG_JOB: &str = "job";
pub const TAG_STATEFUL: &str = "service-stateful";
pub const TAG_STATELESS: &str = "service-stateless";
pub const TAG_BIGDATA: &str = "bigdata";

// Workspaces.

pub const WORKSPACE_DEV: &str = "dev";
pub const WORKSPACE_TEST: &str = "test";
pub const WORKSPACE_STAGING: &str = "staging";
pub const WORKSPACE_PROD: &str = "prod";
