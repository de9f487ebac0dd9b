//! Label filters.
//!
//! Each filter reads [`LabelInfo`](crate::policy::LabelInfo) and writes its own dimension of
//! [`ScheduleDecision`](crate::policy::ScheduleDecision). Filters never fail.
mod host;
mod identity;
mod location;
mod org;
mod workspace;

pub use host::{host_unique_filter, specific_host_filter};
pub use identity::identity_filter;
pub use location::location_filter;
pub use org::org_filter;
pub use workspace::workspace_filter;
