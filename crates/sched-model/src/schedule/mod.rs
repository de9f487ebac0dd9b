//! The two renderings of one scheduling decision handed to executors.
mod info;
pub use info::ScheduleInfo;

mod info2;
pub use info2::ScheduleInfo2;

/// Groups of service names; services within one group must run on distinct hosts.
pub type HostUniqueGroups = Vec<Vec<String>>;
