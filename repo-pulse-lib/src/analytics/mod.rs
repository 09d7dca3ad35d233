//! Orchestration of fetches and metric calculations
//!
//! Each entry point takes the [`HostingSource`](crate::facts::HostingSource) to
//! read from, fetches the listings it needs concurrently, and feeds them through
//! the classifiers and calculators in [`metrics`](crate::metrics). Fetch errors
//! fail the computation, except for review and profile lookups, which are
//! sampled per item and tolerate individual failures.

mod project_health;
mod team;

#[cfg(test)]
mod test_source;

pub use project_health::{ProjectHealthMetrics, Thresholds, project_health};
pub use team::{DEFAULT_TEAM_CONTRIBUTOR_LIMIT, TeamMetrics, team_contributors, team_metrics};
