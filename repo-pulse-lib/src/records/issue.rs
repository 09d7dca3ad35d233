use super::ItemState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entry from the issues endpoint.
///
/// The endpoint also lists pull requests; those carry a `pull_request`
/// back-reference and must be excluded when counting pure issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub number: u64,
    pub state: ItemState,
    #[serde(default)]
    pub title: String,
    pub created_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub pull_request: Option<PullRequestRef>,
}

impl Issue {
    /// Whether this entry is a pull request listed through the issues endpoint.
    #[must_use]
    pub const fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Back-reference from an issue entry to the pull request it represents.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PullRequestRef {
    pub url: Option<String>,
    pub merged_at: Option<DateTime<Utc>>,
}
