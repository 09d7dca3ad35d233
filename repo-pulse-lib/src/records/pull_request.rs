use super::ItemState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pull request as listed by the pulls endpoint.
///
/// A non-null `merged_at` implies the pull request is closed, but the API is
/// eventually consistent so consumers check the field they care about rather
/// than trusting the invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub id: u64,
    pub number: u64,
    pub state: ItemState,
    #[serde(default)]
    pub title: String,
    pub created_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    /// Whether the pull request carries a merge timestamp.
    #[must_use]
    pub const fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }
}
