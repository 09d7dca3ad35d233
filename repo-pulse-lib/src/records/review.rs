use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pull request review. Its presence alone means the pull request was reviewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    pub state: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Review {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self {
            id,
            state: None,
            submitted_at: None,
        }
    }
}
