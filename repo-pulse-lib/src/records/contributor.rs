use serde::{Deserialize, Serialize};

/// An entry from the contributors endpoint.
///
/// The API returns contributors ordered by contribution count, highest first.
/// Anonymous contributors have no login.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contributor {
    pub login: Option<String>,
    pub id: Option<u64>,
    #[serde(default)]
    pub contributions: u64,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl Contributor {
    /// Convenience constructor for a named contributor with a contribution count.
    #[must_use]
    pub fn new(login: impl Into<String>, contributions: u64) -> Self {
        Self {
            login: Some(login.into()),
            contributions,
            ..Self::default()
        }
    }
}
