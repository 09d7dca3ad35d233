use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entry from the commits endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommitDetail {
    #[serde(default)]
    pub message: String,
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_deserialize() {
        let json = r#"{
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "commit": {
                "message": "Fix all the bugs",
                "author": {
                    "name": "Monalisa Octocat",
                    "email": "support@github.com",
                    "date": "2011-04-14T16:00:49Z"
                }
            }
        }"#;

        let commit: Commit = serde_json::from_str(json).unwrap();
        assert_eq!(commit.commit.message, "Fix all the bugs");
        assert!(commit.commit.author.unwrap().date.is_some());
    }
}
