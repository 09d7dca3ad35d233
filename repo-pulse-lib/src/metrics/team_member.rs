use crate::records::{Contributor, User};
use serde::{Deserialize, Serialize};

/// A contributor enriched with team-level activity figures.
///
/// Only `commits` is derived from the hosting data today; the remaining activity
/// figures are always zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(flatten)]
    pub contributor: Contributor,
    pub user: Option<User>,
    pub commits: u64,
    pub additions: u64,
    pub deletions: u64,
    pub pull_requests: u64,
    pub issues: u64,
    pub code_reviews: u64,
    pub lines_of_code: u64,
    pub activity_score: f64,
    pub collaboration_score: f64,
}

#[must_use]
pub fn transform_contributor_to_team_member(contributor: &Contributor, user: Option<User>) -> TeamMember {
    TeamMember {
        contributor: contributor.clone(),
        user,
        commits: contributor.contributions,
        additions: 0,
        deletions: 0,
        pull_requests: 0,
        issues: 0,
        code_reviews: 0,
        lines_of_code: 0,
        activity_score: 0.0,
        collaboration_score: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_copies_contributions_to_commits() {
        let contributor = Contributor::new("alice", 42);
        let member = transform_contributor_to_team_member(&contributor, None);

        assert_eq!(member.contributor, contributor);
        assert_eq!(member.commits, 42);
        assert!(member.user.is_none());
        assert_eq!(member.additions, 0);
        assert_eq!(member.deletions, 0);
        assert_eq!(member.pull_requests, 0);
        assert_eq!(member.issues, 0);
        assert_eq!(member.code_reviews, 0);
        assert_eq!(member.lines_of_code, 0);
        assert!(member.activity_score.abs() < f64::EPSILON);
        assert!(member.collaboration_score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_transform_attaches_user() {
        let contributor = Contributor::new("bob", 3);
        let user = User {
            login: "bob".to_string(),
            id: 7,
            name: Some("Bob".to_string()),
            ..User::default()
        };

        let member = transform_contributor_to_team_member(&contributor, Some(user.clone()));
        assert_eq!(member.user, Some(user));
    }

    #[test]
    fn test_transform_missing_contributions() {
        let contributor: Contributor = serde_json::from_str(r#"{ "login": "carol" }"#).unwrap();
        let member = transform_contributor_to_team_member(&contributor, None);
        assert_eq!(member.commits, 0);
    }

    #[test]
    fn test_team_member_serializes_flat() {
        let member = transform_contributor_to_team_member(&Contributor::new("dave", 5), None);
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["login"], "dave");
        assert_eq!(json["contributions"], 5);
        assert_eq!(json["commits"], 5);
        assert!(json["user"].is_null());
    }
}
