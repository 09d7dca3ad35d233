//! In-memory `HostingSource` for analytics tests.

use crate::Result;
use crate::facts::{HostingSource, StateQuery};
use crate::records::{Commit, CommitDetail, Contributor, Issue, ItemState, PullRequest, PullRequestRef, Repository, Review, User};
use chrono::{DateTime, Duration, Utc};
use ohno::bail;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct FakeSource {
    pub issues: Vec<Issue>,
    pub pull_requests: Vec<PullRequest>,
    pub contributors: Vec<Contributor>,
    pub commits: Vec<Commit>,
    pub reviews: HashMap<u64, Vec<Review>>,
    pub failing_reviews: HashSet<u64>,
    pub users: HashMap<String, User>,
    pub fail_contributors: bool,
    pub fail_commits: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeSource {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl HostingSource for FakeSource {
    async fn fetch_repository(&self, owner: &str, repo: &str) -> Result<Repository> {
        self.record(format!("repository {owner}/{repo}"));
        bail!("no repository in fake source")
    }

    async fn fetch_contributors(&self, owner: &str, repo: &str, per_page: u32, page: u32) -> Result<Vec<Contributor>> {
        self.record(format!("contributors {owner}/{repo} per_page={per_page} page={page}"));
        if self.fail_contributors {
            bail!("contributors unavailable");
        }
        Ok(self.contributors.clone())
    }

    async fn fetch_pull_requests(&self, owner: &str, repo: &str, state: StateQuery, per_page: u32) -> Result<Vec<PullRequest>> {
        self.record(format!("pulls {owner}/{repo} state={state} per_page={per_page}"));
        Ok(self.pull_requests.clone())
    }

    async fn fetch_issues(&self, owner: &str, repo: &str, state: StateQuery, per_page: u32) -> Result<Vec<Issue>> {
        self.record(format!("issues {owner}/{repo} state={state} per_page={per_page}"));
        Ok(self.issues.clone())
    }

    async fn fetch_commits(
        &self,
        owner: &str,
        repo: &str,
        since: Option<DateTime<Utc>>,
        until: Option<DateTime<Utc>>,
        per_page: u32,
    ) -> Result<Vec<Commit>> {
        self.record(format!("commits {owner}/{repo} since={since:?} until={until:?} per_page={per_page}"));
        if self.fail_commits {
            bail!("commits unavailable");
        }
        Ok(self.commits.clone())
    }

    async fn fetch_reviews(&self, owner: &str, repo: &str, pull_number: u64) -> Result<Vec<Review>> {
        self.record(format!("reviews {owner}/{repo}#{pull_number}"));
        if self.failing_reviews.contains(&pull_number) {
            bail!("reviews unavailable for #{pull_number}");
        }
        Ok(self.reviews.get(&pull_number).cloned().unwrap_or_default())
    }

    async fn fetch_user(&self, username: &str) -> Result<User> {
        self.record(format!("user {username}"));
        match self.users.get(username) {
            Some(user) => Ok(user.clone()),
            None => bail!("user '{username}' not found"),
        }
    }
}

fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap().to_utc()
}

pub fn closed_issue(number: u64) -> Issue {
    Issue {
        id: number,
        number,
        state: ItemState::Closed,
        title: format!("issue {number}"),
        created_at: Some(base_time()),
        closed_at: Some(base_time() + Duration::days(1)),
        pull_request: None,
    }
}

pub fn open_issue(number: u64, is_pull_request: bool) -> Issue {
    Issue {
        id: number,
        number,
        state: ItemState::Open,
        title: format!("issue {number}"),
        created_at: Some(base_time()),
        closed_at: None,
        pull_request: is_pull_request.then(PullRequestRef::default),
    }
}

/// A closed pull request merged `hours` after creation.
pub fn merged_pr(number: u64, hours: i64) -> PullRequest {
    let merged_at = base_time() + Duration::hours(hours);
    PullRequest {
        id: number,
        number,
        state: ItemState::Closed,
        title: format!("pr {number}"),
        created_at: Some(base_time()),
        closed_at: Some(merged_at),
        merged_at: Some(merged_at),
    }
}

pub fn open_pr(number: u64) -> PullRequest {
    PullRequest {
        id: number,
        number,
        state: ItemState::Open,
        title: format!("pr {number}"),
        created_at: Some(base_time()),
        closed_at: None,
        merged_at: None,
    }
}

pub fn contributor(login: &str, contributions: u64) -> Contributor {
    Contributor::new(login, contributions)
}

pub fn commit(sha: &str) -> Commit {
    Commit {
        sha: sha.to_string(),
        commit: CommitDetail::default(),
    }
}

pub fn user(login: &str) -> User {
    User {
        login: login.to_string(),
        name: Some(login.to_uppercase()),
        ..User::default()
    }
}
