use crate::Result;
use crate::records::{Commit, Contributor, Issue, PullRequest, Repository, Review, User};
use chrono::{DateTime, Utc};
use strum::{Display, EnumIter};

/// Which items a listing request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum StateQuery {
    Open,
    Closed,
    #[default]
    All,
}

/// Access to the records of a hosting platform.
///
/// Each listing returns a single page, newest items first. Implementations
/// report not-found resources, rate limiting and transport failures as errors.
pub trait HostingSource: Sync {
    fn fetch_repository(&self, owner: &str, repo: &str) -> impl Future<Output = Result<Repository>> + Send;

    fn fetch_contributors(&self, owner: &str, repo: &str, per_page: u32, page: u32) -> impl Future<Output = Result<Vec<Contributor>>> + Send;

    fn fetch_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        state: StateQuery,
        per_page: u32,
    ) -> impl Future<Output = Result<Vec<PullRequest>>> + Send;

    /// Issues as listed by the issues endpoint, which includes pull requests.
    fn fetch_issues(&self, owner: &str, repo: &str, state: StateQuery, per_page: u32) -> impl Future<Output = Result<Vec<Issue>>> + Send;

    fn fetch_commits(
        &self,
        owner: &str,
        repo: &str,
        since: Option<DateTime<Utc>>,
        until: Option<DateTime<Utc>>,
        per_page: u32,
    ) -> impl Future<Output = Result<Vec<Commit>>> + Send;

    fn fetch_reviews(&self, owner: &str, repo: &str, pull_number: u64) -> impl Future<Output = Result<Vec<Review>>> + Send;

    fn fetch_user(&self, username: &str) -> impl Future<Output = Result<User>> + Send;
}
