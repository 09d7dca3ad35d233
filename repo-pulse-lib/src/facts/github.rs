use super::client::{ApiOutcome, Client};
use super::source::{HostingSource, StateQuery};
use crate::Result;
use crate::records::{Commit, Contributor, Issue, PullRequest, Repository, Review, User};
use chrono::{DateTime, SecondsFormat, Utc};
use ohno::EnrichableExt;

const LOG_TARGET: &str = "    github";

/// Default GitHub REST API endpoint.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// [`HostingSource`] backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubSource {
    client: Client,
}

impl GithubSource {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    fn repo_url(&self, owner: &str, repo: &str, suffix: &str) -> String {
        format!("{}/repos/{owner}/{repo}{suffix}", self.client.base_url())
    }
}

/// Turn a classified API result into a crate result, naming what was being fetched.
fn into_result<T>(result: ApiOutcome<T>, operation: &str, subject: &str) -> Result<T> {
    let error = match result {
        ApiOutcome::Ok(data) => return Ok(data),
        ApiOutcome::RateLimited(rate_limit) => {
            log::debug!(target: LOG_TARGET, "Rate limited while fetching {operation} for '{subject}'");
            ohno::app_err!("rate limited until {}", rate_limit.resets_at)
        }
        ApiOutcome::NotFound => ohno::app_err!("'{subject}' not found"),
        ApiOutcome::Failed(e) => e,
    };

    Err(error.enrich_with(|| format!("fetching {operation} for '{subject}'")))
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl HostingSource for GithubSource {
    async fn fetch_repository(&self, owner: &str, repo: &str) -> Result<Repository> {
        let url = self.repo_url(owner, repo, "");
        into_result(self.client.get_json(&url).await, "repository", &format!("{owner}/{repo}"))
    }

    async fn fetch_contributors(&self, owner: &str, repo: &str, per_page: u32, page: u32) -> Result<Vec<Contributor>> {
        let url = self.repo_url(owner, repo, &format!("/contributors?per_page={per_page}&page={page}"));
        into_result(self.client.get_json(&url).await, "contributors", &format!("{owner}/{repo}"))
    }

    async fn fetch_pull_requests(&self, owner: &str, repo: &str, state: StateQuery, per_page: u32) -> Result<Vec<PullRequest>> {
        let url = self.repo_url(
            owner,
            repo,
            &format!("/pulls?state={state}&sort=created&direction=desc&per_page={per_page}"),
        );
        into_result(self.client.get_json(&url).await, "pull requests", &format!("{owner}/{repo}"))
    }

    async fn fetch_issues(&self, owner: &str, repo: &str, state: StateQuery, per_page: u32) -> Result<Vec<Issue>> {
        let url = self.repo_url(
            owner,
            repo,
            &format!("/issues?state={state}&sort=created&direction=desc&per_page={per_page}"),
        );
        into_result(self.client.get_json(&url).await, "issues", &format!("{owner}/{repo}"))
    }

    async fn fetch_commits(
        &self,
        owner: &str,
        repo: &str,
        since: Option<DateTime<Utc>>,
        until: Option<DateTime<Utc>>,
        per_page: u32,
    ) -> Result<Vec<Commit>> {
        let mut query = format!("/commits?per_page={per_page}");
        if let Some(since) = since {
            query.push_str(&format!("&since={}", format_timestamp(since)));
        }
        if let Some(until) = until {
            query.push_str(&format!("&until={}", format_timestamp(until)));
        }

        let url = self.repo_url(owner, repo, &query);
        into_result(self.client.get_json(&url).await, "commits", &format!("{owner}/{repo}"))
    }

    async fn fetch_reviews(&self, owner: &str, repo: &str, pull_number: u64) -> Result<Vec<Review>> {
        let url = self.repo_url(owner, repo, &format!("/pulls/{pull_number}/reviews"));
        into_result(self.client.get_json(&url).await, "reviews", &format!("{owner}/{repo}#{pull_number}"))
    }

    async fn fetch_user(&self, username: &str) -> Result<User> {
        let url = format!("{}/users/{username}", self.client.base_url());
        into_result(self.client.get_json(&url).await, "user", username)
    }
}
