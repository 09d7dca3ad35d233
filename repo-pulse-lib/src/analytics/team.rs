use crate::Result;
use crate::facts::{HostingSource, StateQuery};
use crate::metrics::{
    TeamMember, calculate_average_response_time, calculate_review_coverage, limit_contributors, pull_request_counts,
    transform_contributor_to_team_member,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "      team";

/// Number of contributors enriched with a user profile by default.
pub const DEFAULT_TEAM_CONTRIBUTOR_LIMIT: usize = 20;

/// Activity and review figures for a repository's team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMetrics {
    pub total_commits: usize,
    pub total_pull_requests: usize,
    pub total_issues: usize,
    pub open_pull_requests: usize,
    pub closed_pull_requests: usize,
    pub merged_pull_requests: usize,
    pub average_response_time: f64,
    pub code_review_coverage: u32,
}

/// Compute team activity for a repository, optionally bounding commits to a time window.
///
/// Pull requests, issues and commits are fetched concurrently. Reviews are then
/// fetched one pull request at a time for a sample of the merged pull requests.
pub async fn team_metrics<S: HostingSource>(
    source: &S,
    owner: &str,
    repo: &str,
    since: Option<DateTime<Utc>>,
    until: Option<DateTime<Utc>>,
    per_page: u32,
) -> Result<TeamMetrics> {
    log::info!(target: LOG_TARGET, "Computing team metrics for {owner}/{repo}");

    let (pull_requests, issues, commits) = futures::try_join!(
        source.fetch_pull_requests(owner, repo, StateQuery::All, per_page),
        source.fetch_issues(owner, repo, StateQuery::All, per_page),
        source.fetch_commits(owner, repo, since, until, per_page),
    )?;

    let counts = pull_request_counts(&pull_requests);

    let code_review_coverage = calculate_review_coverage(
        move |owner, repo, pull_number| source.fetch_reviews(owner, repo, pull_number),
        owner,
        repo,
        &counts.merged_prs,
    )
    .await;

    Ok(TeamMetrics {
        total_commits: commits.len(),
        total_pull_requests: counts.total,
        total_issues: issues.len(),
        open_pull_requests: counts.open,
        closed_pull_requests: counts.closed,
        merged_pull_requests: counts.merged,
        average_response_time: calculate_average_response_time(&pull_requests),
        code_review_coverage,
    })
}

/// The leading contributors of a repository, each with their user profile.
///
/// Profiles are fetched one contributor at a time. A contributor whose profile
/// cannot be fetched, or who has no login, is kept without one.
pub async fn team_contributors<S: HostingSource>(source: &S, owner: &str, repo: &str, per_page: u32, limit: usize) -> Result<Vec<TeamMember>> {
    log::info!(target: LOG_TARGET, "Fetching team contributors for {owner}/{repo}");

    let contributors = source.fetch_contributors(owner, repo, per_page, 1).await?;
    let limited = limit_contributors(&contributors, limit);

    let mut members = Vec::with_capacity(limited.len());
    for contributor in limited {
        let user = match contributor.login.as_deref() {
            Some(login) => match source.fetch_user(login).await {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!(target: LOG_TARGET, "Could not fetch details for contributor '{login}': {e:#}");
                    None
                }
            },
            None => None,
        };

        members.push(transform_contributor_to_team_member(contributor, user));
    }

    Ok(members)
}
