//! Partitioning of record collections into the buckets the calculators consume.

use crate::records::{Contributor, Issue, ItemState, PullRequest};
use strum::{Display, EnumIter};

/// Logical state used to select pull requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum PullRequestFilter {
    Open,
    Closed,

    /// Pull requests with a merge timestamp, regardless of the reported state
    Merged,

    /// No filtering
    All,
}

impl From<&str> for PullRequestFilter {
    /// Unrecognized names select everything.
    fn from(value: &str) -> Self {
        match value {
            "open" => Self::Open,
            "closed" => Self::Closed,
            "merged" => Self::Merged,
            _ => Self::All,
        }
    }
}

impl PullRequestFilter {
    #[must_use]
    pub const fn matches(self, pull_request: &PullRequest) -> bool {
        match self {
            Self::Open => matches!(pull_request.state, ItemState::Open),
            Self::Closed => matches!(pull_request.state, ItemState::Closed),
            Self::Merged => pull_request.merged_at.is_some(),
            Self::All => true,
        }
    }
}

/// Logical state used to select issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum IssueFilter {
    Open,
    Closed,

    /// Open entries that are not pull requests in disguise
    OpenNoPr,

    /// No filtering
    All,
}

impl From<&str> for IssueFilter {
    /// Unrecognized names select everything.
    fn from(value: &str) -> Self {
        match value {
            "open" => Self::Open,
            "closed" => Self::Closed,
            "open_no_pr" => Self::OpenNoPr,
            _ => Self::All,
        }
    }
}

impl IssueFilter {
    #[must_use]
    pub const fn matches(self, issue: &Issue) -> bool {
        match self {
            Self::Open => matches!(issue.state, ItemState::Open),
            Self::Closed => matches!(issue.state, ItemState::Closed),
            Self::OpenNoPr => matches!(issue.state, ItemState::Open) && !issue.is_pull_request(),
            Self::All => true,
        }
    }
}

#[must_use]
pub fn filter_pull_requests_by_state(pull_requests: &[PullRequest], state: PullRequestFilter) -> Vec<&PullRequest> {
    pull_requests.iter().filter(|pr| state.matches(pr)).collect()
}

#[must_use]
pub fn filter_issues_by_state(issues: &[Issue], state: IssueFilter) -> Vec<&Issue> {
    issues.iter().filter(|issue| state.matches(issue)).collect()
}

/// Closed pull requests that carry a merge timestamp.
///
/// Unlike [`PullRequestFilter::Merged`], this also requires the closed state so
/// that "closed, never merged" and "merged" stay distinct.
#[must_use]
pub fn merged_pull_requests(pull_requests: &[PullRequest]) -> Vec<&PullRequest> {
    pull_requests
        .iter()
        .filter(|pr| pr.state == ItemState::Closed && pr.merged_at.is_some())
        .collect()
}

/// The first `limit` contributors, in the order the API returned them.
#[must_use]
pub fn limit_contributors(contributors: &[Contributor], limit: usize) -> &[Contributor] {
    contributors.get(..limit).unwrap_or(contributors)
}

/// Pull request counts by state, along with the subsets they were counted from.
#[derive(Debug, Clone)]
pub struct PullRequestCounts<'a> {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    pub merged: usize,
    pub open_prs: Vec<&'a PullRequest>,
    pub closed_prs: Vec<&'a PullRequest>,
    pub merged_prs: Vec<&'a PullRequest>,
}

#[must_use]
pub fn pull_request_counts(pull_requests: &[PullRequest]) -> PullRequestCounts<'_> {
    let open_prs = filter_pull_requests_by_state(pull_requests, PullRequestFilter::Open);
    let closed_prs = filter_pull_requests_by_state(pull_requests, PullRequestFilter::Closed);
    let merged_prs = merged_pull_requests(pull_requests);

    PullRequestCounts {
        total: pull_requests.len(),
        open: open_prs.len(),
        closed: closed_prs.len(),
        merged: merged_prs.len(),
        open_prs,
        closed_prs,
        merged_prs,
    }
}

/// Issue counts by state, along with the subsets they were counted from.
#[derive(Debug, Clone)]
pub struct IssueCounts<'a> {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    pub open_no_pr: usize,
    pub open_issues: Vec<&'a Issue>,
    pub closed_issues: Vec<&'a Issue>,
    pub open_issues_no_pr: Vec<&'a Issue>,
}

#[must_use]
pub fn issue_counts(issues: &[Issue]) -> IssueCounts<'_> {
    let open_issues = filter_issues_by_state(issues, IssueFilter::Open);
    let closed_issues = filter_issues_by_state(issues, IssueFilter::Closed);
    let open_issues_no_pr = filter_issues_by_state(issues, IssueFilter::OpenNoPr);

    IssueCounts {
        total: issues.len(),
        open: open_issues.len(),
        closed: closed_issues.len(),
        open_no_pr: open_issues_no_pr.len(),
        open_issues,
        closed_issues,
        open_issues_no_pr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::PullRequestRef;
    use chrono::{DateTime, Utc};

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().to_utc()
    }

    fn pr(number: u64, state: ItemState, merged: bool) -> PullRequest {
        PullRequest {
            id: number * 100,
            number,
            state,
            title: String::new(),
            created_at: Some(ts("2024-01-01T00:00:00Z")),
            closed_at: None,
            merged_at: merged.then(|| ts("2024-01-02T00:00:00Z")),
        }
    }

    fn issue(number: u64, state: ItemState, is_pr: bool) -> Issue {
        Issue {
            id: number * 100,
            number,
            state,
            title: String::new(),
            created_at: Some(ts("2024-01-01T00:00:00Z")),
            closed_at: None,
            pull_request: is_pr.then(PullRequestRef::default),
        }
    }

    fn numbers<T>(items: &[&T], number: impl Fn(&T) -> u64) -> Vec<u64> {
        items.iter().map(|&item| number(item)).collect()
    }

    fn sample_prs() -> Vec<PullRequest> {
        vec![
            pr(1, ItemState::Open, false),
            pr(2, ItemState::Closed, false),
            pr(3, ItemState::Closed, true),
            // inconsistent record: merge timestamp but still reported open
            pr(4, ItemState::Open, true),
        ]
    }

    fn sample_issues() -> Vec<Issue> {
        vec![
            issue(1, ItemState::Open, false),
            issue(2, ItemState::Open, true),
            issue(3, ItemState::Closed, false),
            issue(4, ItemState::Closed, true),
        ]
    }

    #[test]
    fn test_filter_pull_requests_open() {
        let prs = sample_prs();
        let open = filter_pull_requests_by_state(&prs, PullRequestFilter::Open);
        assert_eq!(numbers(&open, |p: &PullRequest| p.number), vec![1, 4]);
    }

    #[test]
    fn test_filter_pull_requests_closed() {
        let prs = sample_prs();
        let closed = filter_pull_requests_by_state(&prs, PullRequestFilter::Closed);
        assert_eq!(numbers(&closed, |p: &PullRequest| p.number), vec![2, 3]);
    }

    #[test]
    fn test_filter_pull_requests_merged_checks_timestamp_only() {
        let prs = sample_prs();
        let merged = filter_pull_requests_by_state(&prs, PullRequestFilter::Merged);
        assert_eq!(numbers(&merged, |p: &PullRequest| p.number), vec![3, 4]);
    }

    #[test]
    fn test_filter_pull_requests_unknown_state_is_identity() {
        let prs = sample_prs();
        let all = filter_pull_requests_by_state(&prs, PullRequestFilter::from("draft"));
        assert_eq!(numbers(&all, |p: &PullRequest| p.number), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_pull_request_filter_from_str() {
        assert_eq!(PullRequestFilter::from("open"), PullRequestFilter::Open);
        assert_eq!(PullRequestFilter::from("closed"), PullRequestFilter::Closed);
        assert_eq!(PullRequestFilter::from("merged"), PullRequestFilter::Merged);
        assert_eq!(PullRequestFilter::from("MERGED"), PullRequestFilter::All);
    }

    #[test]
    fn test_merged_pull_requests_requires_closed_state() {
        let prs = sample_prs();
        let merged = merged_pull_requests(&prs);
        assert_eq!(numbers(&merged, |p: &PullRequest| p.number), vec![3]);
    }

    #[test]
    fn test_filter_issues_open_and_closed() {
        let issues = sample_issues();
        let open = filter_issues_by_state(&issues, IssueFilter::Open);
        let closed = filter_issues_by_state(&issues, IssueFilter::Closed);
        assert_eq!(numbers(&open, |i: &Issue| i.number), vec![1, 2]);
        assert_eq!(numbers(&closed, |i: &Issue| i.number), vec![3, 4]);
    }

    #[test]
    fn test_filter_issues_open_no_pr_excludes_pull_requests() {
        let issues = sample_issues();
        let open = filter_issues_by_state(&issues, IssueFilter::OpenNoPr);
        assert_eq!(numbers(&open, |i: &Issue| i.number), vec![1]);
    }

    #[test]
    fn test_filter_issues_unknown_state_is_identity() {
        let issues = sample_issues();
        let all = filter_issues_by_state(&issues, IssueFilter::from("locked"));
        assert_eq!(all.len(), issues.len());
    }

    #[test]
    fn test_issue_filter_display() {
        assert_eq!(IssueFilter::OpenNoPr.to_string(), "open_no_pr");
        assert_eq!(IssueFilter::from("open_no_pr"), IssueFilter::OpenNoPr);
    }

    #[test]
    fn test_limit_contributors_truncates() {
        let contributors = vec![Contributor::new("a", 5), Contributor::new("b", 9), Contributor::new("c", 1)];
        let limited = limit_contributors(&contributors, 2);
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].login.as_deref(), Some("a"));
        assert_eq!(limited[1].login.as_deref(), Some("b"));
    }

    #[test]
    fn test_limit_contributors_beyond_length_returns_all() {
        let contributors = vec![Contributor::new("a", 5), Contributor::new("b", 9)];
        assert_eq!(limit_contributors(&contributors, 2), contributors.as_slice());
        assert_eq!(limit_contributors(&contributors, 20), contributors.as_slice());
    }

    #[test]
    fn test_limit_contributors_zero() {
        let contributors = vec![Contributor::new("a", 5)];
        assert!(limit_contributors(&contributors, 0).is_empty());
    }

    #[test]
    fn test_pull_request_counts() {
        let prs = sample_prs();
        let counts = pull_request_counts(&prs);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.open, 2);
        assert_eq!(counts.closed, 2);
        assert_eq!(counts.merged, 1);
        assert_eq!(counts.merged_prs[0].number, 3);
    }

    #[test]
    fn test_pull_request_counts_empty() {
        let counts = pull_request_counts(&[]);
        assert_eq!(counts.total, 0);
        assert!(counts.open_prs.is_empty());
        assert!(counts.merged_prs.is_empty());
    }

    #[test]
    fn test_issue_counts() {
        let issues = sample_issues();
        let counts = issue_counts(&issues);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.open, 2);
        assert_eq!(counts.closed, 2);
        assert_eq!(counts.open_no_pr, 1);
        assert_eq!(counts.open_issues_no_pr[0].number, 1);
    }
}
