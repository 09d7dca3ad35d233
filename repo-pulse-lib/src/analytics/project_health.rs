use crate::Result;
use crate::facts::{HostingSource, StateQuery};
use crate::metrics::{
    AlertKind, BusFactor, HealthAlert, HealthMetric, MetricKind, calculate_bus_factor, calculate_issue_resolution_rate,
    calculate_overall_health_score, calculate_pr_merge_time, calculate_time_to_first_response, generate_health_alerts, issue_counts,
    merged_pull_requests,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "    health";

/// Thresholds each health metric is judged against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub time_to_first_response_hours: f64,
    pub pr_merge_time_hours: f64,
    pub issue_resolution_rate: f64,
    pub bus_factor: f64,
}

impl Thresholds {
    #[must_use]
    pub const fn for_kind(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::TimeToFirstResponse => self.time_to_first_response_hours,
            MetricKind::PrMergeTime => self.pr_merge_time_hours,
            MetricKind::IssueResolutionRate => self.issue_resolution_rate,
            MetricKind::BusFactor => self.bus_factor,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            time_to_first_response_hours: MetricKind::TimeToFirstResponse.default_threshold(),
            pr_merge_time_hours: MetricKind::PrMergeTime.default_threshold(),
            issue_resolution_rate: MetricKind::IssueResolutionRate.default_threshold(),
            bus_factor: MetricKind::BusFactor.default_threshold(),
        }
    }
}

/// Health summary for one repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectHealthMetrics {
    pub overall_score: u32,
    pub metrics: Vec<HealthMetric>,
    pub bus_factor: BusFactor,
    pub alerts: Vec<HealthAlert>,
}

impl ProjectHealthMetrics {
    #[must_use]
    pub fn has_critical_alerts(&self) -> bool {
        self.alerts.iter().any(|alert| alert.kind == AlertKind::Critical)
    }
}

/// Fetch the issues, pull requests and contributors of a repository and derive its health.
///
/// The three listings are fetched concurrently; any of them failing fails the
/// whole computation.
pub async fn project_health<S: HostingSource>(
    source: &S,
    owner: &str,
    repo: &str,
    per_page: u32,
    thresholds: &Thresholds,
    now: DateTime<Utc>,
) -> Result<ProjectHealthMetrics> {
    log::info!(target: LOG_TARGET, "Computing project health for {owner}/{repo}");

    let (issues, pull_requests, contributors) = futures::try_join!(
        source.fetch_issues(owner, repo, StateQuery::All, per_page),
        source.fetch_pull_requests(owner, repo, StateQuery::All, per_page),
        source.fetch_contributors(owner, repo, per_page, 1),
    )?;

    log::debug!(
        target: LOG_TARGET,
        "Fetched {} issues, {} pull requests and {} contributors for {owner}/{repo}",
        issues.len(),
        pull_requests.len(),
        contributors.len()
    );

    let issue_counts = issue_counts(&issues);
    let merged_prs = merged_pull_requests(&pull_requests);

    let time_to_first_response = calculate_time_to_first_response(owner, repo, &issues);
    let pr_merge_time = calculate_pr_merge_time(merged_prs.iter().copied());
    let issue_resolution_rate = calculate_issue_resolution_rate(&issue_counts.closed_issues, &issue_counts.open_issues_no_pr);
    let bus_factor = calculate_bus_factor(&contributors);

    let metrics = vec![
        metric(MetricKind::TimeToFirstResponse, time_to_first_response, thresholds),
        metric(MetricKind::PrMergeTime, pr_merge_time, thresholds),
        metric(MetricKind::IssueResolutionRate, f64::from(issue_resolution_rate), thresholds),
        metric(MetricKind::BusFactor, f64::from(bus_factor.score), thresholds),
    ];

    let overall_score = calculate_overall_health_score(&metrics);
    let alerts = generate_health_alerts(&metrics, &bus_factor, now);

    Ok(ProjectHealthMetrics {
        overall_score,
        metrics,
        bus_factor,
        alerts,
    })
}

fn metric(kind: MetricKind, value: f64, thresholds: &Thresholds) -> HealthMetric {
    HealthMetric::new(kind, value, thresholds.for_kind(kind))
}
