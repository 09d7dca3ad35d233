//! Metric derivation from hosting records
//!
//! This module turns raw, partial records from the hosting API into bounded,
//! interpretable health and team-performance figures.
//!
//! # Implementation Model
//!
//! Two groups of functions collaborate:
//!
//! - **Classifiers** partition, filter, count and reshape record collections
//!   into the subsets the calculators consume ([`filter_pull_requests_by_state`],
//!   [`issue_counts`], [`transform_contributor_to_team_member`], ...).
//! - **Calculators** compute individual statistics (merge time, resolution rate,
//!   bus factor, response time, review coverage) and combine them into a
//!   weighted overall score and a list of alerts.
//!
//! Everything here is a pure function of its inputs except
//! [`calculate_review_coverage`], which awaits an injected review fetcher for a
//! bounded sample of pull requests. Missing timestamps exclude a record from an
//! aggregate, empty inputs produce zeros, and nothing in this module returns an
//! error.
//!
//! Metrics are identified by the closed [`MetricKind`] enumeration, which owns
//! the normalization, weight and status rule for each metric.

mod bus_factor;
mod calculators;
mod classifiers;
mod health_alert;
mod health_metric;
mod health_score;
mod review_coverage;
mod team_member;

pub use bus_factor::{BusFactor, RiskLevel, calculate_bus_factor};
pub use calculators::{
    ASSUMED_RESPONSE_HOURS, RESPONSE_SAMPLE_SIZE, TIME_TO_FIRST_RESPONSE_HOURS, calculate_average_response_time,
    calculate_issue_resolution_rate, calculate_pr_merge_time, calculate_time_to_first_response,
};
pub use classifiers::{
    IssueCounts, IssueFilter, PullRequestCounts, PullRequestFilter, filter_issues_by_state, filter_pull_requests_by_state,
    issue_counts, limit_contributors, merged_pull_requests, pull_request_counts,
};
pub use health_alert::{AlertKind, HealthAlert, generate_health_alerts};
pub use health_metric::{HealthMetric, MetricKind, MetricStatus, Trend};
pub use health_score::calculate_overall_health_score;
pub use review_coverage::{REVIEW_SAMPLE_SIZE, ReviewOutcome, ReviewSample, calculate_review_coverage, review_coverage, sample_reviews};
pub use team_member::{TeamMember, transform_contributor_to_team_member};
