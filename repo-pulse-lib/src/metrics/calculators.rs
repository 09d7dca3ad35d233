use crate::records::{Issue, PullRequest};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Value reported for time to first response until issue comments are fetched.
pub const TIME_TO_FIRST_RESPONSE_HOURS: f64 = 4.2;

/// Response delay assumed for every sampled pull request.
pub const ASSUMED_RESPONSE_HOURS: f64 = 4.0;

/// Number of pull requests sampled when estimating response time.
pub const RESPONSE_SAMPLE_SIZE: usize = 50;

/// Average number of hours between creation and merge.
///
/// Only pull requests carrying both timestamps take part; the others are left
/// out of the average entirely rather than counted as zero.
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "acceptable for statistics")]
pub fn calculate_pr_merge_time<'a>(merged_prs: impl IntoIterator<Item = &'a PullRequest>) -> f64 {
    let (total_hours, valid) = merged_prs
        .into_iter()
        .filter_map(merge_hours)
        .fold((0.0, 0_usize), |(sum, count), hours| (sum + hours, count + 1));

    if valid == 0 { 0.0 } else { total_hours / valid as f64 }
}

#[expect(clippy::cast_precision_loss, reason = "acceptable for duration")]
fn merge_hours(pull_request: &PullRequest) -> Option<f64> {
    let created_at = pull_request.created_at?;
    let merged_at = pull_request.merged_at?;
    Some((merged_at - created_at).num_milliseconds() as f64 / MILLIS_PER_HOUR)
}

/// Percentage of issues closed, rounded to the nearest whole number.
#[must_use]
pub fn calculate_issue_resolution_rate<T>(closed_issues: &[T], open_issues: &[T]) -> u32 {
    percentage(closed_issues.len(), closed_issues.len() + open_issues.len())
}

/// Time to first response on issues, in hours.
///
/// Always [`TIME_TO_FIRST_RESPONSE_HOURS`]: the real figure needs issue comment
/// timestamps, which are not fetched.
// TODO: compute from issue comment timestamps once `HostingSource` can list issue comments.
#[must_use]
pub const fn calculate_time_to_first_response(_owner: &str, _repo: &str, _issues: &[Issue]) -> f64 {
    TIME_TO_FIRST_RESPONSE_HOURS
}

/// Average pull request response time, in hours.
///
/// Every one of the first [`RESPONSE_SAMPLE_SIZE`] pull requests that has a
/// creation timestamp is assumed to get a response after
/// [`ASSUMED_RESPONSE_HOURS`], so the result is that constant whenever at least
/// one such pull request exists.
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "acceptable for statistics")]
pub fn calculate_average_response_time<'a>(pull_requests: impl IntoIterator<Item = &'a PullRequest>) -> f64 {
    let (total_hours, valid) = pull_requests
        .into_iter()
        .take(RESPONSE_SAMPLE_SIZE)
        .filter(|pr| pr.created_at.is_some())
        .fold((0.0, 0_usize), |(sum, count), _| (sum + ASSUMED_RESPONSE_HOURS, count + 1));

    if valid == 0 { 0.0 } else { total_hours / valid as f64 }
}

/// `part / whole` as a whole percentage, rounding halves up. Zero when `whole` is zero.
#[expect(clippy::cast_precision_loss, reason = "counts are far below f64 precision")]
#[expect(clippy::cast_possible_truncation, reason = "result is within 0..=100 for part <= whole")]
#[expect(clippy::cast_sign_loss, reason = "inputs are non-negative")]
pub(super) fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }

    (part as f64 / whole as f64 * 100.0).round() as u32
}
