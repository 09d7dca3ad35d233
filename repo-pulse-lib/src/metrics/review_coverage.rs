use super::calculators::percentage;
use crate::Result;
use crate::records::{PullRequest, Review};
use std::sync::Arc;

const LOG_TARGET: &str = "   reviews";

/// Number of merged pull requests whose reviews are fetched.
pub const REVIEW_SAMPLE_SIZE: usize = 20;

/// What happened when fetching the reviews of one pull request.
#[derive(Debug, Clone)]
pub enum ReviewOutcome {
    /// At least one review was found.
    Reviewed(usize),

    /// The pull request has no reviews.
    Unreviewed,

    /// The reviews could not be fetched.
    FetchFailed(Arc<ohno::AppError>),
}

impl ReviewOutcome {
    #[must_use]
    pub const fn is_reviewed(&self) -> bool {
        matches!(self, Self::Reviewed(_))
    }
}

impl From<Result<Vec<Review>>> for ReviewOutcome {
    fn from(result: Result<Vec<Review>>) -> Self {
        match result {
            Ok(reviews) if reviews.is_empty() => Self::Unreviewed,
            Ok(reviews) => Self::Reviewed(reviews.len()),
            Err(e) => Self::FetchFailed(Arc::new(e)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReviewSample {
    pub pull_number: u64,
    pub outcome: ReviewOutcome,
}

/// Fetch reviews for the first [`REVIEW_SAMPLE_SIZE`] pull requests, one at a time.
///
/// A failed fetch is recorded as [`ReviewOutcome::FetchFailed`] and logged; the
/// remaining pull requests are still sampled.
pub async fn sample_reviews<'a, F, Fut>(fetch_reviews: F, owner: &'a str, repo: &'a str, pull_requests: &[&PullRequest]) -> Vec<ReviewSample>
where
    F: Fn(&'a str, &'a str, u64) -> Fut,
    Fut: Future<Output = Result<Vec<Review>>>,
{
    let mut samples = Vec::with_capacity(pull_requests.len().min(REVIEW_SAMPLE_SIZE));

    for pr in pull_requests.iter().take(REVIEW_SAMPLE_SIZE) {
        let outcome = ReviewOutcome::from(fetch_reviews(owner, repo, pr.number).await);

        if let ReviewOutcome::FetchFailed(e) = &outcome {
            log::warn!(target: LOG_TARGET, "Could not fetch reviews for {owner}/{repo}#{}: {e:#}", pr.number);
        }

        samples.push(ReviewSample {
            pull_number: pr.number,
            outcome,
        });
    }

    samples
}

/// Share of merged pull requests known to be reviewed, as a whole percentage.
///
/// Only the sampled pull requests can count as reviewed, but the denominator is
/// the full merged count, so repositories with more merged pull requests than
/// the sample size are reported conservatively.
#[must_use]
pub fn review_coverage(samples: &[ReviewSample], total_merged: usize) -> u32 {
    let reviewed = samples.iter().filter(|s| s.outcome.is_reviewed()).count();
    percentage(reviewed, total_merged)
}

/// Sample the reviews of merged pull requests and compute the review coverage.
pub async fn calculate_review_coverage<'a, F, Fut>(fetch_reviews: F, owner: &'a str, repo: &'a str, merged_prs: &[&PullRequest]) -> u32
where
    F: Fn(&'a str, &'a str, u64) -> Fut,
    Fut: Future<Output = Result<Vec<Review>>>,
{
    if merged_prs.is_empty() {
        return 0;
    }

    let samples = sample_reviews(fetch_reviews, owner, repo, merged_prs).await;
    review_coverage(&samples, merged_prs.len())
}
