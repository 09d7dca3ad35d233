use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The metrics that make up a project's health score.
///
/// Each kind knows how to normalize its raw value into a 0-100 sub-score, how
/// much it weighs in the overall score, and how its status is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum MetricKind {
    #[serde(rename = "Time to First Response")]
    #[strum(serialize = "Time to First Response")]
    TimeToFirstResponse,

    #[serde(rename = "PR Merge Time")]
    #[strum(serialize = "PR Merge Time")]
    PrMergeTime,

    #[serde(rename = "Issue Resolution Rate")]
    #[strum(serialize = "Issue Resolution Rate")]
    IssueResolutionRate,

    #[serde(rename = "Bus Factor")]
    #[strum(serialize = "Bus Factor")]
    BusFactor,
}

impl MetricKind {
    /// Share of the overall health score contributed by this metric.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::TimeToFirstResponse | Self::PrMergeTime | Self::IssueResolutionRate | Self::BusFactor => 0.25,
        }
    }

    /// Whether smaller values are healthier.
    #[must_use]
    pub const fn lower_is_better(self) -> bool {
        matches!(self, Self::TimeToFirstResponse | Self::PrMergeTime)
    }

    /// Threshold used when none is configured.
    #[must_use]
    pub const fn default_threshold(self) -> f64 {
        match self {
            Self::TimeToFirstResponse => 24.0,
            Self::PrMergeTime => 48.0,
            Self::IssueResolutionRate => 70.0,
            Self::BusFactor => 3.0,
        }
    }

    #[must_use]
    pub const fn default_trend(self) -> Trend {
        match self {
            Self::BusFactor => Trend::Up,
            Self::TimeToFirstResponse | Self::PrMergeTime | Self::IssueResolutionRate => Trend::Stable,
        }
    }

    /// Unit suffix used when displaying values.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::TimeToFirstResponse | Self::PrMergeTime => "h",
            Self::IssueResolutionRate => "%",
            Self::BusFactor => "",
        }
    }

    /// Map a raw value onto a 0-100 sub-score.
    ///
    /// Durations lose points linearly as they approach the threshold and bottom
    /// out at zero; the resolution rate is already a percentage; the bus factor
    /// earns points in proportion to the threshold, capped at 100. A ratio that
    /// is not finite (non-positive threshold) scores zero.
    #[must_use]
    pub fn normalize(self, value: f64, threshold: f64) -> f64 {
        match self {
            Self::TimeToFirstResponse | Self::PrMergeTime => {
                let ratio = value / threshold;
                if ratio.is_finite() { (100.0 - ratio * 100.0).max(0.0) } else { 0.0 }
            }
            Self::IssueResolutionRate => value,
            Self::BusFactor => {
                let ratio = value / threshold;
                if ratio.is_finite() { (ratio * 100.0).min(100.0) } else { 0.0 }
            }
        }
    }

    /// Healthy when the value is on the right side of the threshold, otherwise a warning.
    #[must_use]
    pub fn status(self, value: f64, threshold: f64) -> MetricStatus {
        let healthy = if self.lower_is_better() { value <= threshold } else { value >= threshold };
        if healthy { MetricStatus::Healthy } else { MetricStatus::Warning }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MetricStatus {
    Healthy,
    Warning,
    Critical,
}

/// A single health metric with the threshold it was judged against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthMetric {
    #[serde(rename = "name")]
    pub kind: MetricKind,
    pub value: f64,
    pub threshold: f64,
    pub trend: Trend,
    pub status: MetricStatus,
}

impl HealthMetric {
    /// Build a metric whose trend and status follow the kind's rules.
    #[must_use]
    pub fn new(kind: MetricKind, value: f64, threshold: f64) -> Self {
        Self {
            kind,
            value,
            threshold,
            trend: kind.default_trend(),
            status: kind.status(value, threshold),
        }
    }

    #[must_use]
    pub const fn with_status(self, status: MetricStatus) -> Self {
        Self { status, ..self }
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.kind.to_string()
    }
}
