use super::{BusFactor, HealthMetric, MetricStatus, RiskLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Critical,
}

/// A notification raised by a metric outside its healthy range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthAlert {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: AlertKind,

    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub resolved: bool,
}

impl HealthAlert {
    fn new(id: String, kind: AlertKind, message: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            kind,
            message,
            timestamp: now,
            resolved: false,
        }
    }
}

/// Raise alerts for the metrics and bus factor of a project.
///
/// Every metric in the warning state yields a warning alert and every metric in
/// the critical state a critical one, in input order. A high-risk bus factor
/// adds a single critical alert at the end.
#[must_use]
pub fn generate_health_alerts(metrics: &[HealthMetric], bus_factor: &BusFactor, now: DateTime<Utc>) -> Vec<HealthAlert> {
    let mut alerts: Vec<HealthAlert> = metrics.iter().filter_map(|metric| metric_alert(metric, now)).collect();

    if bus_factor.risk_level == RiskLevel::High {
        alerts.push(HealthAlert::new(
            "alert-bus-factor-critical".to_string(),
            AlertKind::Critical,
            format!(
                "Bus factor is critically low ({}). Project sustainability is at risk.",
                bus_factor.score
            ),
            now,
        ));
    }

    alerts
}

fn metric_alert(metric: &HealthMetric, now: DateTime<Utc>) -> Option<HealthAlert> {
    let name = metric.name();
    let id = format!("alert-{}", slug(&name));

    match metric.status {
        MetricStatus::Healthy => None,
        MetricStatus::Warning => {
            let direction = if metric.value > metric.threshold { "above" } else { "below" };
            let message = format!(
                "{name} is {direction} recommended threshold ({} vs {})",
                metric.value, metric.threshold
            );
            Some(HealthAlert::new(id, AlertKind::Warning, message, now))
        }
        MetricStatus::Critical => Some(HealthAlert::new(
            id,
            AlertKind::Critical,
            format!("{name} requires immediate attention"),
            now,
        )),
    }
}

/// Lowercase with whitespace runs collapsed to a single `-`.
fn slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricKind;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z").unwrap().to_utc()
    }

    fn bus_factor(risk_level: RiskLevel, score: u32) -> BusFactor {
        BusFactor {
            score,
            critical_contributors: score,
            risk_level,
        }
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("PR Merge Time"), "pr-merge-time");
        assert_eq!(slug("Time to  First\tResponse"), "time-to-first-response");
    }

    #[test]
    fn test_warning_metric_and_high_bus_factor() {
        let metrics = [
            HealthMetric::new(MetricKind::PrMergeTime, 72.0, 48.0),
            HealthMetric::new(MetricKind::IssueResolutionRate, 80.0, 70.0),
        ];
        let alerts = generate_health_alerts(&metrics, &bus_factor(RiskLevel::High, 2), now());

        assert_eq!(alerts.len(), 2);

        assert_eq!(alerts[0].id, "alert-pr-merge-time");
        assert_eq!(alerts[0].kind, AlertKind::Warning);
        assert_eq!(alerts[0].message, "PR Merge Time is above recommended threshold (72 vs 48)");
        assert!(!alerts[0].resolved);
        assert_eq!(alerts[0].timestamp, now());

        assert_eq!(alerts[1].id, "alert-bus-factor-critical");
        assert_eq!(alerts[1].kind, AlertKind::Critical);
        assert_eq!(
            alerts[1].message,
            "Bus factor is critically low (2). Project sustainability is at risk."
        );
    }

    #[test]
    fn test_warning_below_threshold() {
        let metrics = [HealthMetric::new(MetricKind::IssueResolutionRate, 55.0, 70.0)];
        let alerts = generate_health_alerts(&metrics, &bus_factor(RiskLevel::Low, 6), now());
        assert_eq!(alerts.len(), 1);
        assert_eq!(
            alerts[0].message,
            "Issue Resolution Rate is below recommended threshold (55 vs 70)"
        );
        assert_eq!(alerts[0].id, "alert-issue-resolution-rate");
    }

    #[test]
    fn test_fractional_values_in_message() {
        let metrics = [HealthMetric::new(MetricKind::TimeToFirstResponse, 30.5, 24.0)];
        let alerts = generate_health_alerts(&metrics, &bus_factor(RiskLevel::Medium, 3), now());
        assert_eq!(
            alerts[0].message,
            "Time to First Response is above recommended threshold (30.5 vs 24)"
        );
    }

    #[test]
    fn test_critical_metric() {
        let metrics = [HealthMetric::new(MetricKind::BusFactor, 1.0, 3.0).with_status(MetricStatus::Critical)];
        let alerts = generate_health_alerts(&metrics, &bus_factor(RiskLevel::Medium, 3), now());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::Critical);
        assert_eq!(alerts[0].id, "alert-bus-factor");
        assert_eq!(alerts[0].message, "Bus Factor requires immediate attention");
    }

    #[test]
    fn test_all_healthy_no_alerts() {
        let metrics = [
            HealthMetric::new(MetricKind::TimeToFirstResponse, 4.2, 24.0),
            HealthMetric::new(MetricKind::BusFactor, 5.0, 3.0),
        ];
        assert!(generate_health_alerts(&metrics, &bus_factor(RiskLevel::Low, 5), now()).is_empty());
    }

    #[test]
    fn test_empty_metrics_with_high_bus_factor() {
        let alerts = generate_health_alerts(&[], &bus_factor(RiskLevel::High, 0), now());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].message, "Bus factor is critically low (0). Project sustainability is at risk.");
    }

    #[test]
    fn test_alert_serialization() {
        let alerts = generate_health_alerts(&[], &bus_factor(RiskLevel::High, 1), now());
        let json = serde_json::to_value(&alerts[0]).unwrap();
        assert_eq!(json["type"], "critical");
        assert_eq!(json["resolved"], false);
        assert_eq!(json["id"], "alert-bus-factor-critical");
    }
}
