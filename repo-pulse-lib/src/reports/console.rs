use crate::Result;
use crate::analytics::{ProjectHealthMetrics, TeamMetrics};
use crate::metrics::{AlertKind, MetricKind, MetricStatus, RiskLevel, TeamMember};
use core::fmt::Write;
use owo_colors::OwoColorize;

pub fn generate_health<W: Write>(repository: &str, health: &ProjectHealthMetrics, use_colors: bool, writer: &mut W) -> Result<()> {
    let score = format!("{}/100", health.overall_score);
    let score = if use_colors {
        match health.overall_score {
            80.. => score.green().bold().to_string(),
            50..80 => score.yellow().bold().to_string(),
            _ => score.red().bold().to_string(),
        }
    } else {
        score
    };
    writeln!(writer, "Project health for {repository}: {score}")?;
    writeln!(writer)?;

    let max_name_len = health.metrics.iter().map(|m| m.name().len()).max().unwrap_or(0);
    for metric in &health.metrics {
        let status = format_status(metric.status, use_colors);
        writeln!(
            writer,
            "  {:<width$} : {} (threshold {}, trend {}) {status}",
            metric.name(),
            format_value(metric.kind, metric.value),
            format_value(metric.kind, metric.threshold),
            metric.trend,
            width = max_name_len
        )?;
    }

    writeln!(writer)?;
    let risk = health.bus_factor.risk_level.to_string();
    let risk = if use_colors {
        match health.bus_factor.risk_level {
            RiskLevel::Low => risk.green().to_string(),
            RiskLevel::Medium => risk.yellow().to_string(),
            RiskLevel::High => risk.red().to_string(),
        }
    } else {
        risk
    };
    writeln!(
        writer,
        "Bus factor: {} critical contributor(s), {risk} risk",
        health.bus_factor.critical_contributors
    )?;

    if !health.alerts.is_empty() {
        writeln!(writer)?;
        if use_colors {
            writeln!(writer, "{}", "Alerts".bold())?;
        } else {
            writeln!(writer, "Alerts")?;
        }

        for alert in &health.alerts {
            let kind = alert.kind.to_string();
            let kind = if use_colors {
                match alert.kind {
                    AlertKind::Warning => kind.yellow().to_string(),
                    AlertKind::Critical => kind.red().bold().to_string(),
                }
            } else {
                kind
            };
            writeln!(writer, "  [{kind}] {}", alert.message)?;
        }
    }

    Ok(())
}

pub fn generate_team<W: Write>(repository: &str, team: &TeamMetrics, use_colors: bool, writer: &mut W) -> Result<()> {
    heading(writer, &format!("Team metrics for {repository}"), use_colors)?;

    let rows = [
        ("Commits", team.total_commits.to_string()),
        ("Pull requests", team.total_pull_requests.to_string()),
        ("  open", team.open_pull_requests.to_string()),
        ("  closed", team.closed_pull_requests.to_string()),
        ("  merged", team.merged_pull_requests.to_string()),
        ("Issues", team.total_issues.to_string()),
        ("Average response time", format!("{:.1}h", team.average_response_time)),
        ("Code review coverage", format!("{}%", team.code_review_coverage)),
    ];

    let max_name_len = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, value) in rows {
        writeln!(writer, "  {name:<max_name_len$} : {value}")?;
    }

    Ok(())
}

pub fn generate_contributors<W: Write>(repository: &str, members: &[TeamMember], use_colors: bool, writer: &mut W) -> Result<()> {
    heading(writer, &format!("Top contributors for {repository}"), use_colors)?;

    if members.is_empty() {
        writeln!(writer, "  no contributors")?;
        return Ok(());
    }

    let logins: Vec<&str> = members
        .iter()
        .map(|m| m.contributor.login.as_deref().unwrap_or("(anonymous)"))
        .collect();
    let max_login_len = logins.iter().map(|l| l.len()).max().unwrap_or(0);

    for (member, login) in members.iter().zip(logins) {
        let name = member.user.as_ref().and_then(|u| u.name.as_deref()).unwrap_or_default();
        writeln!(writer, "  {login:<max_login_len$} : {:>6} commits  {name}", member.commits)?;
    }

    Ok(())
}

fn heading<W: Write>(writer: &mut W, text: &str, use_colors: bool) -> Result<()> {
    if use_colors {
        writeln!(writer, "{}", text.bold())?;
    } else {
        writeln!(writer, "{text}")?;
    }
    writeln!(writer)?;
    Ok(())
}

fn format_status(status: MetricStatus, use_colors: bool) -> String {
    let text = status.to_string();
    if !use_colors {
        return text;
    }

    match status {
        MetricStatus::Healthy => text.green().to_string(),
        MetricStatus::Warning => text.yellow().to_string(),
        MetricStatus::Critical => text.red().bold().to_string(),
    }
}

fn format_value(kind: MetricKind, value: f64) -> String {
    match kind {
        MetricKind::TimeToFirstResponse | MetricKind::PrMergeTime => format!("{value:.1}{}", kind.unit()),
        MetricKind::IssueResolutionRate | MetricKind::BusFactor => format!("{value:.0}{}", kind.unit()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{BusFactor, HealthAlert, HealthMetric, transform_contributor_to_team_member};
    use crate::records::{Contributor, User};
    use chrono::{DateTime, Utc};

    fn sample_health() -> ProjectHealthMetrics {
        let metrics = vec![
            HealthMetric::new(MetricKind::TimeToFirstResponse, 4.2, 24.0),
            HealthMetric::new(MetricKind::PrMergeTime, 60.0, 48.0),
            HealthMetric::new(MetricKind::IssueResolutionRate, 80.0, 70.0),
            HealthMetric::new(MetricKind::BusFactor, 2.0, 3.0),
        ];
        let bus_factor = BusFactor {
            score: 2,
            critical_contributors: 2,
            risk_level: RiskLevel::High,
        };
        let now = DateTime::<Utc>::from_timestamp(1_704_067_200, 0).unwrap();
        let alerts = crate::metrics::generate_health_alerts(&metrics, &bus_factor, now);

        ProjectHealthMetrics {
            overall_score: 62,
            metrics,
            bus_factor,
            alerts,
        }
    }

    #[test]
    fn test_health_plain_output() {
        let mut output = String::new();
        generate_health("o/r", &sample_health(), false, &mut output).unwrap();

        assert!(output.starts_with("Project health for o/r: 62/100\n"));
        assert!(output.contains("  PR Merge Time          : 60.0h (threshold 48.0h, trend stable) warning"));
        assert!(output.contains("Issue Resolution Rate  : 80% (threshold 70%, trend stable) healthy"));
        assert!(output.contains("Bus factor: 2 critical contributor(s), high risk"));
        assert!(output.contains("  [warning] PR Merge Time is above recommended threshold (60 vs 48)"));
        assert!(output.contains("  [critical] Bus factor is critically low (2). Project sustainability is at risk."));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_health_colored_output() {
        let mut output = String::new();
        generate_health("o/r", &sample_health(), true, &mut output).unwrap();
        assert!(output.contains('\u{1b}'));
    }

    #[test]
    fn test_health_without_alerts_omits_section() {
        let health = ProjectHealthMetrics {
            alerts: Vec::<HealthAlert>::new(),
            ..sample_health()
        };
        let mut output = String::new();
        generate_health("o/r", &health, false, &mut output).unwrap();
        assert!(!output.contains("Alerts"));
    }

    #[test]
    fn test_team_output() {
        let team = TeamMetrics {
            total_commits: 12,
            total_pull_requests: 5,
            total_issues: 7,
            open_pull_requests: 1,
            closed_pull_requests: 4,
            merged_pull_requests: 3,
            average_response_time: 4.0,
            code_review_coverage: 67,
        };
        let mut output = String::new();
        generate_team("o/r", &team, false, &mut output).unwrap();

        insta::assert_snapshot!(output.trim_end(), @r"
        Team metrics for o/r

          Commits               : 12
          Pull requests         : 5
            open                : 1
            closed              : 4
            merged              : 3
          Issues                : 7
          Average response time : 4.0h
          Code review coverage  : 67%
        ");
    }

    #[test]
    fn test_contributors_output() {
        let user = User {
            login: "alice".to_string(),
            name: Some("Alice Liddell".to_string()),
            ..User::default()
        };
        let members = vec![
            transform_contributor_to_team_member(&Contributor::new("alice", 120), Some(user)),
            transform_contributor_to_team_member(&Contributor::default(), None),
        ];

        let mut output = String::new();
        generate_contributors("o/r", &members, false, &mut output).unwrap();

        assert!(output.contains("alice       :    120 commits  Alice Liddell"));
        assert!(output.contains("(anonymous) :      0 commits"));
    }

    #[test]
    fn test_contributors_empty() {
        let mut output = String::new();
        generate_contributors("o/r", &[], false, &mut output).unwrap();
        assert!(output.contains("no contributors"));
    }
}
