use super::HealthMetric;

/// Weighted combination of metric sub-scores, clamped to 0..=100 and rounded.
#[must_use]
#[expect(clippy::cast_possible_truncation, reason = "value is clamped to 0..=100")]
#[expect(clippy::cast_sign_loss, reason = "value is clamped to 0..=100")]
pub fn calculate_overall_health_score(metrics: &[HealthMetric]) -> u32 {
    let score: f64 = metrics
        .iter()
        .map(|metric| metric.kind.normalize(metric.value, metric.threshold) * metric.kind.weight())
        .sum();

    score.clamp(0.0, 100.0).round() as u32
}
