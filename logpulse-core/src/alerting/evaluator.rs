use crate::alerting::snapshot::MetricsSnapshot;
use crate::alerting::thresholds::Thresholds;
use crate::alerting::types::{Alert, AlertKind, Measurement, Severity};

/// Compares metrics snapshots against a fixed set of [`Thresholds`].
///
/// Rules are independent and never short-circuit, so one snapshot can raise
/// anywhere from zero to three alerts. Evaluation holds no state.
#[derive(Debug, Clone)]
pub struct ThresholdEvaluator {
    thresholds: Thresholds,
}

impl ThresholdEvaluator {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Alerts for every violated rule, in rule order.
    ///
    /// A missing snapshot (metrics source unreachable) yields no alerts:
    /// absence of data is not alertable.
    pub fn evaluate(&self, snapshot: Option<&MetricsSnapshot>) -> Vec<Alert> {
        let Some(m) = snapshot else {
            return Vec::new();
        };
        let t = &self.thresholds;
        let mut alerts = Vec::new();

        if m.error_rate > t.error_rate_percent {
            let severity = if m.error_rate > t.error_rate_critical_percent {
                Severity::Critical
            } else {
                Severity::Warning
            };
            alerts.push(alert(
                AlertKind::HighErrorRate,
                severity,
                "Error rate",
                Measurement::Percent(m.error_rate),
                Measurement::Percent(t.error_rate_percent),
            ));
        }

        if m.p95_response_time > t.p95_response_time_ms {
            let severity = if m.p95_response_time > t.p95_response_time_critical_ms {
                Severity::Critical
            } else {
                Severity::Warning
            };
            alerts.push(alert(
                AlertKind::HighResponseTime,
                severity,
                "95th percentile response time",
                Measurement::Millis(m.p95_response_time),
                Measurement::Millis(t.p95_response_time_ms),
            ));
        }

        if m.error_count > t.error_count {
            alerts.push(alert(
                AlertKind::HighErrorCount,
                Severity::Warning,
                "Total error count",
                Measurement::Count(m.error_count),
                Measurement::Count(t.error_count),
            ));
        }

        alerts
    }
}

fn alert(
    kind: AlertKind,
    severity: Severity,
    subject: &str,
    current_value: Measurement,
    threshold: Measurement,
) -> Alert {
    Alert {
        kind,
        severity,
        message: format!("{subject} is {current_value}, exceeding threshold of {threshold}"),
        current_value,
        threshold,
    }
}
