use serde::{Deserialize, Serialize};

/// Alerting limits. Every comparison is strict (`>`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    /// Error rate (percent) above which a warning is raised.
    pub error_rate_percent: f64,
    /// Error rate (percent) above which the alert becomes critical.
    pub error_rate_critical_percent: f64,
    pub p95_response_time_ms: f64,
    pub p95_response_time_critical_ms: f64,
    /// Absolute error count; this rule only ever warns.
    pub error_count: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            error_rate_percent: 25.0,
            error_rate_critical_percent: 50.0,
            p95_response_time_ms: 1000.0,
            p95_response_time_critical_ms: 2000.0,
            error_count: 50,
        }
    }
}
