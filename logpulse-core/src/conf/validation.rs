use crate::alerting::Thresholds;
use crate::conf::error::{ConfigError, ValidationErrors};
use crate::conf::types::{AppConfig, ElasticsearchConfig, MonitorConfig};

#[derive(Default)]
pub struct ValidationCtx {
    errors: Vec<ConfigError>,
}

impl ValidationCtx {
    pub fn push(&mut self, err: ConfigError) {
        self.errors.push(err);
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

/// Validate everything in a parsed config, collecting all problems.
pub fn validate_config(cfg: &AppConfig) -> Result<(), ValidationErrors> {
    let mut ctx = ValidationCtx::default();

    validate_elasticsearch(&cfg.elasticsearch, &mut ctx);
    validate_thresholds(&cfg.thresholds, &mut ctx);
    validate_monitor(&cfg.monitor, &mut ctx);

    ctx.into_result()
}

fn validate_elasticsearch(es: &ElasticsearchConfig, ctx: &mut ValidationCtx) {
    let url = es.url.trim();
    if url.is_empty() {
        ctx.push(ConfigError::InvalidUrl {
            url: es.url.clone(),
            reason: "url must not be empty",
        });
    } else if !(url.starts_with("http://") || url.starts_with("https://")) {
        ctx.push(ConfigError::InvalidUrl {
            url: es.url.clone(),
            reason: "scheme must be http or https",
        });
    }

    if es.index_prefix.trim().is_empty() {
        ctx.push(ConfigError::EmptyIndexPrefix);
    }

    if es.timeout_secs == 0 {
        ctx.push(ConfigError::InvalidTimeout);
    }
}

fn validate_thresholds(t: &Thresholds, ctx: &mut ValidationCtx) {
    let limits = [
        ("error_rate_percent", t.error_rate_percent),
        ("error_rate_critical_percent", t.error_rate_critical_percent),
        ("p95_response_time_ms", t.p95_response_time_ms),
        ("p95_response_time_critical_ms", t.p95_response_time_critical_ms),
    ];

    let mut all_valid = true;
    for (field, value) in limits {
        if !value.is_finite() || value < 0.0 {
            ctx.push(ConfigError::InvalidThreshold { field, value });
            all_valid = false;
        }
    }

    // Ordering only means something once every value is a real number.
    if !all_valid {
        return;
    }

    if t.error_rate_critical_percent < t.error_rate_percent {
        ctx.push(ConfigError::CriticalBelowWarning {
            critical: "error_rate_critical_percent",
            critical_value: t.error_rate_critical_percent,
            warning: "error_rate_percent",
            warning_value: t.error_rate_percent,
        });
    }

    if t.p95_response_time_critical_ms < t.p95_response_time_ms {
        ctx.push(ConfigError::CriticalBelowWarning {
            critical: "p95_response_time_critical_ms",
            critical_value: t.p95_response_time_critical_ms,
            warning: "p95_response_time_ms",
            warning_value: t.p95_response_time_ms,
        });
    }
}

fn validate_monitor(m: &MonitorConfig, ctx: &mut ValidationCtx) {
    if m.interval_secs == 0 {
        ctx.push(ConfigError::InvalidInterval);
    }
}
