use serde::Serialize;
use std::fmt;

/// Alert severity. Ordered: `Warning < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("WARNING"),
            Severity::Critical => f.write_str("CRITICAL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlertKind {
    #[serde(rename = "High Error Rate")]
    HighErrorRate,
    #[serde(rename = "High Response Time")]
    HighResponseTime,
    #[serde(rename = "High Error Count")]
    HighErrorCount,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::HighErrorRate => f.write_str("High Error Rate"),
            AlertKind::HighResponseTime => f.write_str("High Response Time"),
            AlertKind::HighErrorCount => f.write_str("High Error Count"),
        }
    }
}

/// A value with its unit, as observed or as configured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Measurement {
    Percent(f64),
    Millis(f64),
    Count(u64),
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Percent(v) => write!(f, "{v}%"),
            Measurement::Millis(v) => write!(f, "{v}ms"),
            Measurement::Count(n) => write!(f, "{n}"),
        }
    }
}

/// One threshold violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: Severity,
    pub message: String,
    pub current_value: Measurement,
    pub threshold: Measurement,
}
