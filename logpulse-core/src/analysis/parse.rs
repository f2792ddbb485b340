use crate::analysis::types::{LogRecord, TIMESTAMP_FORMAT};
use chrono::{NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<ts>[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2})\s+(?P<service>\S+)\s+(?P<status>[0-9]+)\s+(?P<rt>[0-9]+)ms\s+(?P<user>\S+)\s+(?P<tx>\S+)(?:\s+(?P<info>.*))?$",
    )
    .expect("line pattern is a valid regex")
});

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line does not match the expected log format")]
    Malformed { line: String },

    #[error("invalid timestamp '{value}'")]
    InvalidTimestamp { value: String, line: String },

    #[error("{field} value '{value}' is out of range")]
    OutOfRange {
        field: &'static str,
        value: String,
        line: String,
    },
}

impl ParseError {
    /// The offending line, for diagnostics.
    pub fn line(&self) -> &str {
        match self {
            Self::Malformed { line }
            | Self::InvalidTimestamp { line, .. }
            | Self::OutOfRange { line, .. } => line,
        }
    }
}

/// Parses one raw log line into a [`LogRecord`].
///
/// Surrounding whitespace is trimmed before matching. Malformed input is an
/// expected outcome and is reported as a [`ParseError`], never a panic.
pub fn parse_line(raw: &str) -> Result<LogRecord, ParseError> {
    let line = raw.trim();

    let Some(caps) = LINE_PATTERN.captures(line) else {
        return Err(ParseError::Malformed {
            line: line.to_string(),
        });
    };

    let ts = &caps["ts"];
    let timestamp = NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT)
        .ok()
        // chrono accepts `:60` as a leap second; the log format does not.
        .filter(|t| t.nanosecond() < 1_000_000_000)
        .ok_or_else(|| ParseError::InvalidTimestamp {
            value: ts.to_string(),
            line: line.to_string(),
        })?;

    let status_code = parse_number::<u16>(&caps["status"], "status_code", line)?;
    let response_time_ms = parse_number::<u64>(&caps["rt"], "response_time", line)?;

    Ok(LogRecord {
        timestamp,
        service_name: caps["service"].to_string(),
        status_code,
        response_time_ms,
        user_id: caps["user"].to_string(),
        transaction_id: caps["tx"].to_string(),
        additional_info: caps
            .name("info")
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    })
}

// Digit classes are enforced by the pattern, so only overflow can fail here.
fn parse_number<T: std::str::FromStr>(
    digits: &str,
    field: &'static str,
    line: &str,
) -> Result<T, ParseError> {
    digits.parse::<T>().map_err(|_| ParseError::OutOfRange {
        field,
        value: digits.to_string(),
        line: line.to_string(),
    })
}
