use chrono::{NaiveDateTime, Timelike};

/// Timestamp layout used by the application log format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One successfully parsed log line.
///
/// Every field except `additional_info` is guaranteed present and well-typed;
/// lines that cannot satisfy that are rejected by the parser instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub service_name: String,
    pub status_code: u16,
    pub response_time_ms: u64,
    pub user_id: String,
    pub transaction_id: String,
    pub additional_info: String,
}

impl LogRecord {
    pub fn is_error(&self) -> bool {
        self.status_code >= 400
    }

    pub fn hour(&self) -> u8 {
        self.timestamp.hour() as u8
    }

    /// Timestamp rendered the way it appears in the source line.
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// ISO-8601 rendering (`YYYY-MM-DDTHH:MM:SS`).
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    /// Formats the record back into a log line.
    pub fn to_line(&self) -> String {
        let mut line = format!(
            "{} {} {} {}ms {} {}",
            self.timestamp_str(),
            self.service_name,
            self.status_code,
            self.response_time_ms,
            self.user_id,
            self.transaction_id
        );
        if !self.additional_info.is_empty() {
            line.push(' ');
            line.push_str(&self.additional_info);
        }
        line
    }
}
