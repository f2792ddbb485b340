use crate::analysis::LogRecord;
use crate::export::LogDocument;
use chrono::NaiveDate;
use serde::Serialize;

/// Document sent to the search index: the exported record plus `@timestamp`
/// for the index's own time-based partitioning.
#[derive(Debug, Serialize)]
pub struct IndexDocument<'a> {
    #[serde(flatten)]
    pub log: LogDocument<'a>,
    #[serde(rename = "@timestamp")]
    pub at_timestamp: String,
}

impl<'a> From<&'a LogRecord> for IndexDocument<'a> {
    fn from(record: &'a LogRecord) -> Self {
        Self {
            at_timestamp: record.timestamp_iso(),
            log: LogDocument::from(record),
        }
    }
}

/// Date-partitioned index name: `<prefix>-YYYY.MM.DD`.
pub fn index_name(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}-{}", date.format("%Y.%m.%d"))
}
