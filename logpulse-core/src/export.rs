//! JSON export of a parse run.
//!
//! The document layout (`metadata` / `metrics` / `logs`) is consumed by
//! external tooling; field names and nesting must stay stable.

use crate::analysis::{LogRecord, ParseRun, SummaryMetrics};
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize export document: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportMetadata {
    pub source_file: String,
    pub parsed_at: String,
    pub total_log_entries: usize,
}

/// Serialized form of one [`LogRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogDocument<'a> {
    pub timestamp: String,
    pub datetime: String,
    pub service_name: &'a str,
    pub status_code: u16,
    pub response_time_ms: u64,
    pub user_id: &'a str,
    pub transaction_id: &'a str,
    pub additional_info: &'a str,
    pub is_error: bool,
}

impl<'a> From<&'a LogRecord> for LogDocument<'a> {
    fn from(r: &'a LogRecord) -> Self {
        Self {
            timestamp: r.timestamp_str(),
            datetime: r.timestamp_iso(),
            service_name: &r.service_name,
            status_code: r.status_code,
            response_time_ms: r.response_time_ms,
            user_id: &r.user_id,
            transaction_id: &r.transaction_id,
            additional_info: &r.additional_info,
            is_error: r.is_error(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub metadata: ExportMetadata,
    /// Serialized as `{}` when the run produced no records.
    #[serde(serialize_with = "summary_or_empty")]
    pub metrics: Option<SummaryMetrics>,
    pub logs: Vec<LogDocument<'a>>,
}

impl<'a> ExportDocument<'a> {
    pub fn from_run(run: &'a ParseRun, parsed_at: NaiveDateTime) -> Self {
        Self {
            metadata: ExportMetadata {
                source_file: run.origin().to_string(),
                parsed_at: parsed_at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
                total_log_entries: run.records().len(),
            },
            metrics: run.summary(),
            logs: run.records().iter().map(LogDocument::from).collect(),
        }
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn write_file(&self, path: &Path) -> Result<(), ExportError> {
        let wrap = |source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(wrap)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer).map_err(|e| match e {
            ExportError::Serialize(e) if e.is_io() => wrap(io::Error::from(e)),
            other => other,
        })?;
        writer.flush().map_err(wrap)?;

        info!(path = %path.display(), entries = self.logs.len(), "exported parsed logs");
        Ok(())
    }
}

/// `parsed_logs_YYYYMMDD_HHMMSS.json`
pub fn default_export_path(now: NaiveDateTime) -> PathBuf {
    PathBuf::from(format!("parsed_logs_{}.json", now.format("%Y%m%d_%H%M%S")))
}

fn summary_or_empty<S: Serializer>(
    metrics: &Option<SummaryMetrics>,
    s: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;

    match metrics {
        Some(m) => m.serialize(s),
        None => s.serialize_map(Some(0))?.end(),
    }
}
