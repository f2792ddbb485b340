mod document;
mod error;
mod sink;


pub use document::{IndexDocument, index_name};
pub use error::IngestError;
pub use sink::{ElasticsearchSink, IngestSink};

use crate::analysis::LogRecord;
use serde::Serialize;
use tracing::{info, warn};

const PROGRESS_EVERY: usize = 10;

/// Per-document outcome tally of one ingestion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestTally {
    pub successful: usize,
    pub failed: usize,
    pub total: usize,
}

impl IngestTally {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Sends every record to `sink`, one document at a time.
///
/// Failures are logged and counted; they never stop the pass.
pub fn ingest_records(records: &[LogRecord], sink: &dyn IngestSink, index: &str) -> IngestTally {
    let mut tally = IngestTally {
        total: records.len(),
        ..IngestTally::default()
    };

    info!(index, total = tally.total, "ingesting log entries");

    for (i, record) in records.iter().enumerate() {
        let outcome = serde_json::to_value(IndexDocument::from(record))
            .map_err(IngestError::from)
            .and_then(|doc| sink.index(index, &doc));

        match outcome {
            Ok(()) => tally.successful += 1,
            Err(e) => {
                warn!(
                    transaction_id = %record.transaction_id,
                    error = %e,
                    "failed to send log entry"
                );
                tally.failed += 1;
            }
        }

        let done = i + 1;
        if done % PROGRESS_EVERY == 0 || done == tally.total {
            info!(done, total = tally.total, "ingestion progress");
        }
    }

    tally
}
