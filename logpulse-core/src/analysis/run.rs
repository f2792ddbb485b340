use crate::analysis::aggregation::{AggregateState, MetricsAggregator};
use crate::analysis::parse::{ParseError, parse_line};
use crate::analysis::summary::{SummaryMetrics, summarize};
use crate::analysis::types::LogRecord;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// The log source could not be opened or read. Fatal to a run.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {origin} after line {line_number}: {source}")]
    Read {
        origin: String,
        line_number: usize,
        #[source]
        source: io::Error,
    },
}

/// One rejected line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    /// 1-based line number in the source.
    pub line_number: usize,
    pub error: ParseError,
}

impl ParseDiagnostic {
    pub fn content(&self) -> &str {
        self.error.line()
    }
}

/// Line tallies for operational reporting.
///
/// `rejected` is kept apart from the transaction totals: rejected lines are
/// never aggregated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub lines_read: usize,
    pub blank_lines: usize,
    pub parsed: usize,
    pub rejected: usize,
}

/// Result of one complete pass over a log source.
#[derive(Debug)]
pub struct ParseRun {
    origin: String,
    records: Vec<LogRecord>,
    aggregator: MetricsAggregator,
    diagnostics: Vec<ParseDiagnostic>,
    stats: RunStats,
}

impl ParseRun {
    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        let file = File::open(path).map_err(|e| InputError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_reader(path.display().to_string(), BufReader::new(file))
    }

    /// Runs parser and aggregator over every line of `reader`.
    ///
    /// Parse failures are recorded and skipped. A read failure aborts the run
    /// and discards everything aggregated so far.
    pub fn from_reader<R: BufRead>(
        origin: impl Into<String>,
        reader: R,
    ) -> Result<Self, InputError> {
        let origin = origin.into();
        let mut run = ParseRun {
            origin,
            records: Vec::new(),
            aggregator: MetricsAggregator::new(),
            diagnostics: Vec::new(),
            stats: RunStats::default(),
        };

        for (idx, line) in reader.lines().enumerate() {
            let line_number = idx + 1;
            let line = line.map_err(|e| InputError::Read {
                origin: run.origin.clone(),
                line_number: idx,
                source: e,
            })?;
            run.stats.lines_read += 1;

            if line.trim().is_empty() {
                run.stats.blank_lines += 1;
                continue;
            }

            match parse_line(&line) {
                Ok(record) => {
                    run.aggregator.update(&record);
                    run.records.push(record);
                    run.stats.parsed += 1;
                }
                Err(error) => {
                    warn!(
                        line_number,
                        content = %error.line(),
                        reason = %error,
                        "could not parse line"
                    );
                    run.diagnostics.push(ParseDiagnostic { line_number, error });
                    run.stats.rejected += 1;
                }
            }
        }

        debug!(origin = %run.origin, stats = ?run.stats, "parse run finished");
        info!(
            origin = %run.origin,
            parsed = run.stats.parsed,
            rejected = run.stats.rejected,
            "parsed log entries"
        );

        Ok(run)
    }

    /// Where the lines came from (file path or a caller-supplied label).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn state(&self) -> &AggregateState {
        self.aggregator.state()
    }

    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn summary(&self) -> Option<SummaryMetrics> {
        summarize(self.state())
    }
}
