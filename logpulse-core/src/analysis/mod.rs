//! Log Analysis Pipeline
//!
//! This module turns raw application log lines into typed records and keeps
//! running metrics over them in a single pass.
//!
//! Each line has a fixed positional shape:
//!
//! ```text
//! 2023-01-01 10:00:00 checkout-service 200 150ms user123 tx456 purchase completed
//! ```
//!
//! Lines that do not fit are reported back to the caller with their line number
//! and skipped. Every accepted record is folded into the aggregate state once;
//! nothing is re-scanned. The summary is computed on demand from that state.
//!
//! The overall data processing architecture is:
//!
//! reader
//! parse_line
//! LogRecord
//! MetricsAggregator
//! AggregateState
//! summarize
//! SummaryMetrics
//!

mod aggregation;
mod counter;
mod parse;
mod percentile;
mod run;
mod summary;
mod types;

#[cfg(test)]
mod tests;

pub use aggregation::{AggregateState, MetricsAggregator, ServiceStats};
pub use counter::OrderedCounter;
pub use parse::{ParseError, parse_line};
pub use percentile::{percentile, percentiles};
pub use run::{InputError, ParseDiagnostic, ParseRun, RunStats};
pub use summary::{
    ServiceSummary, SummaryMetrics, TOP_USERS, Totals, UserActivity, percent_2dp, ratio_2dp,
    round_2dp, summarize,
};
pub use types::{LogRecord, TIMESTAMP_FORMAT};
