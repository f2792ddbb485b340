mod elasticsearch;
mod error;

#[cfg(test)]
mod tests;

pub use elasticsearch::{ElasticsearchSource, aggregation_query, snapshot_from_response};
pub use error::MetricsSourceError;

use crate::alerting::MetricsSnapshot;
use tracing::warn;

/// Anything that can produce a current [`MetricsSnapshot`].
pub trait MetricsSource {
    fn fetch(&self) -> Result<MetricsSnapshot, MetricsSourceError>;
}

/// Fetches a snapshot, logging and swallowing failures.
///
/// `None` means no data this cycle; the evaluator raises nothing for it.
pub fn poll(source: &dyn MetricsSource) -> Option<MetricsSnapshot> {
    match source.fetch() {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!(error = %e, "could not retrieve metrics");
            None
        }
    }
}
