use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsSourceError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("error querying search index: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("search index returned HTTP {status}")]
    Status { status: u16 },

    #[error("search response has no aggregations")]
    MissingAggregations,

    #[error("search response is missing '{0}'")]
    MissingField(&'static str),
}
