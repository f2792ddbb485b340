use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to search index failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("search index rejected document: HTTP {status}")]
    Rejected { status: u16, body: String },

    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
}
