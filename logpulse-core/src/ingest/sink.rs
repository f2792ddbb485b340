use crate::ingest::error::IngestError;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Destination for parsed records. One call per document.
pub trait IngestSink {
    fn index(&self, index: &str, document: &Value) -> Result<(), IngestError>;
}

/// Indexes documents through the Elasticsearch `_doc` API.
pub struct ElasticsearchSink {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl ElasticsearchSink {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, IngestError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(IngestError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl IngestSink for ElasticsearchSink {
    fn index(&self, index: &str, document: &Value) -> Result<(), IngestError> {
        let url = format!("{}/{index}/_doc", self.base_url);
        let res = self.client.post(&url).json(document).send()?;

        let status = res.status().as_u16();
        debug!(%url, status, "indexed document");

        if matches!(status, 200 | 201) {
            Ok(())
        } else {
            Err(IngestError::Rejected {
                status,
                body: res.text().unwrap_or_default(),
            })
        }
    }
}
