use crate::alerting::MetricsSnapshot;
use crate::analysis::{percent_2dp, round_2dp};
use crate::metrics_source::MetricsSource;
use crate::metrics_source::error::MetricsSourceError;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

/// Reads current metrics from an Elasticsearch aggregation query.
pub struct ElasticsearchSource {
    client: reqwest::blocking::Client,
    search_url: String,
}

impl ElasticsearchSource {
    /// `index_pattern` is searched as-is, e.g. `ecommerce-logs-*`.
    pub fn new(
        base_url: &str,
        index_pattern: &str,
        timeout: Duration,
    ) -> Result<Self, MetricsSourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(MetricsSourceError::Client)?;

        Ok(Self {
            client,
            search_url: format!(
                "{}/{index_pattern}/_search",
                base_url.trim_end_matches('/')
            ),
        })
    }
}

impl MetricsSource for ElasticsearchSource {
    fn fetch(&self) -> Result<MetricsSnapshot, MetricsSourceError> {
        let res = self
            .client
            .post(&self.search_url)
            .json(&aggregation_query())
            .send()?;

        let status = res.status();
        if !status.is_success() {
            return Err(MetricsSourceError::Status {
                status: status.as_u16(),
            });
        }

        let body: Value = res.json()?;
        debug!(url = %self.search_url, "fetched aggregation result");
        snapshot_from_response(&body)
    }
}

/// Aggregations over every indexed document: request count, errors
/// (status >= 400), response-time stats and 95/99 percentiles, and a status
/// code breakdown.
pub fn aggregation_query() -> Value {
    json!({
        "query": { "match_all": {} },
        "size": 0,
        "aggs": {
            "total_requests": {
                "value_count": { "field": "transaction_id.keyword" }
            },
            "error_requests": {
                "filter": { "range": { "status_code": { "gte": 400 } } }
            },
            "response_time_stats": {
                "stats": { "field": "response_time_ms" }
            },
            "response_time_percentiles": {
                "percentiles": { "field": "response_time_ms", "percents": [95, 99] }
            },
            "status_codes": {
                "terms": { "field": "status_code" }
            }
        }
    })
}

/// Converts a `_search` response carrying [`aggregation_query`] results into
/// a snapshot. Statistics over zero documents come back as `null` and are
/// read as `0`.
pub fn snapshot_from_response(body: &Value) -> Result<MetricsSnapshot, MetricsSourceError> {
    let aggs = body
        .get("aggregations")
        .ok_or(MetricsSourceError::MissingAggregations)?;

    let total_requests = aggs
        .pointer("/total_requests/value")
        .and_then(Value::as_f64)
        .ok_or(MetricsSourceError::MissingField("total_requests.value"))?
        as u64;

    let error_count = aggs
        .pointer("/error_requests/doc_count")
        .and_then(Value::as_u64)
        .ok_or(MetricsSourceError::MissingField("error_requests.doc_count"))?;

    let stat = |path: &str| aggs.pointer(path).and_then(Value::as_f64).unwrap_or(0.0);

    let mut status_codes = BTreeMap::new();
    let buckets = aggs
        .pointer("/status_codes/buckets")
        .and_then(Value::as_array)
        .ok_or(MetricsSourceError::MissingField("status_codes.buckets"))?;
    for bucket in buckets {
        let code = bucket.get("key").and_then(|k| match k {
            Value::Number(n) => n.as_u64().and_then(|c| u16::try_from(c).ok()),
            Value::String(s) => s.parse::<u16>().ok(),
            _ => None,
        });
        let count = bucket.get("doc_count").and_then(Value::as_u64);
        if let (Some(code), Some(count)) = (code, count) {
            status_codes.insert(code, count);
        }
    }

    Ok(MetricsSnapshot {
        total_requests,
        error_count,
        error_rate: percent_2dp(error_count, total_requests),
        avg_response_time: round_2dp(stat("/response_time_stats/avg")),
        p95_response_time: round_2dp(stat("/response_time_percentiles/values/95.0")),
        p99_response_time: round_2dp(stat("/response_time_percentiles/values/99.0")),
        min_response_time: stat("/response_time_stats/min"),
        max_response_time: stat("/response_time_stats/max"),
        status_codes,
    })
}
