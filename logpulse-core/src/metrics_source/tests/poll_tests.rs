use crate::alerting::MetricsSnapshot;
use crate::metrics_source::{MetricsSource, MetricsSourceError, poll};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

struct Fixed(Option<MetricsSnapshot>);

impl MetricsSource for Fixed {
    fn fetch(&self) -> Result<MetricsSnapshot, MetricsSourceError> {
        self.0
            .clone()
            .ok_or(MetricsSourceError::Status { status: 503 })
    }
}

#[test]
fn successful_fetch_is_passed_through() {
    let snap = MetricsSnapshot {
        total_requests: 5,
        error_count: 1,
        error_rate: 20.0,
        avg_response_time: 10.0,
        p95_response_time: 12.0,
        p99_response_time: 13.0,
        min_response_time: 8.0,
        max_response_time: 13.0,
        status_codes: BTreeMap::from([(200, 4), (500, 1)]),
    };

    assert_eq!(poll(&Fixed(Some(snap.clone()))), Some(snap));
}

#[test]
fn failed_fetch_becomes_no_data() {
    assert_eq!(poll(&Fixed(None)), None);
}
