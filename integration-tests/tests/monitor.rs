use integration_tests::harness::StubSearchIndex;
use logpulse_core::alerting::{AlertKind, Severity, ThresholdEvaluator, Thresholds};
use logpulse_core::cli::monitor::check_once;
use logpulse_core::metrics_source::{
    ElasticsearchSource, MetricsSource, MetricsSourceError, poll,
};
use pretty_assertions::assert_eq;
use std::net::TcpListener;
use std::time::Duration;

mod common;

fn source(index: &StubSearchIndex) -> ElasticsearchSource {
    ElasticsearchSource::new(index.base_url(), "it-logs-*", Duration::from_secs(2)).unwrap()
}

#[test]
fn aggregation_response_becomes_snapshot() {
    // Arrange
    let index = StubSearchIndex::fixed(200, common::fixture_text("search_response.json"));

    // Act
    let snap = source(&index).fetch().unwrap();

    // Assert
    assert_eq!(snap.total_requests, 500);
    assert_eq!(snap.error_count, 300);
    assert_eq!(snap.error_rate, 60.0);
    assert_eq!(snap.avg_response_time, 310.46);
    assert_eq!(snap.p95_response_time, 500.0);
    assert_eq!(snap.p99_response_time, 1800.25);
    assert_eq!(snap.status_codes.get(&404), Some(&50));

    let requests = index.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/it-logs-*/_search");
    assert_eq!(requests[0].json()["size"], 0);
}

#[test]
fn high_error_rate_from_index_is_critical() {
    let index = StubSearchIndex::fixed(200, common::fixture_text("search_response.json"));

    let snapshot = poll(&source(&index));
    let alerts = ThresholdEvaluator::new(Thresholds::default()).evaluate(snapshot.as_ref());

    let kinds: Vec<(AlertKind, Severity)> = alerts.iter().map(|a| (a.kind, a.severity)).collect();
    assert_eq!(
        kinds,
        vec![
            (AlertKind::HighErrorRate, Severity::Critical),
            (AlertKind::HighErrorCount, Severity::Warning),
        ]
    );
}

#[test]
fn server_error_is_reported_as_status() {
    let index = StubSearchIndex::fixed(503, r#"{"error":"unavailable"}"#);

    let err = source(&index).fetch().unwrap_err();

    assert!(matches!(err, MetricsSourceError::Status { status: 503 }));
}

#[test]
fn unreachable_index_yields_no_data_and_no_alerts() {
    // Arrange: grab a free port, then close it.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let source = ElasticsearchSource::new(
        &format!("http://127.0.0.1:{port}"),
        "it-logs-*",
        Duration::from_millis(500),
    )
    .unwrap();

    // Act
    let snapshot = poll(&source);

    // Assert
    assert_eq!(snapshot, None);
    assert!(
        ThresholdEvaluator::new(Thresholds::default())
            .evaluate(snapshot.as_ref())
            .is_empty()
    );
}

#[test]
fn single_check_polls_once() {
    let index = StubSearchIndex::fixed(200, common::fixture_text("search_response.json"));

    check_once(&source(&index), &ThresholdEvaluator::new(Thresholds::default()));

    assert_eq!(index.requests().len(), 1);
}
