use integration_tests::harness::init_test_tracing;
use logpulse_core::analysis::ParseRun;
use logpulse_core::ingest::{IngestError, IngestSink, ingest_records};
use logpulse_core::metrics_source::{MetricsSource, MetricsSourceError, poll};
use logpulse_core::alerting::MetricsSnapshot;
use serde_json::Value;
use std::io::Cursor;
use tracing::Level;

#[test]
fn rejected_lines_are_logged_with_context() {
    // Arrange
    let events = init_test_tracing();
    let input = "2023-01-01 10:00:00 api 200 5ms u1 t1\nzz-unparsable-marker\n";

    // Act
    ParseRun::from_reader("marker.log", Cursor::new(input)).unwrap();

    // Assert
    let events = events.lock().unwrap();
    let warning = events
        .iter()
        .find(|e| e.field("content") == Some("zz-unparsable-marker"))
        .expect("no warning for rejected line");
    assert_eq!(warning.level, Level::WARN);
    assert_eq!(warning.message(), Some("could not parse line"));
    assert_eq!(warning.field("line_number"), Some("2"));
    assert!(warning.field("reason").is_some());
}

struct RejectAll;

impl IngestSink for RejectAll {
    fn index(&self, _index: &str, _document: &Value) -> Result<(), IngestError> {
        Err(IngestError::Rejected {
            status: 429,
            body: String::new(),
        })
    }
}

#[test]
fn failed_documents_are_logged_by_transaction() {
    let events = init_test_tracing();
    let run = ParseRun::from_reader(
        "tx.log",
        Cursor::new("2023-01-01 10:00:00 api 200 5ms u1 zz-tx-marker\n"),
    )
    .unwrap();

    ingest_records(run.records(), &RejectAll, "logs");

    let events = events.lock().unwrap();
    let warning = events
        .iter()
        .find(|e| e.field("transaction_id") == Some("zz-tx-marker"))
        .expect("no warning for failed document");
    assert_eq!(warning.level, Level::WARN);
    assert!(warning.field("error").unwrap().contains("429"));
}

struct Down;

impl MetricsSource for Down {
    fn fetch(&self) -> Result<MetricsSnapshot, MetricsSourceError> {
        Err(MetricsSourceError::Status { status: 418 })
    }
}

#[test]
fn failed_poll_is_logged() {
    let events = init_test_tracing();

    assert!(poll(&Down).is_none());

    let events = events.lock().unwrap();
    assert!(events.iter().any(|e| {
        e.level == Level::WARN
            && e.message() == Some("could not retrieve metrics")
            && e.field("error").is_some_and(|v| v.contains("418"))
    }));
}
