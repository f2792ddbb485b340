use crate::conf::{AppConfig, ConfigError, load_config, resolve_config};
use pretty_assertions::assert_eq;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn defaults_match_documented_values() {
    let cfg = AppConfig::default();

    assert_eq!(cfg.elasticsearch.url, "http://localhost:9200");
    assert_eq!(cfg.elasticsearch.index_prefix, "ecommerce-logs");
    assert_eq!(cfg.elasticsearch.timeout(), Duration::from_secs(10));
    assert_eq!(cfg.elasticsearch.index_pattern(), "ecommerce-logs-*");
    assert_eq!(cfg.thresholds.error_rate_percent, 25.0);
    assert_eq!(cfg.thresholds.p95_response_time_ms, 1000.0);
    assert_eq!(cfg.thresholds.error_count, 50);
    assert_eq!(cfg.monitor.interval(), Duration::from_secs(60));
}

#[test]
fn partial_file_keeps_defaults_for_the_rest() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logpulse.toml");
    fs::write(
        &path,
        r#"
[elasticsearch]
url = "https://search.internal:9200"

[thresholds]
error_count = 5
"#,
    )
    .unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg.elasticsearch.url, "https://search.internal:9200");
    assert_eq!(cfg.elasticsearch.index_prefix, "ecommerce-logs");
    assert_eq!(cfg.thresholds.error_count, 5);
    assert_eq!(cfg.thresholds.error_rate_percent, 25.0);
    assert_eq!(cfg.monitor.interval_secs, 60);
}

#[test]
fn empty_file_is_all_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").unwrap();

    assert_eq!(load_config(&path).unwrap(), AppConfig::default());
}

#[test]
fn unknown_field_is_a_parse_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("typo.toml");
    fs::write(&path, "[thresholds]\nerror_rate = 10.0\n").unwrap();

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    match err {
        ConfigError::Parse { path: p, source } => {
            assert_eq!(p, path);
            assert!(source.to_string().contains("error_rate"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();

    let err = load_config(&dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn invalid_values_fail_after_parsing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[monitor]\ninterval_secs = 0\n").unwrap();

    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Validation { .. }));
    assert!(err.to_string().contains("monitor interval"));
}

#[test]
fn explicit_path_is_loaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[elasticsearch]\nindex_prefix = \"shop\"\n").unwrap();

    let cfg = resolve_config(Some(&path)).unwrap();

    assert_eq!(cfg.elasticsearch.index_pattern(), "shop-*");
}

#[test]
fn defaults_round_trip_through_toml() {
    let text = toml::to_string_pretty(&AppConfig::default()).unwrap();

    let parsed: AppConfig = toml::from_str(&text).unwrap();

    assert_eq!(parsed, AppConfig::default());
}
