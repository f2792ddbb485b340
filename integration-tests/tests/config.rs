use logpulse_core::cli::conf::{ConfigCmd, config_error_hint};
use logpulse_core::cli::{self, Command};
use logpulse_core::conf::{AppConfig, ConfigError, load_config, resolve_config};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

mod common;

#[test]
fn init_writes_a_loadable_default_config() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logpulse.toml");

    // Act
    cli::run(
        Command::Config {
            cmd: ConfigCmd::Init { path: path.clone() },
        },
        None,
    )
    .unwrap();

    // Assert
    assert_eq!(load_config(&path).unwrap(), AppConfig::default());
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logpulse.toml");
    fs::write(&path, "# mine\n").unwrap();

    let err = cli::run(
        Command::Config {
            cmd: ConfigCmd::Init { path: path.clone() },
        },
        None,
    )
    .unwrap_err();

    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");
}

#[test]
fn fixture_config_loads() {
    let cfg = resolve_config(Some(&common::fixture("logpulse.toml"))).unwrap();

    assert_eq!(cfg.elasticsearch.index_pattern(), "it-logs-*");
    assert_eq!(cfg.monitor.interval_secs, 1);
}

#[test]
fn missing_config_has_an_init_hint() {
    let dir = tempdir().unwrap();

    let err = load_config(&dir.path().join("nope.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
    assert!(config_error_hint(&err).unwrap().contains("logpulse config init"));
}
