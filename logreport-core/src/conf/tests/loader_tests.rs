use crate::conf::{ConfigError, load_config};

use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("config.json");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn full_file_overrides_every_default() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"{
            "REPORT_SIZE": 10,
            "REPORT_DIR": "/srv/reports",
            "LOG_DIR": "/srv/logs",
            "SCRIPT_LOG": "/srv/script.log",
            "TEMPLATE": "/srv/report.html",
            "MAX_UNMATCHED_PERC": 50.0
        }"#,
    );

    // Act
    let config = load_config(&path).unwrap();

    // Assert
    assert_eq!(config.report_size, 10);
    assert_eq!(config.report_dir, PathBuf::from("/srv/reports"));
    assert_eq!(config.log_dir, PathBuf::from("/srv/logs"));
    assert_eq!(config.script_log, Some(PathBuf::from("/srv/script.log")));
    assert_eq!(config.template, PathBuf::from("/srv/report.html"));
    assert_eq!(config.max_unmatched_perc, 50.0);
}

#[test]
fn partial_file_keeps_the_other_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), r#"{"REPORT_SIZE": 5}"#);

    // Act
    let config = load_config(&path).unwrap();

    // Assert
    assert_eq!(config.report_size, 5);
    assert_eq!(config.report_dir, PathBuf::from("./reports"));
    assert_eq!(config.log_dir, PathBuf::from("./var/log"));
    assert_eq!(config.script_log, None);
    assert_eq!(config.max_unmatched_perc, 30.0);
}

#[test]
fn unknown_keys_are_ignored() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), r#"{"REPORT_SIZE": 5, "SOMETHING_ELSE": true}"#);

    // Act
    let config = load_config(&path).unwrap();

    // Assert
    assert_eq!(config.report_size, 5);
}

#[test]
fn missing_file_is_an_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    match err {
        ConfigError::ReadFile { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn unparseable_file_is_an_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "not json at all");

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn zero_report_size_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), r#"{"REPORT_SIZE": 0}"#);

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::ReportSizeZero));
}

#[test]
fn out_of_range_threshold_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), r#"{"MAX_UNMATCHED_PERC": 150}"#);

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    match err {
        ConfigError::ThresholdOutOfRange { value } => assert_eq!(value, 150.0),
        other => panic!("unexpected error: {:?}", other),
    }
}
