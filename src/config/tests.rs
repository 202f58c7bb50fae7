//! Tests for config loading and validation.

use super::Config;
use std::io::Write;

#[test]
fn default_config_is_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
}

#[test]
fn default_thresholds() {
    let config = Config::default();
    assert_eq!(config.match_window, 40);
    assert_eq!(config.min_block_len, 3);
    assert_eq!(config.min_match_lines, 3);
    assert_eq!(config.similarity_threshold, 0.7);
    assert_eq!(config.import_patterns.len(), 3);
}

#[test]
fn partial_yaml_keeps_defaults() {
    let config = Config::from_yaml("match_window: 10\n").unwrap();
    assert_eq!(config.match_window, 10);
    assert_eq!(config.min_block_len, 3);
    assert_eq!(config.similarity_threshold, 0.7);
}

#[test]
fn unknown_fields_are_ignored() {
    let config = Config::from_yaml("future_option: true\nmin_block_len: 2\n").unwrap();
    assert_eq!(config.min_block_len, 2);
}

#[test]
fn empty_yaml_yields_defaults() {
    let config = Config::from_yaml("{}").unwrap();
    assert_eq!(config.match_window, 40);
}

#[test]
fn invalid_yaml_is_user_error() {
    let err = Config::from_yaml(": not yaml :").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn zero_min_block_len_is_rejected() {
    let err = Config::from_yaml("min_block_len: 0\n").unwrap_err();
    assert!(err.to_string().contains("min_block_len"));
}

#[test]
fn zero_min_match_lines_is_rejected() {
    let err = Config::from_yaml("min_match_lines: 0\n").unwrap_err();
    assert!(err.to_string().contains("min_match_lines"));
}

#[test]
fn window_smaller_than_block_len_is_rejected() {
    let err = Config::from_yaml("match_window: 2\nmin_block_len: 5\n").unwrap_err();
    assert!(err.to_string().contains("match_window"));
}

#[test]
fn out_of_range_similarity_is_rejected() {
    assert!(Config::from_yaml("similarity_threshold: 0.0\n").is_err());
    assert!(Config::from_yaml("similarity_threshold: 1.5\n").is_err());
    assert!(Config::from_yaml("similarity_threshold: 1.0\n").is_ok());
}

#[test]
fn load_reads_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "min_block_len: 4").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.min_block_len, 4);
}

#[test]
fn load_missing_file_is_user_error() {
    let err = Config::load("/nonexistent/config.yaml").unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}
