// Unit tests for startup helpers

use crate::error::CliError;
use crate::setup::{load_config, prepare_log_dir};

use std::io::Write;

#[test]
fn given_config_path_when_loaded_then_file_values_used() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "api_key = \"cc_cli_key\"").unwrap();
    writeln!(file, "base_url = \"https://staging.cubeconnect.io\"").unwrap();
    writeln!(file, "timeout_seconds = 5").unwrap();

    let config = load_config(Some(file.path())).unwrap();

    assert_eq!(config.base_url, "https://staging.cubeconnect.io");
    assert_eq!(config.timeout_seconds, 5);
}

#[test]
fn given_invalid_config_file_when_loaded_then_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "base_url = \"ftp://cubeconnect.io\"").unwrap();

    let result = load_config(Some(file.path()));

    assert!(matches!(result, Err(CliError::Config(_))));
}

#[test]
fn given_nested_log_dir_when_prepared_then_created() {
    let root = tempfile::tempdir().unwrap();
    let requested = root.path().join("a").join("b");

    let log_dir = prepare_log_dir(Some(&requested)).unwrap();

    assert_eq!(log_dir, requested);
    assert!(log_dir.is_dir());
}
