// Unit tests for CubeConnectConfig loading and validation

use crate::config::{
    API_KEY_ENV, BASE_URL_ENV, CubeConnectConfig, TENANT_ID_ENV, TIMEOUT_ENV,
};
use crate::error::ConfigError;

use std::collections::HashMap;
use std::io::Write;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

/// **VALUE**: Verifies defaults when nothing is configured.
///
/// **WHY THIS MATTERS**: A fresh install must point at production with a 30s
/// timeout; the missing key is reported at send time, not at startup.
#[test]
fn given_no_variables_when_loaded_then_defaults_apply() {
    let config = CubeConnectConfig::from_vars(vars(&[])).unwrap();

    assert_eq!(config.base_url, "https://cubeconnect.io");
    assert_eq!(config.timeout_seconds, 30);
    assert!(config.tenant_id.is_none());
    assert!(config.api_key.is_empty());
}

#[test]
fn given_all_variables_when_loaded_then_values_used() {
    let config = CubeConnectConfig::from_vars(vars(&[
        (API_KEY_ENV, "cc_test_key"),
        (BASE_URL_ENV, "https://staging.cubeconnect.io/"),
        (TENANT_ID_ENV, "tenant-7"),
        (TIMEOUT_ENV, "12"),
    ]))
    .unwrap();

    assert_eq!(config.api_key.as_str(), "cc_test_key");
    assert_eq!(config.base_url, "https://staging.cubeconnect.io/");
    assert_eq!(config.tenant_id.as_deref(), Some("tenant-7"));
    assert_eq!(config.timeout_seconds, 12);
}

/// **VALUE**: Verifies a blank tenant id is treated as absent.
///
/// **BUG THIS CATCHES**: Would catch `X-TENANT-ID: ` being sent with an empty
/// value when `.env` contains `CUBECONNECT_TENANT_ID=`.
#[test]
fn given_blank_tenant_when_loaded_then_tenant_is_none() {
    let config = CubeConnectConfig::from_vars(vars(&[(TENANT_ID_ENV, "  ")])).unwrap();

    assert!(config.tenant_id.is_none());
}

/// **VALUE**: Verifies `CUBECONNECT_API_KEY=` counts as no key at all.
///
/// **BUG THIS CATCHES**: Would catch a blank key being accepted as "found", which
/// hides the missing-key warning at startup.
#[test]
fn given_blank_api_key_when_loaded_then_key_treated_as_missing() {
    let config = CubeConnectConfig::from_vars(vars(&[(API_KEY_ENV, "   ")])).unwrap();

    assert!(config.api_key.is_empty());
    assert_eq!(config.api_key.as_str(), "");
}

#[test]
fn given_non_numeric_timeout_when_loaded_then_validation_error() {
    let result = CubeConnectConfig::from_vars(vars(&[(TIMEOUT_ENV, "thirty")]));

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn given_invalid_base_url_when_validated_then_validation_error() {
    for base_url in ["not a url", "ftp://cubeconnect.io"] {
        let config = CubeConnectConfig::new("key").with_base_url(base_url);
        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
            "{base_url} should be rejected"
        );
    }
}

#[test]
fn given_zero_timeout_when_validated_then_validation_error() {
    let config = CubeConnectConfig::new("key").with_timeout_seconds(0);

    assert!(matches!(config.validate(), Err(ConfigError::ValidationError { .. })));
}

#[test]
fn given_toml_file_when_loaded_then_missing_keys_default() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "api_key = \"cc_file_key\"").unwrap();
    writeln!(file, "tenant_id = \"acme\"").unwrap();

    let config = CubeConnectConfig::load(file.path()).unwrap();

    assert_eq!(config.api_key.as_str(), "cc_file_key");
    assert_eq!(config.tenant_id.as_deref(), Some("acme"));
    assert_eq!(config.base_url, "https://cubeconnect.io");
    assert_eq!(config.timeout_seconds, 30);
}

#[test]
fn given_malformed_toml_when_loaded_then_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "timeout_seconds = \"soon\"").unwrap();

    let result = CubeConnectConfig::load(file.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_missing_file_when_loaded_then_read_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = CubeConnectConfig::load(&dir.path().join("cubeconnect.toml"));

    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

/// **VALUE**: Verifies the key never leaks through Debug on the config.
#[test]
fn given_config_when_debug_formatted_then_key_redacted() {
    let config = CubeConnectConfig::new("cc_live_very_secret");

    let debug = format!("{:?}", config);

    assert!(!debug.contains("cc_live_very_secret"));
}
