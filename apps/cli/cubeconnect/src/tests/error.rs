// Unit tests for CliError exit codes and formatting

use crate::error::CliError;

use cubeconnect_client::{ConfigError, CubeConnectError};

/// **VALUE**: Verifies config, API and connection failures exit differently.
///
/// **WHY THIS MATTERS**: Scripts wrapping the binary retry on connection failures
/// but must not retry a rejected message or a broken config.
#[test]
fn given_error_categories_when_exit_code_requested_then_distinct_codes() {
    let config = CliError::from(ConfigError::validation("bad url"));
    let api = CliError::from(CubeConnectError::rate_limited("", ""));
    let cli = CliError::cli("log dir");

    assert_eq!(config.exit_code(), 2);
    assert_eq!(api.exit_code(), 1);
    assert_eq!(cli.exit_code(), 1);
}

#[test]
fn given_api_error_when_wrapped_then_display_is_transparent() {
    let err = CliError::from(CubeConnectError::not_found("TEMPLATE_NOT_FOUND", "gone"));

    let error_string = err.to_string();

    assert!(error_string.starts_with("Not Found Error: gone [TEMPLATE_NOT_FOUND]"));
}

#[test]
fn given_cli_error_when_formatted_then_includes_location() {
    let err = CliError::cli("Failed to create log directory");

    let error_string = format!("{}", err);

    assert!(error_string.contains("Cli Error"));
    assert!(error_string.contains("error.rs"));
}
