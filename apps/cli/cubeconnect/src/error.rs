use common::ErrorLocation;

use cubeconnect_client::{ConfigError, CubeConnectError, ErrorKind};

use thiserror::Error;

const EXIT_API_FAILURE: u8 = 1;
const EXIT_CONFIG_FAILURE: u8 = 2;
const EXIT_CONNECTION_FAILURE: u8 = 3;

/// Errors surfaced by the `cubeconnect` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error from this binary (log setup, output)
    #[error("Cli Error: {message} {location}")]
    Cli {
        message: String,
        location: ErrorLocation,
    },

    /// Configuration could not be loaded or the client could not be built
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The API call failed
    #[error(transparent)]
    Api(#[from] CubeConnectError),
}

impl CliError {
    #[track_caller]
    pub fn cli(message: impl Into<String>) -> Self {
        CliError::Cli {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) => EXIT_CONFIG_FAILURE,
            CliError::Api(e) if e.kind() == ErrorKind::ConnectionFailed => {
                EXIT_CONNECTION_FAILURE
            }
            CliError::Api(_) | CliError::Cli { .. } => EXIT_API_FAILURE,
        }
    }
}
