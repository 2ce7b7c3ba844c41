pub mod api_error;
pub mod config;
pub mod cubeconnect;

pub use api_error::{ApiError, ValidationDetails};
pub use config::ConfigError;
pub use cubeconnect::{AuthFailure, CubeConnectError, ErrorKind};
