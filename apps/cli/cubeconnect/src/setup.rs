//! Startup helpers: where config and logs come from.

use crate::error::CliError;

use cubeconnect_client::CubeConnectConfig;

use std::path::{Path, PathBuf};

use log::info;

const APP_DIR_NAME: &str = "cubeconnect";
const LOG_DIR_NAME: &str = "logs";

/// Load config from `path` when given, otherwise from the environment.
pub fn load_config(path: Option<&Path>) -> Result<CubeConnectConfig, CliError> {
    let config = match path {
        Some(path) => CubeConnectConfig::load(path)?,
        None => CubeConnectConfig::from_env()?,
    };

    info!(
        "Using CubeConnect at {} (tenant: {}, timeout: {}s)",
        config.base_url,
        config.tenant_id.as_deref().unwrap_or("none"),
        config.timeout_seconds
    );
    Ok(config)
}

/// `{data_local_dir}/cubeconnect/logs`, or the temp dir when there is none.
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
        .join(LOG_DIR_NAME)
}

/// Resolve and create the log directory.
pub fn prepare_log_dir(requested: Option<&Path>) -> Result<PathBuf, CliError> {
    let log_dir = requested.map(Path::to_path_buf).unwrap_or_else(default_log_dir);

    std::fs::create_dir_all(&log_dir).map_err(|e| {
        CliError::cli(format!(
            "Failed to create log directory {}: {e}",
            log_dir.display()
        ))
    })?;

    Ok(log_dir)
}
