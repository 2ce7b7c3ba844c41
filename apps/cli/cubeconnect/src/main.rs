use cubeconnect_cli::cli::Cli;
use cubeconnect_cli::commands;
use cubeconnect_cli::error::CliError;
use cubeconnect_cli::logger::{self, DEFAULT_LOG_LEVEL, initialize as LoggerInitialize};
use cubeconnect_cli::setup::{load_config, prepare_log_dir};

use cubeconnect_client::MessagingClient;

use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if logger::is_ready() {
                error!("{e}");
            } else {
                eprintln!("{e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let log_dir = prepare_log_dir(cli.log_dir.as_deref())?;
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        DEFAULT_LOG_LEVEL
    };

    // Initialize logger FIRST
    LoggerInitialize(&log_dir, level)?;
    info!("Log directory: {}", log_dir.display());

    let config = load_config(cli.config.as_deref())?;
    let client = MessagingClient::new(&config)?;

    let output = commands::run(&cli.command, &client).await?;

    let rendered = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::cli(format!("Failed to render output: {e}")))?;
    println!("{rendered}");

    Ok(())
}
