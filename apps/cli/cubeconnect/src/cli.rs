use cubeconnect_client::payload::DEFAULT_LANGUAGE_CODE;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Send WhatsApp messages through the CubeConnect API.
#[derive(Debug, Parser)]
#[command(name = "cubeconnect", version, about)]
pub struct Cli {
    /// TOML config file; the CUBECONNECT_* environment is used when omitted
    #[arg(long, global = true, env = "CUBECONNECT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for cubeconnect.log
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Send a free-form text message (24-hour window only)
    SendText {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        body: String,
    },

    /// Send a pre-approved template message
    SendTemplate {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        name: String,
        /// Placeholder value; repeat in {{1}}, {{2}}, ... order
        #[arg(long = "param")]
        params: Vec<String>,
        #[arg(long, default_value = DEFAULT_LANGUAGE_CODE)]
        language: String,
    },

    /// Check platform health (no API key needed)
    Health,
}
