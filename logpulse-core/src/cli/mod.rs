pub mod analyze;
pub mod conf;
pub mod ingest;
pub mod monitor;

use crate::conf::resolve_config;
use anyhow::Result;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a log file, print a summary and export it as JSON
    Parse(analyze::ParseArgs),

    /// Parse a log file and index every entry into Elasticsearch
    Ingest(ingest::IngestArgs),

    /// Poll metrics from Elasticsearch and report threshold alerts
    Monitor(monitor::MonitorArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: conf::ConfigCmd,
    },
}

/// Dispatch a subcommand. `config_path` is the global `--config` flag.
pub fn run(command: Command, config_path: Option<&Path>) -> Result<()> {
    match command {
        Command::Config { cmd } => conf::run(cmd, config_path),
        Command::Parse(args) => analyze::run(args, &resolve_config(config_path)?),
        Command::Ingest(args) => ingest::run(args, resolve_config(config_path)?),
        Command::Monitor(args) => monitor::run(args, resolve_config(config_path)?),
    }
}
