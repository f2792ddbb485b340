use clap::Parser;
use logpulse_core::cli::{self, Command};
use logpulse_core::logging::{LogFormat, default_log_format, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logpulse",
    version,
    about = "logpulse: application log analytics, ingestion and alerting"
)]
struct Cli {
    /// Path to the config file (default: ./logpulse.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format: json or pretty (default: pretty on a terminal)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    if let Err(e) = cli::run(cli.command, cli.config.as_deref()) {
        tracing::error!(error = %e, "command failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
