mod check;
mod dump;
mod init;

pub use check::*;
pub use dump::*;
pub use init::*;

use crate::conf::DEFAULT_CONFIG_FILE;
use anyhow::Result;
use clap::Subcommand;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a config file and exit
    Check {
        /// Path to config file
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,

        /// Print errors without colors or hints
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print the resolved configuration
    Dump {
        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a config file populated with the defaults
    Init {
        /// Path to config file
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain } => check(path, plain),
        ConfigCmd::Dump { json, yaml } => dump(config_path, json, yaml),
        ConfigCmd::Init { path } => init(path),
    }
}
