use crate::conf::AppConfig;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

pub fn init(path: PathBuf) -> Result<()> {
    // Refuse to overwrite an existing file
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    let contents =
        toml::to_string_pretty(&AppConfig::default()).context("failed to render default config")?;

    fs::write(&path, contents).with_context(|| format!("failed to create {}", path.display()))?;

    println!("✔ Initialized logpulse config in {}", path.display());
    println!();
    println!("Next steps:");
    println!("  logpulse config check");
    println!("  logpulse parse <log file>");

    Ok(())
}
