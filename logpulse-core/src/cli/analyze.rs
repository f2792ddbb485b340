use crate::alerting::{MetricsSnapshot, ThresholdEvaluator};
use crate::analysis::ParseRun;
use crate::conf::AppConfig;
use crate::export::{ExportDocument, default_export_path};
use crate::render::{render_alerts, render_analysis};
use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Path to the log file
    pub file: PathBuf,

    /// Export file (default: parsed_logs_<timestamp>.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not write the JSON export
    #[arg(long, conflicts_with = "output")]
    pub no_export: bool,

    /// Evaluate alert thresholds against the parsed entries
    #[arg(long)]
    pub alerts: bool,
}

pub fn run(args: ParseArgs, cfg: &AppConfig) -> Result<()> {
    println!("Parsing log file: {}", args.file.display());

    let run = ParseRun::from_path(&args.file).context("log source unavailable")?;
    let summary = run.summary();

    print!("{}", render_analysis(&run, summary.as_ref()));

    if args.alerts {
        let snapshot = MetricsSnapshot::from_state(run.state());
        let alerts = ThresholdEvaluator::new(cfg.thresholds).evaluate(snapshot.as_ref());
        print!("\n{}", render_alerts(&alerts, io::stdout().is_terminal()));
    }

    if !args.no_export {
        let now = Local::now().naive_local();
        let path = args.output.unwrap_or_else(|| default_export_path(now));

        ExportDocument::from_run(&run, now).write_file(&path)?;
        println!("\nStructured data exported to: {}", path.display());
    }

    Ok(())
}
