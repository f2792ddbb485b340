use crate::analysis::ParseRun;
use crate::conf::{AppConfig, ConfigError, validate_config};
use crate::ingest::{ElasticsearchSink, index_name, ingest_records};
use crate::render::render_ingest;
use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Path to the log file
    pub file: PathBuf,

    /// Elasticsearch base URL (overrides config)
    #[arg(long)]
    pub url: Option<String>,

    /// Index name prefix (overrides config)
    #[arg(long)]
    pub index_prefix: Option<String>,
}

pub fn run(args: IngestArgs, mut cfg: AppConfig) -> Result<()> {
    if let Some(url) = args.url {
        cfg.elasticsearch.url = url;
    }
    if let Some(prefix) = args.index_prefix {
        cfg.elasticsearch.index_prefix = prefix;
    }
    validate_config(&cfg).map_err(|errs| ConfigError::Validation {
        validation_errors: errs,
    })?;

    let run = ParseRun::from_path(&args.file).context("log source unavailable")?;
    if run.records().is_empty() {
        println!("No logs to ingest");
        return Ok(());
    }

    let es = &cfg.elasticsearch;
    let sink = ElasticsearchSink::new(&es.url, es.timeout())?;
    let index = index_name(&es.index_prefix, Local::now().date_naive());

    println!(
        "Ingesting {} log entries to {}/{}",
        run.records().len(),
        es.url.trim_end_matches('/'),
        index
    );

    let tally = ingest_records(run.records(), &sink, &index);
    print!("{}", render_ingest(&tally));

    if !tally.is_clean() {
        bail!(
            "log ingestion completed with errors ({} of {} documents failed)",
            tally.failed,
            tally.total
        );
    }

    println!("\nAll logs ingested successfully!");
    Ok(())
}
