use crate::alerting::ThresholdEvaluator;
use crate::conf::{AppConfig, ConfigError, validate_config};
use crate::metrics_source::{ElasticsearchSource, MetricsSource, poll};
use crate::render::render_monitor;
use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

const LOOP_IDLE_SLEEP: Duration = Duration::from_millis(100);

#[derive(Args, Debug)]
pub struct MonitorArgs {
    /// Elasticsearch base URL (overrides config)
    #[arg(long)]
    pub url: Option<String>,

    /// Run a single check instead of monitoring continuously
    #[arg(long)]
    pub once: bool,

    /// Seconds between checks (overrides config)
    #[arg(long)]
    pub interval: Option<u64>,
}

pub fn run(args: MonitorArgs, mut cfg: AppConfig) -> Result<()> {
    if let Some(url) = args.url {
        cfg.elasticsearch.url = url;
    }
    if let Some(secs) = args.interval {
        cfg.monitor.interval_secs = secs;
    }
    validate_config(&cfg).map_err(|errs| ConfigError::Validation {
        validation_errors: errs,
    })?;

    let es = &cfg.elasticsearch;
    let source = ElasticsearchSource::new(&es.url, &es.index_pattern(), es.timeout())?;
    let evaluator = ThresholdEvaluator::new(cfg.thresholds);

    if args.once {
        check_once(&source, &evaluator);
        return Ok(());
    }

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || r.store(false, Ordering::SeqCst))
        .context("failed to install Ctrl-C handler")?;

    let interval = cfg.monitor.interval();
    println!(
        "Starting continuous monitoring (interval: {}s)\nPress Ctrl+C to stop",
        interval.as_secs()
    );

    while running.load(Ordering::SeqCst) {
        check_once(&source, &evaluator);
        idle(&running, interval);
    }

    println!("\nMonitoring stopped.");
    Ok(())
}

/// One poll-evaluate-display cycle.
pub fn check_once(source: &dyn MetricsSource, evaluator: &ThresholdEvaluator) {
    let snapshot = poll(source);
    let alerts = evaluator.evaluate(snapshot.as_ref());

    for alert in &alerts {
        warn!(
            kind = %alert.kind,
            severity = %alert.severity,
            current_value = %alert.current_value,
            threshold = %alert.threshold,
            "threshold exceeded"
        );
    }
    if snapshot.is_some() && alerts.is_empty() {
        info!("all metrics within thresholds");
    }

    print!(
        "{}",
        render_monitor(
            snapshot.as_ref(),
            &alerts,
            Local::now().naive_local(),
            io::stdout().is_terminal()
        )
    );
}

// Sleeps for `interval`, waking early once `running` is cleared.
fn idle(running: &AtomicBool, interval: Duration) {
    let start = Instant::now();
    while running.load(Ordering::SeqCst) && start.elapsed() < interval {
        thread::sleep(LOOP_IDLE_SLEEP);
    }
}
