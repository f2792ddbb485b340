use crate::conf::{ConfigError, load_config};
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            let t = &cfg.thresholds;
            println!("✔ Config loaded successfully");
            println!("✔ elasticsearch: {}", cfg.elasticsearch.url);
            println!(
                "✔ thresholds: error rate > {}% (critical > {}%), p95 > {}ms (critical > {}ms), errors > {}",
                t.error_rate_percent,
                t.error_rate_critical_percent,
                t.p95_response_time_ms,
                t.p95_response_time_critical_ms,
                t.error_count
            );
            println!("✔ monitor interval: {}s", cfg.monitor.interval_secs);
            Ok(())
        }
        Err(err) => {
            print_config_error(&err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError, plain: bool) {
    if plain {
        eprintln!("{}", err);
        return;
    }

    eprintln!();
    eprintln!("{} {}", "✘".red().bold(), err);
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "Create a config file with defaults:\n\
             \n\
             logpulse config init",
        ),

        ConfigError::Parse { .. } => Some(
            "Known sections are [elasticsearch], [thresholds] and [monitor].\n\
             \n\
             Example:\n\
             \n\
             [thresholds]\n\
             error_rate_percent = 25.0\n\
             error_count        = 50",
        ),

        ConfigError::Validation { .. } => Some(
            "Fix every issue listed above; all of them were found in one pass.",
        ),

        _ => None,
    }
}
