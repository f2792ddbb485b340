use crate::conf::resolve_config;
use serde::Serialize;
use std::path::Path;

pub fn dump(config_path: Option<&Path>, json: bool, yaml: bool) -> anyhow::Result<()> {
    let cfg = resolve_config(config_path)?;
    // JSON is the default when neither flag is given.
    if yaml && !json {
        dump_yaml(&cfg)?;
    } else {
        dump_json(&cfg)?;
    }

    Ok(())
}

fn dump_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn dump_yaml<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}
