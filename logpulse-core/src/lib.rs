pub mod alerting;
pub mod analysis;
pub mod cli;
pub mod conf;
pub mod export;
pub mod ingest;
pub mod logging;
pub mod metrics_source;
pub mod render;
