mod evaluator;
mod snapshot;
mod thresholds;
mod types;


pub use evaluator::ThresholdEvaluator;
pub use snapshot::MetricsSnapshot;
pub use thresholds::Thresholds;
pub use types::{Alert, AlertKind, Measurement, Severity};
