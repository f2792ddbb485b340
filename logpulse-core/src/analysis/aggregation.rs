use crate::analysis::counter::OrderedCounter;
use crate::analysis::types::LogRecord;
use std::collections::BTreeMap;

/// Running stats for one service.
///
/// Response-time samples are kept for the whole run so min/max/average are
/// exact. Memory grows linearly with the number of records per service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceStats {
    count: u64,
    errors: u64,
    response_times: Vec<u64>,
}

impl ServiceStats {
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn errors(&self) -> u64 {
        self.errors
    }

    pub fn response_times(&self) -> &[u64] {
        &self.response_times
    }

    fn record(&mut self, response_time_ms: u64, is_error: bool) {
        self.count += 1;
        self.response_times.push(response_time_ms);
        if is_error {
            self.errors += 1;
        }
    }
}

/// Aggregate views maintained over one parse run.
///
/// Invariant: `total()` equals the sum of per-service counts and the sum of
/// the status-code distribution.
#[derive(Debug, Clone, Default)]
pub struct AggregateState {
    total: u64,
    error_counts: BTreeMap<u16, u64>,
    services: BTreeMap<String, ServiceStats>,
    status_codes: BTreeMap<u16, u64>,
    users: OrderedCounter<String>,
    hourly: BTreeMap<u8, u64>,
}

impl AggregateState {
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Error count keyed by status code (only codes >= 400).
    pub fn error_counts(&self) -> &BTreeMap<u16, u64> {
        &self.error_counts
    }

    pub fn total_errors(&self) -> u64 {
        self.error_counts.values().sum()
    }

    pub fn services(&self) -> &BTreeMap<String, ServiceStats> {
        &self.services
    }

    pub fn service(&self, name: &str) -> Option<&ServiceStats> {
        self.services.get(name)
    }

    /// Count of every status code seen, not only errors.
    pub fn status_codes(&self) -> &BTreeMap<u16, u64> {
        &self.status_codes
    }

    pub fn users(&self) -> &OrderedCounter<String> {
        &self.users
    }

    pub fn hourly(&self) -> &BTreeMap<u8, u64> {
        &self.hourly
    }

    /// Every response-time sample across all services.
    pub fn response_times(&self) -> impl Iterator<Item = u64> + '_ {
        self.services
            .values()
            .flat_map(|s| s.response_times.iter().copied())
    }

    fn apply(&mut self, record: &LogRecord) {
        let is_error = record.is_error();

        self.total += 1;
        *self.status_codes.entry(record.status_code).or_insert(0) += 1;

        if is_error {
            *self.error_counts.entry(record.status_code).or_insert(0) += 1;
        }

        // Avoid allocating the key once the service is known.
        match self.services.get_mut(&record.service_name) {
            Some(stats) => stats.record(record.response_time_ms, is_error),
            None => {
                let mut stats = ServiceStats::default();
                stats.record(record.response_time_ms, is_error);
                self.services.insert(record.service_name.clone(), stats);
            }
        }

        self.users.increment(&record.user_id);
        *self.hourly.entry(record.hour()).or_insert(0) += 1;
    }
}

/// Folds parsed records into an [`AggregateState`].
///
/// The aggregator is the single writer of its state. There is no
/// deduplication: feeding the same record twice counts it twice.
#[derive(Debug, Default)]
pub struct MetricsAggregator {
    state: AggregateState,
}

impl MetricsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, record: &LogRecord) {
        self.state.apply(record);
    }

    pub fn state(&self) -> &AggregateState {
        &self.state
    }

    pub fn into_state(self) -> AggregateState {
        self.state
    }
}
