use crate::analysis::{AggregateState, percent_2dp, percentiles, ratio_2dp, round_2dp};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scalar metrics the threshold evaluator works from, however they were
/// sourced (search store aggregation or a local parse run).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub error_count: u64,
    pub error_rate: f64,
    pub avg_response_time: f64,
    pub p95_response_time: f64,
    pub p99_response_time: f64,
    pub min_response_time: f64,
    pub max_response_time: f64,
    pub status_codes: BTreeMap<u16, u64>,
}

impl MetricsSnapshot {
    /// Builds a snapshot from a finished run. Percentiles are exact over every
    /// sample. Returns `None` for an empty run.
    pub fn from_state(state: &AggregateState) -> Option<Self> {
        let total = state.total();
        if total == 0 {
            return None;
        }

        let mut samples: Vec<u64> = state.response_times().collect();
        let sum: u128 = samples.iter().copied().map(u128::from).sum();
        let pcts = percentiles(&mut samples, &[95.0, 99.0]);
        let error_count = state.total_errors();

        Some(Self {
            total_requests: total,
            error_count,
            error_rate: percent_2dp(error_count, total),
            avg_response_time: ratio_2dp(sum, samples.len() as u128),
            p95_response_time: pcts[0].map(round_2dp).unwrap_or(0.0),
            p99_response_time: pcts[1].map(round_2dp).unwrap_or(0.0),
            min_response_time: samples.first().copied().unwrap_or(0) as f64,
            max_response_time: samples.last().copied().unwrap_or(0) as f64,
            status_codes: state.status_codes().clone(),
        })
    }
}
