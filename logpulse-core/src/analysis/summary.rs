use crate::analysis::aggregation::{AggregateState, ServiceStats};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Number of users reported in [`SummaryMetrics::top_active_users`].
pub const TOP_USERS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    pub total_transactions: u64,
    pub total_errors: u64,
    pub error_rate_percent: f64,
    pub avg_response_time_ms: f64,
    pub unique_users: usize,
    pub unique_services: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceSummary {
    pub total_requests: u64,
    pub avg_response_time_ms: f64,
    pub error_count: u64,
    pub error_rate_percent: f64,
    pub min_response_time_ms: u64,
    pub max_response_time_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserActivity {
    pub user_id: String,
    pub count: u64,
}

/// Presentation-ready report derived from an [`AggregateState`].
///
/// Field names and nesting are part of the JSON export format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub summary: Totals,
    pub error_breakdown: BTreeMap<u16, u64>,
    pub status_code_distribution: BTreeMap<u16, u64>,
    pub service_metrics: BTreeMap<String, ServiceSummary>,
    pub hourly_distribution: BTreeMap<u8, u64>,
    /// Ranked by activity; serialized as an object in rank order.
    #[serde(serialize_with = "serialize_ranked")]
    pub top_active_users: Vec<UserActivity>,
}

/// Reduces aggregate state into a [`SummaryMetrics`].
///
/// Returns `None` when no records were aggregated, since rates and averages
/// are undefined on empty input. Pure: the same state always yields the same
/// summary.
pub fn summarize(state: &AggregateState) -> Option<SummaryMetrics> {
    let total = state.total();
    if total == 0 {
        return None;
    }

    let total_errors = state.total_errors();
    let response_sum: u128 = state.response_times().map(u128::from).sum();

    let service_metrics = state
        .services()
        .iter()
        .filter_map(|(name, stats)| summarize_service(stats).map(|s| (name.clone(), s)))
        .collect();

    let top_active_users = state
        .users()
        .most_common(TOP_USERS)
        .into_iter()
        .map(|(user_id, count)| UserActivity { user_id, count })
        .collect();

    Some(SummaryMetrics {
        summary: Totals {
            total_transactions: total,
            total_errors,
            error_rate_percent: percent_2dp(total_errors, total),
            avg_response_time_ms: ratio_2dp(response_sum, u128::from(total)),
            unique_users: state.users().len(),
            unique_services: state.services().len(),
        },
        error_breakdown: state.error_counts().clone(),
        status_code_distribution: state.status_codes().clone(),
        service_metrics,
        hourly_distribution: state.hourly().clone(),
        top_active_users,
    })
}

fn summarize_service(stats: &ServiceStats) -> Option<ServiceSummary> {
    let samples = stats.response_times();
    let min = *samples.iter().min()?;
    let max = *samples.iter().max()?;
    let sum: u128 = samples.iter().copied().map(u128::from).sum();

    Some(ServiceSummary {
        total_requests: stats.count(),
        avg_response_time_ms: ratio_2dp(sum, samples.len() as u128),
        error_count: stats.errors(),
        error_rate_percent: percent_2dp(stats.errors(), stats.count()),
        min_response_time_ms: min,
        max_response_time_ms: max,
    })
}

/// `part / whole * 100`, rounded half-up to two decimals.
pub fn percent_2dp(part: u64, whole: u64) -> f64 {
    ratio_2dp(u128::from(part) * 100, u128::from(whole))
}

/// `num / den` rounded half-up to two decimals, in exact integer arithmetic.
///
/// Returns `0.0` when `den` is zero.
pub fn ratio_2dp(num: u128, den: u128) -> f64 {
    if den == 0 {
        return 0.0;
    }
    let hundredths = (num * 200 + den) / (den * 2);
    hundredths as f64 / 100.0
}

/// Rounds a floating-point value half away from zero to two decimals.
pub fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn serialize_ranked<S: Serializer>(users: &[UserActivity], s: S) -> Result<S::Ok, S::Error> {
    let mut map = s.serialize_map(Some(users.len()))?;
    for u in users {
        map.serialize_entry(&u.user_id, &u.count)?;
    }
    map.end()
}
