use crate::alerting::{Alert, MetricsSnapshot, Severity};
use crate::analysis::{ParseRun, SummaryMetrics};
use crate::ingest::IngestTally;
use chrono::NaiveDateTime;
use owo_colors::OwoColorize;
use std::fmt::Write;

const WIDE_RULE: usize = 60;
const RULE: usize = 50;
const SUB_RULE: usize = 30;

pub fn render_analysis(run: &ParseRun, summary: Option<&SummaryMetrics>) -> String {
    let mut out = String::new();
    let stats = run.stats();

    let _ = writeln!(out, "Successfully parsed {} log entries", stats.parsed);
    if stats.rejected > 0 {
        let _ = writeln!(out, "Skipped {} unparsable lines", stats.rejected);
    }

    let Some(m) = summary else {
        out.push_str("\nNo log entries to summarize\n");
        return out;
    };

    let s = &m.summary;
    let _ = write!(
        out,
        "\n{rule}\nLOG ANALYSIS SUMMARY\n{rule}\n\
         Total Transactions: {}\n\
         Total Errors: {}\n\
         Error Rate: {:.2}%\n\
         Average Response Time: {:.2}ms\n\
         Unique Users: {}\n\
         Unique Services: {}\n",
        s.total_transactions,
        s.total_errors,
        s.error_rate_percent,
        s.avg_response_time_ms,
        s.unique_users,
        s.unique_services,
        rule = "=".repeat(RULE),
    );

    out.push_str("\nError Breakdown by Status Code:\n");
    if m.error_breakdown.is_empty() {
        out.push_str("  <none>\n");
    }
    for (code, count) in &m.error_breakdown {
        let _ = writeln!(out, "  {code}: {count} errors");
    }

    out.push_str("\nService Performance:\n");
    for (service, svc) in &m.service_metrics {
        let _ = write!(
            out,
            "  {service}:\n    Requests: {}\n    Avg Response Time: {:.2}ms\n    Error Rate: {:.2}%\n",
            svc.total_requests, svc.avg_response_time_ms, svc.error_rate_percent
        );
    }

    if !m.top_active_users.is_empty() {
        out.push_str("\nTop Active Users:\n");
        for u in &m.top_active_users {
            let _ = writeln!(out, "  {}: {}", u.user_id, u.count);
        }
    }

    out
}

pub fn render_ingest(tally: &IngestTally) -> String {
    format!(
        "\nIngestion complete:\n  Successful: {}\n  Failed: {}\n  Total: {}\n",
        tally.successful, tally.failed, tally.total
    )
}

pub fn render_monitor(
    snapshot: Option<&MetricsSnapshot>,
    alerts: &[Alert],
    now: NaiveDateTime,
    color: bool,
) -> String {
    let mut out = String::new();
    let rule = "=".repeat(WIDE_RULE);
    let sub = "-".repeat(SUB_RULE);

    let _ = write!(
        out,
        "{rule}\nE-COMMERCE PLATFORM MONITORING\n{rule}\nTimestamp: {}\n\n",
        now.format("%Y-%m-%d %H:%M:%S")
    );

    let Some(m) = snapshot else {
        out.push_str("Could not retrieve metrics from the search index\n");
        return out;
    };

    let _ = write!(
        out,
        "CURRENT METRICS:\n{sub}\n\
         Total Requests: {}\n\
         Error Count: {}\n\
         Error Rate: {}%\n\
         Avg Response Time: {}ms\n\
         P95 Response Time: {}ms\n\
         P99 Response Time: {}ms\n\n",
        m.total_requests,
        m.error_count,
        m.error_rate,
        m.avg_response_time,
        m.p95_response_time,
        m.p99_response_time,
    );

    let _ = writeln!(out, "STATUS CODE DISTRIBUTION:\n{sub}");
    for (code, count) in &m.status_codes {
        let _ = writeln!(out, "  {code}: {count}");
    }
    out.push('\n');

    out.push_str(&render_alerts(alerts, color));
    let _ = writeln!(out, "{rule}");
    out
}

pub fn render_alerts(alerts: &[Alert], color: bool) -> String {
    if alerts.is_empty() {
        return "All metrics within normal thresholds\n".to_string();
    }

    let mut out = format!("ALERTS TRIGGERED:\n{}\n", "-".repeat(SUB_RULE));
    for alert in alerts {
        let _ = write!(
            out,
            "{}: {}\n   {}\n\n",
            severity_label(alert.severity, color),
            alert.kind,
            alert.message
        );
    }
    out
}

fn severity_label(severity: Severity, color: bool) -> String {
    match (severity, color) {
        (_, false) => severity.to_string(),
        (Severity::Critical, true) => severity.to_string().red().bold().to_string(),
        (Severity::Warning, true) => severity.to_string().yellow().bold().to_string(),
    }
}
