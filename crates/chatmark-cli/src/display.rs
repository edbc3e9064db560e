//! Terminal presentation helpers.

use chatmark_client::parse_timestamp;
use chrono::{DateTime, Utc};

/// "Just now", "5m ago", "3h ago", "2d ago", or the date for older entries.
pub fn format_time_ago(created_at: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(created_at) else {
        return created_at.to_string();
    };
    let diff_ms = (now - then).num_milliseconds() as f64;
    let mins = (diff_ms / 60_000.0).round() as i64;
    let hours = (diff_ms / 3_600_000.0).round() as i64;
    let days = (diff_ms / 86_400_000.0).round() as i64;

    if mins < 1 {
        "Just now".to_string()
    } else if mins < 60 {
        format!("{mins}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        then.format("%Y-%m-%d").to_string()
    }
}
