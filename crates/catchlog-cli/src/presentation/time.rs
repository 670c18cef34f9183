use chrono::{DateTime, Utc};

/// Compact date-and-time display for table rows.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
