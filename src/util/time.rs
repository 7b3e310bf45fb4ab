//! Timestamp formatting

use chrono::{DateTime, Utc};

const ISO8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format a UTC time as ISO-8601 at second precision
pub fn format_date_time(time: &DateTime<Utc>) -> String {
    time.format(ISO8601_FORMAT).to_string()
}

/// Format milliseconds since the Unix epoch; `None` when out of range
pub fn date_time_format(millis: i64) -> Option<String> {
    DateTime::from_timestamp_millis(millis).map(|t| format_date_time(&t))
}
