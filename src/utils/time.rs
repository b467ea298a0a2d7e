//! Timestamp formatting for report summaries

use chrono::{DateTime, TimeZone};

/// Layout of the "Last updated" line in console reports
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a report generation time as `YYYY-MM-DD HH:MM:SS`
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use nock_mining_stats::utils::time::format_report_timestamp;
///
/// let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
/// assert_eq!(format_report_timestamp(&ts), "2024-01-02 03:04:05");
/// ```
pub fn format_report_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.format(REPORT_TIMESTAMP_FORMAT).to_string()
}
