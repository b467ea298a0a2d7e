//! Utility functions for report formatting
//!
//! Provides shared formatting helpers used across the report formatters.

use crate::errors::AppResult;
use serde::Serialize;

/// Marker placed between the kept ends of a truncated identifier
pub const ELLIPSIS: &str = "...";

/// Longest prefix or suffix kept when truncating an identifier
pub const MAX_TRUNCATED_SIDE: usize = 16;

/// Shorten an identifier for display in a column of `max_width` characters
///
/// Identifiers that fit are returned unchanged. Longer ones keep a prefix and
/// a suffix of at most 16 characters each around an ellipsis. Widths are
/// counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// # use nock_mining_stats::analysis::reports::utils::truncate_identifier;
/// let long = "a".repeat(20) + &"b".repeat(30);
/// assert_eq!(
///     truncate_identifier(&long, 36),
///     "aaaaaaaaaaaaaaaa...bbbbbbbbbbbbbbbb"
/// );
/// assert_eq!(truncate_identifier("short", 36), "short");
/// ```
pub fn truncate_identifier(identifier: &str, max_width: usize) -> String {
    let length = identifier.chars().count();
    if length <= max_width {
        return identifier.to_string();
    }

    let available = max_width.saturating_sub(ELLIPSIS.len());
    let prefix_len = MAX_TRUNCATED_SIDE.min(available / 2);
    let suffix_len = MAX_TRUNCATED_SIDE.min(available - prefix_len);

    let prefix: String = identifier.chars().take(prefix_len).collect();
    let suffix: String = identifier.chars().skip(length - suffix_len).collect();
    format!("{}{}{}", prefix, ELLIPSIS, suffix)
}

/// Export data as JSON for programmatic use
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');
    Ok(json)
}
