//! Mathematical utility functions for mining statistics
//!
//! Percentage and average helpers with zero-division handling, shared by the
//! ranking builder and the report formatters.

/// Calculate percentage safely, returning 0.0 if total is zero.
///
/// # Examples
/// ```
/// use nock_mining_stats::utils::math::safe_percentage;
///
/// assert_eq!(safe_percentage(1, 2), 50.0);
/// assert_eq!(safe_percentage(3, 4), 75.0);
/// assert_eq!(safe_percentage(5, 0), 0.0);  // Zero-division guard
/// ```
#[inline]
pub fn safe_percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

/// Mean of `total` spread over `count` items, 0.0 when there are no items.
///
/// # Examples
/// ```
/// use nock_mining_stats::utils::math::safe_average;
///
/// assert_eq!(safe_average(7, 2), 3.5);
/// assert_eq!(safe_average(7, 0), 0.0);
/// ```
#[inline]
pub fn safe_average(total: u64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}
