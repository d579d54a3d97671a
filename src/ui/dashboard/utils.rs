//! Dashboard utility functions

/// Compact a `YYYY-MM-DD HH:MM:SS` timestamp to `MM-DD HH:MM` for the header.
/// Anything that doesn't match the expected shape passes through untouched.
pub fn format_compact_timestamp(timestamp: &str) -> String {
    let Some((date, time)) = timestamp.split_once(' ') else {
        return timestamp.to_string();
    };
    match (date.get(5..10), time.get(0..5)) {
        (Some(month_day), Some(hour_min)) => format!("{} {}", month_day, hour_min),
        _ => timestamp.to_string(),
    }
}
