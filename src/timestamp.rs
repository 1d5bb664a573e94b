//! Hand timestamps.
//!
//! The client writes local time as `2025-02-08 오후 11:04:31`. PokerStars
//! wants `2025/02/08 23:04:31 KST`.
use chrono::NaiveDateTime;
use tracing::debug;

const SOURCE_FORMAT: &str = "%Y-%m-%d %p %I:%M:%S";
const OUTPUT_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Parse a source timestamp with Korean AM/PM markers.
pub fn parse_korean_timestamp(text: &str) -> Option<NaiveDateTime> {
    let normalized = text.trim().replace("오전", "AM").replace("오후", "PM");
    NaiveDateTime::parse_from_str(&normalized, SOURCE_FORMAT).ok()
}

pub fn format_datetime(datetime: &NaiveDateTime, timezone_label: &str) -> String {
    format!("{} {}", datetime.format(OUTPUT_FORMAT), timezone_label)
}

/// Render the hand timestamp, preferring the override when there is one.
///
/// A source timestamp that doesn't parse is passed through untouched.
pub fn render_timestamp(
    source: &str,
    timestamp_override: Option<&NaiveDateTime>,
    timezone_label: &str,
) -> String {
    if let Some(datetime) = timestamp_override {
        return format_datetime(datetime, timezone_label);
    }
    match parse_korean_timestamp(source) {
        Some(datetime) => format_datetime(&datetime, timezone_label),
        None => {
            debug!(source, "Unparseable timestamp, keeping it verbatim");
            source.to_string()
        }
    }
}
