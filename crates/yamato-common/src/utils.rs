//! Shared time helpers.

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};

/// Offset of the tracker's display zone (UTC+9) in seconds.
pub const TRACKER_UTC_OFFSET_SECS: i32 = 9 * 60 * 60;

/// Layout used when rendering tracker timestamps for humans.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The fixed UTC+9 zone every tracker timestamp is normalized into.
pub fn tracker_zone() -> FixedOffset {
    FixedOffset::east_opt(TRACKER_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Converts any instant into the tracker zone.
pub fn to_tracker_zone<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> DateTime<FixedOffset> {
    timestamp.with_timezone(&tracker_zone())
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM` in the tracker zone.
pub fn format_display_time<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String {
    to_tracker_zone(timestamp).format(DISPLAY_FORMAT).to_string()
}
