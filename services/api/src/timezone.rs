//! Wall-clock conversions in the configured UTC offset

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

/// Compose a calendar date and a wall-clock time into an instant
///
/// Fixed offsets have no gaps or folds, so every local time maps to exactly
/// one instant.
pub fn compose(date: NaiveDate, time: NaiveTime, offset: FixedOffset) -> Option<DateTime<Utc>> {
    offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// `dd/mm/yyyy`
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `dd/mm/yyyy, HH:MM:SS` in the given offset
pub fn format_datetime_br(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    instant
        .with_timezone(&offset)
        .format("%d/%m/%Y, %H:%M:%S")
        .to_string()
}
