use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

/// Rendered when an epoch value is outside chrono's representable range.
const OUT_OF_RANGE: &str = "--:--";

/// Format an epoch-seconds timestamp as 24-hour `HH:mm` in the local
/// timezone.
pub fn format_clock_time(epoch_seconds: i64) -> String {
    format_clock_time_in(epoch_seconds, Local)
}

/// Current date as `dd Month yyyy`, e.g. `06 August 2026`.
pub fn format_current_date() -> String {
    format_date_at(Local::now())
}

/// Full weekday name for the current wall-clock instant.
pub fn format_day_of_week() -> String {
    format_day_at(Local::now())
}

fn format_clock_time_in<Tz: TimeZone>(epoch_seconds: i64, tz: Tz) -> String
where
    Tz::Offset: Display,
{
    match DateTime::<Utc>::from_timestamp(epoch_seconds, 0) {
        Some(instant) => instant.with_timezone(&tz).format("%H:%M").to_string(),
        None => OUT_OF_RANGE.to_string(),
    }
}

fn format_date_at<Tz: TimeZone>(instant: DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    instant.format("%d %B %Y").to_string()
}

fn format_day_at<Tz: TimeZone>(instant: DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    instant.format("%A").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_epoch_zero_is_midnight_utc() {
        assert_eq!(format_clock_time_in(0, Utc), "00:00");
    }

    #[test]
    fn test_clock_time_is_24_hour() {
        assert_eq!(format_clock_time_in(21600, Utc), "06:00");
        assert_eq!(format_clock_time_in(64800, Utc), "18:00");
    }

    #[test]
    fn test_clock_time_respects_offset() {
        let plus_one = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(format_clock_time_in(0, plus_one), "01:00");

        let half_hour = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(format_clock_time_in(0, half_hour), "05:30");
    }

    #[test]
    fn test_out_of_range_epoch_does_not_panic() {
        assert_eq!(format_clock_time_in(i64::MAX, Utc), OUT_OF_RANGE);
        assert_eq!(format_clock_time_in(i64::MIN, Utc), OUT_OF_RANGE);
    }

    #[test]
    fn test_date_format() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(format_date_at(instant), "15 June 2024");
    }

    #[test]
    fn test_day_format() {
        // 2024-06-15 was a Saturday
        let instant = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(format_day_at(instant), "Saturday");
    }

    #[test]
    fn test_public_formatters_produce_plausible_shapes() {
        let clock = format_clock_time(0);
        assert_eq!(clock.len(), 5);
        assert_eq!(clock.as_bytes()[2], b':');

        assert!(!format_current_date().is_empty());
        assert!(!format_day_of_week().is_empty());
    }
}
