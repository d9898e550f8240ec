//! Display conversions for the durations and timestamps sent by the gateway.

use chrono::{DateTime, Local, Utc};

const NANOS_PER_SEC: i64 = 1_000_000_000;
const NANOS_PER_MILLI: i64 = 1_000_000;

pub const DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Formats a duration given as whole seconds plus a nanosecond part.
///
/// Returns `"{h}h {m}m"`, `"{m}m {s}s"` or `"{s}s"` depending on the largest
/// non-zero unit, and an empty string when the total is zero or negative.
pub fn ttl_to_human(seconds: i64, nanos: i64) -> String {
    let total = seconds.saturating_add(nanos.div_euclid(NANOS_PER_SEC));
    if total <= 0 {
        return String::new();
    }

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Converts a timestamp given as seconds plus a nanosecond part, truncated to
/// the millisecond. `None` if the value does not fit a date.
pub fn timestamp_to_date(seconds: i64, nanos: i64) -> Option<DateTime<Utc>> {
    let millis = seconds
        .checked_mul(1000)?
        .checked_add(nanos.div_euclid(NANOS_PER_MILLI))?;
    DateTime::from_timestamp_millis(millis)
}

/// `dd.mm.yyyy hh:mm:ss` in the local timezone.
pub fn format_local(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_to_human() {
        assert_eq!(ttl_to_human(0, 0), "");
        assert_eq!(ttl_to_human(-5, 0), "");
        assert_eq!(ttl_to_human(0, 999_999_999), "");
        assert_eq!(ttl_to_human(i64::MIN, -1), "");
        assert_eq!(ttl_to_human(45, 0), "45s");
        assert_eq!(ttl_to_human(0, 3 * NANOS_PER_SEC), "3s");
        assert_eq!(ttl_to_human(60, 0), "1m 0s");
        assert_eq!(ttl_to_human(125, 500), "2m 5s");
        assert_eq!(ttl_to_human(3600, 0), "1h 0m");
        assert_eq!(ttl_to_human(86_400 + 61, 0), "24h 1m");
    }

    #[test]
    fn test_timestamp_to_date() {
        let date = timestamp_to_date(1_761_832_288, 747_647_000).unwrap();
        assert_eq!(date.timestamp_millis(), 1_761_832_288_747);

        let date = timestamp_to_date(0, 1_999_999).unwrap();
        assert_eq!(date.timestamp_millis(), 1);

        assert_eq!(timestamp_to_date(i64::MAX, 0), None);
        assert_eq!(timestamp_to_date(i64::MAX / 1000, i64::MAX), None);
    }

    #[test]
    fn test_format_local() {
        let date = timestamp_to_date(1_761_832_288, 0).unwrap();
        let expected = date.with_timezone(&Local).format("%d.%m.%Y %H:%M:%S").to_string();
        assert_eq!(format_local(&date), expected);
        assert_eq!(expected.len(), "30.10.2025 13:51:28".len());
    }
}
