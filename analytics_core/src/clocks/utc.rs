//! UTC clock mapper. Always defined.

use chrono::Timelike;

use crate::models::{utc_datetime, WeekBucket};

/// Bucket containing an instant on the UTC clock.
///
/// Seconds and milliseconds are truncated, not rounded. Defined for every
/// instant chrono can represent.
pub fn map_utc_to_bucket(instant_ms: i64) -> Option<WeekBucket> {
    let dt = utc_datetime(instant_ms)?;
    let day_of_week = chrono::Datelike::weekday(&dt).num_days_from_monday() as u8;
    let minute_of_day = (dt.hour() * 60 + dt.minute()) as u16;
    WeekBucket::from_parts(day_of_week, minute_of_day).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> i64 {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn test_monday_midnight_is_bucket_zero() {
        // 2026-08-03 is a Monday.
        assert_eq!(map_utc_to_bucket(at(2026, 8, 3, 0, 0, 0)).unwrap().value(), 0);
    }

    #[test]
    fn test_sub_slot_times_truncate() {
        assert_eq!(
            map_utc_to_bucket(at(2026, 8, 3, 0, 4, 59)).unwrap().value(),
            0
        );
        assert_eq!(
            map_utc_to_bucket(at(2026, 8, 3, 0, 5, 0)).unwrap().value(),
            1
        );
    }

    #[test]
    fn test_week_end() {
        // 2026-08-09 is a Sunday.
        assert_eq!(
            map_utc_to_bucket(at(2026, 8, 9, 23, 55, 0)).unwrap().value(),
            2015
        );
        assert_eq!(
            map_utc_to_bucket(at(2026, 8, 9, 23, 59, 59)).unwrap().value(),
            2015
        );
        // The next millisecond wraps to Monday, bucket 0.
        assert_eq!(
            map_utc_to_bucket(at(2026, 8, 9, 23, 59, 59) + 1000)
                .unwrap()
                .value(),
            0
        );
    }

    #[test]
    fn test_pre_epoch_instants_are_defined() {
        // 1969-12-31 was a Wednesday.
        let bucket = map_utc_to_bucket(at(1969, 12, 31, 12, 0, 0)).unwrap();
        assert_eq!(bucket.day_of_week(), 2);
        assert_eq!(bucket.span().start_minute, 720);
    }
}
