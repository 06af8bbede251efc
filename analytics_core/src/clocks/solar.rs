//! Mean and apparent solar clock mappers.
//!
//! Mean solar time is UTC shifted by the site longitude (15° per hour,
//! east-positive). Apparent solar time additionally applies the equation of
//! time, so it follows the true Sun. Both are undefined exactly at the
//! poles, where "longitude" and hence solar time-of-day stop meaning
//! anything.

use chrono::Datelike;

use crate::models::{ms_into_utc_day, utc_datetime, WeekBucket, MS_PER_DAY, MS_PER_MINUTE};
use crate::solar::equation_of_time_minutes;

/// Bucket containing an instant on the mean solar clock, or `None` at a
/// pole (`|latitude| == 90.0` exactly).
pub fn map_mean_solar_to_bucket(
    instant_ms: i64,
    latitude: f64,
    longitude: f64,
) -> Option<WeekBucket> {
    if latitude.abs() == 90.0 {
        return None;
    }
    let dt = utc_datetime(instant_ms)?;
    let day = dt.weekday().num_days_from_monday() as i32;
    let solar_ms = ms_into_utc_day(instant_ms) + longitude_offset_ms(longitude);
    let (day, solar_ms) = normalize_into_day(day, solar_ms);
    WeekBucket::from_parts(day, (solar_ms / MS_PER_MINUTE) as u16).ok()
}

/// Bucket containing an instant on the apparent (true-Sun) solar clock, or
/// `None` at a pole.
///
/// Mean solar time plus the equation of time; the day wrap is re-applied
/// after the correction since it can push across a day boundary a second
/// time.
pub fn map_apparent_solar_to_bucket(
    instant_ms: i64,
    latitude: f64,
    longitude: f64,
) -> Option<WeekBucket> {
    if latitude.abs() == 90.0 {
        return None;
    }
    let dt = utc_datetime(instant_ms)?;
    let day = dt.weekday().num_days_from_monday() as i32;
    let mean_ms = ms_into_utc_day(instant_ms) + longitude_offset_ms(longitude);
    let (day, mean_ms) = normalize_into_day(day, mean_ms);

    let utc_fractional_hour = ms_into_utc_day(instant_ms) as f64 / 3_600_000.0;
    let equation_ms =
        (equation_of_time_minutes(dt.ordinal(), utc_fractional_hour) * 60_000.0).round() as i64;
    let (day, apparent_ms) = normalize_into_day(day as i32, mean_ms + equation_ms);
    WeekBucket::from_parts(day, (apparent_ms / MS_PER_MINUTE) as u16).ok()
}

/// Milliseconds of solar-time offset for a longitude (east-positive).
fn longitude_offset_ms(longitude: f64) -> i64 {
    // 15 degrees per hour: 240_000 ms per degree.
    (longitude * 240_000.0).round() as i64
}

/// Fold a milliseconds-into-day value into `[0, 86_400_000)`, stepping the
/// day of week cyclically for each full day crossed.
fn normalize_into_day(day_of_week: i32, mut ms: i64) -> (u8, i64) {
    let mut day = day_of_week;
    while ms < 0 {
        ms += MS_PER_DAY;
        day -= 1;
    }
    while ms >= MS_PER_DAY {
        ms -= MS_PER_DAY;
        day += 1;
    }
    (day.rem_euclid(7) as u8, ms)
}
