//! Unequal (temporal) hours mapper.
//!
//! Sunrise is always labeled 06:00 and sunset always 18:00. Daytime
//! [sunrise, sunset) maps linearly onto minutes [360, 1080). Night
//! [sunset, next sunrise) splits at its midpoint: the first half maps onto
//! [1080, 1440) of the sunset's day, the second half onto [0, 360) of the
//! sunrise's day. Undefined whenever any bounding event is missing
//! (polar day/night) or the provider's events are inconsistent.

use crate::models::{utc_datetime, utc_weekday_monday0, WeekBucket};
use crate::solar::SolarEphemeris;

/// Bucket containing an instant on the unequal-hours clock.
///
/// Each night half uses the weekday of its own bounding event (sunset for
/// the evening half, next sunrise for the morning half), not the query
/// instant's weekday.
pub fn map_unequal_hours_to_bucket(
    instant_ms: i64,
    latitude: f64,
    longitude: f64,
    ephemeris: &dyn SolarEphemeris,
) -> Option<WeekBucket> {
    let today = utc_datetime(instant_ms)?.date_naive();
    let events = ephemeris.solar_day(today, latitude, longitude);
    let sunrise = events.sunrise?;
    let sunset = events.sunset?;

    if sunrise <= instant_ms && instant_ms < sunset {
        let minute = 360 + scale_offset(instant_ms - sunrise, sunset - sunrise, 720)?;
        let day_of_week = utc_weekday_monday0(instant_ms)?;
        return WeekBucket::from_parts(day_of_week, minute).ok();
    }

    // Night: bounded by the adjacent day's corresponding event.
    let (night_start, night_end) = if instant_ms < sunrise {
        let yesterday = ephemeris.solar_day(today.pred_opt()?, latitude, longitude);
        (yesterday.sunset?, sunrise)
    } else {
        let tomorrow = ephemeris.solar_day(today.succ_opt()?, latitude, longitude);
        (sunset, tomorrow.sunrise?)
    };
    if !(night_start <= instant_ms && instant_ms < night_end) {
        return None;
    }

    let midpoint = night_start + (night_end - night_start) / 2;
    if instant_ms < midpoint {
        let minute = 1080 + scale_offset(instant_ms - night_start, midpoint - night_start, 360)?;
        let day_of_week = utc_weekday_monday0(night_start)?;
        WeekBucket::from_parts(day_of_week, minute).ok()
    } else {
        let minute = scale_offset(instant_ms - midpoint, night_end - midpoint, 360)?;
        let day_of_week = utc_weekday_monday0(night_end)?;
        WeekBucket::from_parts(day_of_week, minute).ok()
    }
}

/// Linearly map an offset within `[0, span_ms)` onto `[0, minutes)`.
///
/// `None` for a degenerate span, which only an inconsistent provider can
/// produce.
fn scale_offset(offset_ms: i64, span_ms: i64, minutes: i64) -> Option<u16> {
    if span_ms <= 0 || offset_ms < 0 || offset_ms >= span_ms {
        return None;
    }
    Some((offset_ms * minutes / span_ms) as u16)
}
