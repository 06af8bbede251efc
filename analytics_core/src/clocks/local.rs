//! Civil (wall-clock) mapper for the configured IANA timezone.
//!
//! Always defined: resolving a real instant to wall time is total. During a
//! spring-forward transition the skipped wall times simply never occur;
//! instants at or after the transition resolve under the post-transition
//! offset. During fall-back, the two real instants sharing a wall time both
//! resolve to that repeated wall time. Neither case panics.

use chrono::Timelike;
use chrono_tz::Tz;

use crate::models::{utc_datetime, WeekBucket};

/// Bucket containing an instant on the configured timezone's wall clock.
pub fn map_local_to_bucket(instant_ms: i64, timezone: Tz) -> Option<WeekBucket> {
    let local = utc_datetime(instant_ms)?.with_timezone(&timezone);
    let day_of_week = chrono::Datelike::weekday(&local).num_days_from_monday() as u8;
    let minute_of_day = (local.hour() * 60 + local.minute()) as u16;
    WeekBucket::from_parts(day_of_week, minute_of_day).ok()
}
