//! Instant, interval and season-window types.
//!
//! Real time is carried as integer milliseconds since the Unix epoch
//! (UTC). chrono does the civil-calendar resolution.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Milliseconds in a civil day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Milliseconds in a minute.
pub const MS_PER_MINUTE: i64 = 60_000;

/// Resolve an epoch-ms instant to a chrono UTC datetime.
///
/// `None` only for instants outside chrono's representable range
/// (roughly ±262,000 years), unreachable for real measurements.
pub fn utc_datetime(instant_ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(instant_ms)
}

/// Day of week of an instant's UTC calendar date, `0..=6` with 0 = Monday.
pub fn utc_weekday_monday0(instant_ms: i64) -> Option<u8> {
    utc_datetime(instant_ms).map(|dt| dt.weekday().num_days_from_monday() as u8)
}

/// Milliseconds elapsed since the instant's UTC midnight, in
/// `0..86_400_000`. Correct for pre-epoch instants as well.
pub fn ms_into_utc_day(instant_ms: i64) -> i64 {
    instant_ms.rem_euclid(MS_PER_DAY)
}

/// A half-open real-time range `[start_ms, end_ms)` in epoch milliseconds.
///
/// A range with `start_ms >= end_ms` is empty, which is a no-op for the
/// splitter, not an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldInterval {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl HoldInterval {
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// True when the range covers no time at all.
    pub fn is_empty(&self) -> bool {
        self.start_ms >= self.end_ms
    }

    /// Elapsed milliseconds covered; zero for an empty range.
    pub fn duration_ms(&self) -> i64 {
        (self.end_ms - self.start_ms).max(0)
    }

    /// Half-open containment check.
    pub fn contains(&self, instant_ms: i64) -> bool {
        self.start_ms <= instant_ms && instant_ms < self.end_ms
    }
}

/// A UTC calendar quarter, the season component of the external blob key
/// `(control, model, season window)`.
///
/// Retention and rollover policy live in the aggregation layer; this type
/// only derives the window an instant belongs to.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SeasonWindow {
    pub year: i32,
    /// Quarter within the year, `1..=4`.
    pub quarter: u8,
}

impl SeasonWindow {
    /// The window containing an epoch-ms instant.
    pub fn from_instant(instant_ms: i64) -> Option<Self> {
        let dt = utc_datetime(instant_ms)?;
        Some(Self {
            year: dt.year(),
            quarter: (dt.month0() / 3 + 1) as u8,
        })
    }
}

impl std::fmt::Display for SeasonWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}Q{}", self.year, self.quarter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_a_thursday() {
        // 1970-01-01 was a Thursday.
        assert_eq!(utc_weekday_monday0(0), Some(3));
    }

    #[test]
    fn test_ms_into_utc_day_pre_epoch() {
        assert_eq!(ms_into_utc_day(-1), MS_PER_DAY - 1);
        assert_eq!(ms_into_utc_day(-MS_PER_DAY), 0);
        assert_eq!(ms_into_utc_day(1), 1);
    }

    #[test]
    fn test_hold_interval_emptiness() {
        assert!(HoldInterval::new(10, 10).is_empty());
        assert!(HoldInterval::new(10, 5).is_empty());
        assert!(!HoldInterval::new(5, 10).is_empty());
        assert_eq!(HoldInterval::new(10, 5).duration_ms(), 0);
        assert_eq!(HoldInterval::new(5, 10).duration_ms(), 5);
    }

    #[test]
    fn test_hold_interval_half_open() {
        let interval = HoldInterval::new(100, 200);
        assert!(interval.contains(100));
        assert!(interval.contains(199));
        assert!(!interval.contains(200));
    }

    #[test]
    fn test_season_window_quarters() {
        // 2026-01-15, 2026-04-01, 2026-12-31.
        let q1 = SeasonWindow::from_instant(1_768_435_200_000).unwrap();
        assert_eq!(q1.quarter, 1);
        assert_eq!(q1.year, 2026);
        let q4 = SeasonWindow::from_instant(1_798_675_200_000).unwrap();
        assert_eq!(q4.quarter, 4);
        assert_eq!(q4.to_string(), "2026Q4");
    }
}
