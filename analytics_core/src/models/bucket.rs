//! Time-of-week bucket arithmetic.
//!
//! A week is tiled by 2016 five-minute buckets: 7 days × 288 slots per day,
//! with day 0 = Monday. Bucket ids are the shared coordinate between the
//! clock mappers, the interval splitter and the dense array layout, so all
//! arithmetic here is pure integer math over validated values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Number of five-minute buckets in a week.
pub const WEEK_BUCKETS: u16 = 2016;

/// Number of five-minute slots in a day.
pub const SLOTS_PER_DAY: u16 = 288;

/// Minutes covered by one bucket.
pub const MINUTES_PER_SLOT: u16 = 5;

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Identifier of one five-minute time-of-week bucket, in `0..=2015`.
///
/// Day 0 is Monday. Construction is validated; a `WeekBucket` value is
/// always in range.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub struct WeekBucket(u16);

impl WeekBucket {
    /// Create a bucket id, failing for values outside `0..=2015`.
    pub fn new(value: u16) -> AnalyticsResult<Self> {
        if value >= WEEK_BUCKETS {
            return Err(AnalyticsError::out_of_range(
                "bucket",
                value as i64,
                0,
                (WEEK_BUCKETS - 1) as i64,
            ));
        }
        Ok(WeekBucket(value))
    }

    /// Compute the bucket containing `(day_of_week, minute_of_day)`.
    ///
    /// `day_of_week` is `0..=6` with 0 = Monday; `minute_of_day` is
    /// `0..=1439`. Fails for out-of-range inputs.
    pub fn from_parts(day_of_week: u8, minute_of_day: u16) -> AnalyticsResult<Self> {
        if day_of_week > 6 {
            return Err(AnalyticsError::out_of_range(
                "day_of_week",
                day_of_week as i64,
                0,
                6,
            ));
        }
        if minute_of_day >= MINUTES_PER_DAY {
            return Err(AnalyticsError::out_of_range(
                "minute_of_day",
                minute_of_day as i64,
                0,
                (MINUTES_PER_DAY - 1) as i64,
            ));
        }
        Ok(WeekBucket(
            day_of_week as u16 * SLOTS_PER_DAY + minute_of_day / MINUTES_PER_SLOT,
        ))
    }

    /// Raw bucket id.
    pub fn value(&self) -> u16 {
        self.0
    }

    /// Bucket id as an array index.
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Day of week covered by this bucket (`0..=6`, 0 = Monday).
    pub fn day_of_week(&self) -> u8 {
        (self.0 / SLOTS_PER_DAY) as u8
    }

    /// Position of this bucket within its day (`0..=287`).
    pub fn day_slot(&self) -> u16 {
        self.0 % SLOTS_PER_DAY
    }

    /// The `(day, minute)` span this bucket covers, half-open in minutes.
    pub fn span(&self) -> BucketSpan {
        let start_minute = self.day_slot() * MINUTES_PER_SLOT;
        BucketSpan {
            day_of_week: self.day_of_week(),
            start_minute,
            end_minute: start_minute + MINUTES_PER_SLOT,
        }
    }
}

impl TryFrom<u16> for WeekBucket {
    type Error = AnalyticsError;

    fn try_from(value: u16) -> AnalyticsResult<Self> {
        WeekBucket::new(value)
    }
}

impl From<WeekBucket> for u16 {
    fn from(bucket: WeekBucket) -> u16 {
        bucket.0
    }
}

impl std::fmt::Display for WeekBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The minute span of one bucket: day of week plus a half-open
/// `[start_minute, end_minute)` range within that day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSpan {
    pub day_of_week: u8,
    pub start_minute: u16,
    pub end_minute: u16,
}

/// Shortest signed step count from `a` to `b` around the 2016-bucket cycle.
///
/// Positive means forward. The result is in `-1007..=1008`: the half-cycle
/// tie resolves to the forward value `+1008`, never `-1008`.
pub fn cyclic_distance(a: WeekBucket, b: WeekBucket) -> i32 {
    let half = (WEEK_BUCKETS / 2) as i32;
    let mut diff = b.0 as i32 - a.0 as i32;
    if diff > half {
        diff -= WEEK_BUCKETS as i32;
    } else if diff < -half {
        diff += WEEK_BUCKETS as i32;
    }
    diff
}

/// Collapse a week-bucket-keyed map onto the 288 day slots.
///
/// For each day slot the values present at `slot + 288 * day` for days 0..=6
/// are folded with `combine` starting from `zero`. Slots where none of the
/// seven week buckets are present are omitted entirely rather than reported
/// as `zero`.
pub fn aggregate_time_of_day<V, F>(
    week_values: &BTreeMap<WeekBucket, V>,
    zero: V,
    combine: F,
) -> BTreeMap<u16, V>
where
    V: Clone,
    F: Fn(V, &V) -> V,
{
    let mut out = BTreeMap::new();
    for day_slot in 0..SLOTS_PER_DAY {
        let mut acc: Option<V> = None;
        for day in 0..7u16 {
            let bucket = WeekBucket(day * SLOTS_PER_DAY + day_slot);
            if let Some(value) = week_values.get(&bucket) {
                acc = Some(match acc {
                    None => combine(zero.clone(), value),
                    Some(acc) => combine(acc, value),
                });
            }
        }
        if let Some(acc) = acc {
            out.insert(day_slot, acc);
        }
    }
    out
}
