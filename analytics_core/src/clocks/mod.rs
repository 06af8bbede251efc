//! The five clock mappers.
//!
//! Each mapper turns a real instant plus the site configuration into a
//! time-of-week bucket, or `None` where that clock's time-of-day is not
//! defined at that instant and location. `None` is a legitimate value, not
//! an error, and is never conflated with bucket 0.
//!
//! Dispatch is an exhaustive `match` over [`ClockKind`]: adding a sixth
//! clock without updating it fails to compile.

pub mod local;
pub mod solar;
pub mod unequal;
pub mod utc;

use crate::models::{ClockConfig, ClockKind, WeekBucket};
use crate::solar::SolarEphemeris;

/// Map an instant to a time-of-week bucket under one clock.
///
/// Pure and deterministic: the same inputs always give the same output.
/// Only the unequal-hours clock consults the ephemeris.
pub fn map_to_bucket(
    clock: ClockKind,
    instant_ms: i64,
    config: &ClockConfig,
    ephemeris: &dyn SolarEphemeris,
) -> Option<WeekBucket> {
    match clock {
        ClockKind::Utc => utc::map_utc_to_bucket(instant_ms),
        ClockKind::Local => local::map_local_to_bucket(instant_ms, config.timezone),
        ClockKind::MeanSolar => {
            solar::map_mean_solar_to_bucket(instant_ms, config.latitude, config.longitude)
        }
        ClockKind::ApparentSolar => {
            solar::map_apparent_solar_to_bucket(instant_ms, config.latitude, config.longitude)
        }
        ClockKind::UnequalHours => unequal::map_unequal_hours_to_bucket(
            instant_ms,
            config.latitude,
            config.longitude,
            ephemeris,
        ),
    }
}
