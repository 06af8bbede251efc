// Each integration test binary compiles this module separately and uses a
// different subset of it.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::{NaiveDate, TimeZone, Utc};
use dialstat_core::models::ClockConfig;
use dialstat_core::solar::{SolarDay, SolarEphemeris};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Panic-safe (restores variables on unwind) and serializes access to the
/// process-global environment so parallel test threads never race.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }
        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in &self.snapshot {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }
    }
}

/// Madrid deployment used across the integration tests.
pub fn madrid_config() -> ClockConfig {
    ClockConfig::new(chrono_tz::Europe::Madrid, 40.4168, -3.7038).unwrap()
}

/// Epoch milliseconds of a UTC civil time.
pub fn utc_ms(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> i64 {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .unwrap()
        .timestamp_millis()
}

/// Ephemeris with the same sunrise/sunset wall minutes every day, which makes
/// unequal-hours behavior exactly predictable in tests.
pub struct FixedEphemeris {
    pub sunrise_minute: i64,
    pub sunset_minute: i64,
}

impl SolarEphemeris for FixedEphemeris {
    fn solar_day(&self, date: NaiveDate, _latitude: f64, _longitude: f64) -> SolarDay {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis();
        SolarDay {
            sunrise: Some(midnight + self.sunrise_minute * 60_000),
            sunset: Some(midnight + self.sunset_minute * 60_000),
        }
    }
}
