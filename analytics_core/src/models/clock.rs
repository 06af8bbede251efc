//! Clock identity and per-deployment clock configuration.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Which rule derives "time of week" from a real instant.
///
/// The discriminants are the canonical ordinals used by the dense array
/// layout and the persisted blob format. They are load-bearing: do not
/// reorder or renumber.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum ClockKind {
    /// Coordinated Universal Time. Always defined.
    Utc = 0,
    /// Civil wall-clock time in the configured IANA timezone. Always defined.
    Local = 1,
    /// Mean solar time at the configured longitude.
    MeanSolar = 2,
    /// Apparent (true-Sun) solar time: mean solar plus the equation of time.
    ApparentSolar = 3,
    /// Temporal hours: sunrise is always 06:00 and sunset always 18:00, so
    /// hour length varies with season and latitude.
    UnequalHours = 4,
}

/// Number of clocks.
pub const CLOCK_COUNT: usize = 5;

impl ClockKind {
    /// All clocks in canonical ordinal order.
    pub const ALL: [ClockKind; CLOCK_COUNT] = [
        ClockKind::Utc,
        ClockKind::Local,
        ClockKind::MeanSolar,
        ClockKind::ApparentSolar,
        ClockKind::UnequalHours,
    ];

    /// Canonical ordinal (`0..=4`) of this clock in the array layout.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for ClockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ClockKind::Utc => "utc",
            ClockKind::Local => "local",
            ClockKind::MeanSolar => "meanSolar",
            ClockKind::ApparentSolar => "apparentSolar",
            ClockKind::UnequalHours => "unequalHours",
        };
        write!(f, "{}", name)
    }
}

/// Clock configuration for one deployment site.
///
/// One configuration is global per deployment in practice, but every mapping
/// function takes it as an explicit parameter, never global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// IANA timezone, used only by the local-clock mapper.
    pub timezone: Tz,
    /// Latitude in decimal degrees (-90 to 90).
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180), east-positive.
    pub longitude: f64,
}

impl ClockConfig {
    /// Create a configuration, validating the coordinate ranges.
    pub fn new(timezone: Tz, latitude: f64, longitude: f64) -> AnalyticsResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AnalyticsError::invalid_argument(format!(
                "latitude must be between -90 and 90 degrees, got {}",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AnalyticsError::invalid_argument(format!(
                "longitude must be between -180 and 180 degrees, got {}",
                longitude
            )));
        }
        Ok(Self {
            timezone,
            latitude,
            longitude,
        })
    }
}
