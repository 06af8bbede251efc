//! Solar-position provider boundary.
//!
//! The unequal-hours clock needs sunrise and sunset instants; the apparent
//! solar clock needs the equation of time. Both come through this module.
//! The provider itself is an injectable trait so tests and alternative
//! almanac implementations can replace it without touching clock logic;
//! [`noaa::NoaaEphemeris`] is the bundled default.

pub mod noaa;

pub use noaa::NoaaEphemeris;

use chrono::NaiveDate;

/// Sunrise and sunset for one UTC calendar day at one location.
///
/// Either event may not occur on a given day (polar day or polar night);
/// absence is a legitimate value, not an error. Instants are epoch
/// milliseconds and may fall slightly outside the UTC day itself at extreme
/// longitudes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SolarDay {
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

impl SolarDay {
    /// A day on which neither event occurs.
    pub const ABSENT: SolarDay = SolarDay {
        sunrise: None,
        sunset: None,
    };
}

/// Source of sunrise/sunset instants.
///
/// Implementations must be pure functions of `(date, latitude, longitude)`
/// and safely callable concurrently; accuracy to within ordinary
/// solar-almanac precision (sub-minute class) is sufficient.
pub trait SolarEphemeris: Send + Sync {
    /// Sunrise and sunset for the given UTC calendar date.
    fn solar_day(&self, date: NaiveDate, latitude: f64, longitude: f64) -> SolarDay;
}

/// Equation of time in minutes for a day-of-year and UTC fractional hour.
///
/// NOAA Fourier approximation. Positive means apparent (sundial) time is
/// ahead of mean solar time; the seasonal range is roughly -14 to +16
/// minutes.
pub fn equation_of_time_minutes(day_of_year: u32, utc_fractional_hour: f64) -> f64 {
    let y = std::f64::consts::TAU / 365.0
        * (day_of_year as f64 - 1.0 + (utc_fractional_hour - 12.0) / 24.0);
    229.18
        * (0.000075 + 0.001868 * y.cos()
            - 0.032077 * y.sin()
            - 0.014615 * (2.0 * y).cos()
            - 0.040849 * (2.0 * y).sin())
}
