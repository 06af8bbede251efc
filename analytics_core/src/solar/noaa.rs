//! Bundled NOAA sunrise/sunset implementation.
//!
//! Standard NOAA solar-geometry approximation evaluated at solar noon of
//! the requested day. Good to a minute or two, which is all the
//! unequal-hours clock needs.

use chrono::{Datelike, NaiveDate};

use super::{equation_of_time_minutes, SolarDay, SolarEphemeris};

/// Solar zenith angle at the moment of sunrise/sunset, in degrees.
/// 90° plus atmospheric refraction and the solar disc radius.
const SUNRISE_ZENITH_DEG: f64 = 90.833;

/// Default solar-position provider using the NOAA approximation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoaaEphemeris;

impl SolarEphemeris for NoaaEphemeris {
    fn solar_day(&self, date: NaiveDate, latitude: f64, longitude: f64) -> SolarDay {
        let day_of_year = date.ordinal();
        let eqtime = equation_of_time_minutes(day_of_year, 12.0);
        let decl = solar_declination(day_of_year);

        let phi = latitude.to_radians();
        let cos_hour_angle = SUNRISE_ZENITH_DEG.to_radians().cos() / (phi.cos() * decl.cos())
            - phi.tan() * decl.tan();

        // Polar day (< -1), polar night (> 1), or a pole itself (non-finite):
        // the sun neither rises nor sets on this calendar day.
        if !cos_hour_angle.is_finite() || cos_hour_angle.abs() > 1.0 {
            return SolarDay::ABSENT;
        }
        let hour_angle_deg = cos_hour_angle.acos().to_degrees();

        let sunrise_minutes = 720.0 - 4.0 * (longitude + hour_angle_deg) - eqtime;
        let sunset_minutes = 720.0 - 4.0 * (longitude - hour_angle_deg) - eqtime;

        let midnight_ms = date
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always a valid time")
            .and_utc()
            .timestamp_millis();
        SolarDay {
            sunrise: Some(midnight_ms + (sunrise_minutes * 60_000.0).round() as i64),
            sunset: Some(midnight_ms + (sunset_minutes * 60_000.0).round() as i64),
        }
    }
}

/// Solar declination in radians for a day of year (NOAA Fourier series).
fn solar_declination(day_of_year: u32) -> f64 {
    let y = std::f64::consts::TAU / 365.0 * (day_of_year as f64 - 1.0);
    0.006918 - 0.399912 * y.cos() + 0.070257 * y.sin()
        - 0.006758 * (2.0 * y).cos()
        + 0.000907 * (2.0 * y).sin()
        - 0.002697 * (3.0 * y).cos()
        + 0.00148 * (3.0 * y).sin()
}
