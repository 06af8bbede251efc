//! Deployment site configuration from environment variables.

use std::env;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::ClockConfig;

/// Site settings loaded from the environment.
///
/// Raw strings are kept as read; [`SiteConfig::clock_config`] validates and
/// converts them into the typed configuration the mappers take.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees, east-positive.
    pub longitude: f64,
    /// IANA timezone name, e.g. `Europe/Madrid`.
    pub timezone: String,
}

impl SiteConfig {
    /// Create a new site configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `DIALSTAT_SITE_LATITUDE` (required): latitude in decimal degrees
    /// - `DIALSTAT_SITE_LONGITUDE` (required): longitude in decimal degrees
    /// - `DIALSTAT_SITE_TIMEZONE` (required): IANA timezone name
    ///
    /// # Errors
    /// Returns an error if a required variable is unset or not a number.
    pub fn from_env() -> AnalyticsResult<Self> {
        let latitude = required_f64("DIALSTAT_SITE_LATITUDE")?;
        let longitude = required_f64("DIALSTAT_SITE_LONGITUDE")?;
        let timezone = env::var("DIALSTAT_SITE_TIMEZONE").map_err(|_| {
            AnalyticsError::configuration("DIALSTAT_SITE_TIMEZONE environment variable not set")
        })?;
        Ok(Self {
            latitude,
            longitude,
            timezone,
        })
    }

    /// Validate and convert into the typed clock configuration.
    pub fn clock_config(&self) -> AnalyticsResult<ClockConfig> {
        let timezone = self.timezone.parse().map_err(|e| {
            AnalyticsError::configuration(format!(
                "invalid IANA timezone '{}': {}",
                self.timezone, e
            ))
        })?;
        ClockConfig::new(timezone, self.latitude, self.longitude)
    }
}

fn required_f64(name: &'static str) -> AnalyticsResult<f64> {
    let raw = env::var(name)
        .map_err(|_| AnalyticsError::configuration(format!("{} environment variable not set", name)))?;
    raw.parse().map_err(|_| {
        AnalyticsError::configuration(format!("{} must be a decimal number, got '{}'", name, raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_config_conversion() {
        let site = SiteConfig {
            latitude: 40.4,
            longitude: -3.7,
            timezone: "Europe/Madrid".to_string(),
        };
        let config = site.clock_config().unwrap();
        assert_eq!(config.timezone, chrono_tz::Europe::Madrid);
        assert_eq!(config.latitude, 40.4);
    }

    #[test]
    fn test_clock_config_rejects_unknown_timezone() {
        let site = SiteConfig {
            latitude: 40.4,
            longitude: -3.7,
            timezone: "Mars/Olympus_Mons".to_string(),
        };
        assert!(matches!(
            site.clock_config(),
            Err(AnalyticsError::Configuration(_))
        ));
    }

    #[test]
    fn test_clock_config_rejects_bad_coordinates() {
        let site = SiteConfig {
            latitude: 123.0,
            longitude: 0.0,
            timezone: "UTC".to_string(),
        };
        assert!(site.clock_config().is_err());
    }

}
