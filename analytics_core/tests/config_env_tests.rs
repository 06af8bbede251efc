//! Environment-driven site configuration tests.

mod support;

use dialstat_core::config::SiteConfig;
use dialstat_core::error::AnalyticsError;
use support::with_scoped_env;

#[test]
fn from_env_reads_a_complete_site() {
    let site = with_scoped_env(
        &[
            ("DIALSTAT_SITE_LATITUDE", Some("28.7624")),
            ("DIALSTAT_SITE_LONGITUDE", Some("-17.8892")),
            ("DIALSTAT_SITE_TIMEZONE", Some("Atlantic/Canary")),
        ],
        SiteConfig::from_env,
    )
    .unwrap();

    assert_eq!(site.latitude, 28.7624);
    assert_eq!(site.timezone, "Atlantic/Canary");
    let config = site.clock_config().unwrap();
    assert_eq!(config.timezone, chrono_tz::Atlantic::Canary);
}

#[test]
fn from_env_requires_every_variable() {
    let missing_tz = with_scoped_env(
        &[
            ("DIALSTAT_SITE_LATITUDE", Some("40.0")),
            ("DIALSTAT_SITE_LONGITUDE", Some("0.0")),
            ("DIALSTAT_SITE_TIMEZONE", None),
        ],
        SiteConfig::from_env,
    );
    assert!(matches!(missing_tz, Err(AnalyticsError::Configuration(_))));
}

#[test]
fn from_env_rejects_non_numeric_coordinates() {
    let bad_latitude = with_scoped_env(
        &[
            ("DIALSTAT_SITE_LATITUDE", Some("north-ish")),
            ("DIALSTAT_SITE_LONGITUDE", Some("0.0")),
            ("DIALSTAT_SITE_TIMEZONE", Some("UTC")),
        ],
        SiteConfig::from_env,
    );
    assert!(matches!(bad_latitude, Err(AnalyticsError::Configuration(_))));
}
