//! Client configuration from environment.

use routeplan_core::{GeoBounds, ResponsePolicy};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub planner_url: String,
    pub timeout: Duration,
    pub geocoder_url: String,
    pub country_codes: String,
    pub bounds: GeoBounds,
    pub strict_point_count: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            planner_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(30),
            geocoder_url: "https://nominatim.openstreetmap.org".to_string(),
            country_codes: "cz".to_string(),
            bounds: GeoBounds::CZECH_REPUBLIC,
            strict_point_count: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            planner_url: lookup("ROUTEPLAN_PLANNER_URL").unwrap_or(defaults.planner_url),
            timeout: lookup("ROUTEPLAN_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            geocoder_url: lookup("ROUTEPLAN_GEOCODER_URL").unwrap_or(defaults.geocoder_url),
            country_codes: lookup("ROUTEPLAN_COUNTRY_CODES").unwrap_or(defaults.country_codes),
            bounds: lookup("ROUTEPLAN_BOUNDS")
                .and_then(|s| GeoBounds::parse(&s))
                .unwrap_or(defaults.bounds),
            strict_point_count: lookup("ROUTEPLAN_STRICT_POINT_COUNT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.strict_point_count),
        }
    }

    pub fn response_policy(&self) -> ResponsePolicy {
        ResponsePolicy {
            strict_point_count: self.strict_point_count,
        }
    }
}
