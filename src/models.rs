// ABOUTME: Core data models for forecasts, sun times, and recommendations
// ABOUTME: Immutable inputs from collaborators and the serialization-agnostic output value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcast Contributors

//! Data models
//!
//! [`HourlyWeather`] and [`SunTimes`] are produced by the weather-fetch
//! collaborator and consumed read-only here. [`Recommendation`] is the
//! engine's single output value; callers map it to their own wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Mood;

/// One hour of forecast data, immutable once constructed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyWeather {
    /// Start of the forecast hour
    pub timestamp: DateTime<Utc>,
    /// Air temperature in °C (signed)
    pub temperature_celsius: f64,
    /// Wind speed in m/s
    pub wind_speed_ms: f64,
    /// Rain probability, 0–100 %
    pub rain_probability: f64,
    /// Cloud cover, 0–100 %
    pub cloud_cover: f64,
    /// UV index, 0 and up
    pub uv_index: f64,
    /// Free-text conditions description
    pub description: String,
}

/// Sunrise and sunset instants for one forecast batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunTimes {
    /// Sunrise instant
    pub sunrise: DateTime<Utc>,
    /// Sunset instant
    pub sunset: DateTime<Utc>,
}

impl SunTimes {
    /// Whether the given instant falls within `[sunrise, sunset]` inclusive
    #[must_use]
    pub fn is_daylight(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.sunrise && instant <= self.sunset
    }
}

/// One forecast hour paired with its mood score, alive only during selection
#[derive(Debug, Clone)]
pub struct ScoredWindow<'a> {
    /// The scored forecast hour
    pub hour: &'a HourlyWeather,
    /// Suitability score for the requested mood
    pub score: f64,
}

/// Weather echoed back in a recommendation, rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in °C, 1 decimal
    pub temp: f64,
    /// Wind speed in m/s, 1 decimal
    pub wind: f64,
    /// Rain probability in whole percent
    pub rain_probability: u8,
    /// Cloud cover in whole percent
    pub cloud_cover: u8,
    /// UV index, 1 decimal
    pub uv_index: f64,
}

impl WeatherSnapshot {
    /// Rounded snapshot of one forecast hour
    #[must_use]
    pub fn from_hour(hour: &HourlyWeather) -> Self {
        Self {
            temp: round_to_tenth(hour.temperature_celsius),
            wind: round_to_tenth(hour.wind_speed_ms),
            rain_probability: round_to_pct(hour.rain_probability),
            cloud_cover: round_to_pct(hour.cloud_cover),
            uv_index: round_to_tenth(hour.uv_index),
        }
    }

    /// All-zero snapshot used by the fallback response
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            temp: 0.0,
            wind: 0.0,
            rain_probability: 0,
            cloud_cover: 0,
            uv_index: 0.0,
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round_to_pct(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// The engine's single output value
///
/// Serialization-agnostic: serde derives are provided, but callers own the
/// wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Mood the recommendation was produced for
    pub mood: Mood,
    /// Recommended walk window as `HH:MM–HH:59`, or `"N/A"` for a fallback
    pub recommended_time: String,
    /// Condition commentary plus the rendered diagnosis text
    pub diagnosis: String,
    /// Prescription text
    pub prescription: String,
    /// Expert tip text
    pub experts_recommend: String,
    /// Rounded weather for the chosen hour, zeroed for a fallback
    pub weather: WeatherSnapshot,
    /// Echoed dog name
    pub dog_name: String,
    /// Echoed human name
    pub human_name: String,
    /// Echoed relationship label
    pub human_relationship: String,
}

impl Recommendation {
    /// Whether this is the canned fallback rather than a real window
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.recommended_time == "N/A"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn hour(temp: f64) -> HourlyWeather {
        HourlyWeather {
            timestamp: Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).single().unwrap_or_default(),
            temperature_celsius: temp,
            wind_speed_ms: 3.46,
            rain_probability: 42.6,
            cloud_cover: 55.4,
            uv_index: 2.35,
            description: "scattered clouds".to_owned(),
        }
    }

    #[test]
    fn snapshot_rounds_per_display_rules() {
        let snap = WeatherSnapshot::from_hour(&hour(-7.04));
        assert!((snap.temp - (-7.0)).abs() < 1e-9);
        assert!((snap.wind - 3.5).abs() < 1e-9);
        assert_eq!(snap.rain_probability, 43);
        assert_eq!(snap.cloud_cover, 55);
        assert!((snap.uv_index - 2.4).abs() < 1e-9);
    }

    #[test]
    fn daylight_bounds_are_inclusive() {
        let sunrise = Utc.with_ymd_and_hms(2025, 3, 14, 6, 30, 0).single().unwrap_or_default();
        let sunset = Utc.with_ymd_and_hms(2025, 3, 14, 18, 15, 0).single().unwrap_or_default();
        let sun = SunTimes { sunrise, sunset };

        assert!(sun.is_daylight(sunrise));
        assert!(sun.is_daylight(sunset));
        assert!(!sun.is_daylight(sunrise - chrono::Duration::seconds(1)));
        assert!(!sun.is_daylight(sunset + chrono::Duration::seconds(1)));
    }
}
