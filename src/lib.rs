// ABOUTME: Mood-aware walk-window recommendation engine
// ABOUTME: Pure scoring core; weather fetching, geocoding, and HTTP live in collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcast Contributors

#![deny(unsafe_code)]

//! # Pawcast
//!
//! Recommends the best (or, for one mood, worst) hour to walk a dog, given
//! an hourly weather forecast and a user-selected mood encoding the human's
//! current state.
//!
//! All scoring is relative to today's forecast range, not absolute values,
//! so the engine behaves sensibly in any climate: the warmest hour of a
//! −12 °C Stockholm day is as valid a pick as the coolest hour of an
//! August heat wave. Absolute thresholds exist only as hard safety limits.
//!
//! The crate is pure computation: no I/O, no shared mutable state, no
//! async. Fetching the forecast, geocoding, and persistence belong to the
//! caller and must complete before the engine is invoked.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use pawcast::{HourlyWeather, SunTimes, WalkRequest, WindowSelector};
//!
//! let hours: Vec<HourlyWeather> = (8..18)
//!     .map(|h| HourlyWeather {
//!         timestamp: Utc.with_ymd_and_hms(2025, 2, 3, h, 0, 0).unwrap(),
//!         temperature_celsius: -12.0 + f64::from(h) * 0.5,
//!         wind_speed_ms: 2.0,
//!         rain_probability: 5.0,
//!         cloud_cover: 20.0,
//!         uv_index: 1.0,
//!         description: "clear sky".to_owned(),
//!     })
//!     .collect();
//! let sun = SunTimes {
//!     sunrise: Utc.with_ymd_and_hms(2025, 2, 3, 7, 30, 0).unwrap(),
//!     sunset: Utc.with_ymd_and_hms(2025, 2, 3, 16, 45, 0).unwrap(),
//! };
//!
//! let selector = WindowSelector::new();
//! let rec = selector
//!     .select_window(&WalkRequest {
//!         mood: "low_battery",
//!         hours: &hours,
//!         sun: &sun,
//!         dog_name: "Biscuit",
//!         human_name: "Alex",
//!         relationship: "roommate",
//!     })
//!     .unwrap();
//! assert!(!rec.is_fallback());
//! ```

/// Closed mood catalog: the `Mood` enum and its templated texts
pub mod catalog;

/// Selector configuration with documented defaults
pub mod config;

/// Scoring weights, safety limits, and selection thresholds
pub mod constants;

/// Engine error types
pub mod errors;

/// Forecast, sun-time, and recommendation data models
pub mod models;

/// Range-relative normalization over one forecast batch
pub mod range;

/// Absolute safety filter
pub mod safety;

/// The seven per-mood scoring policies
pub mod scoring;

/// Window selection and response assembly
pub mod selector;

pub use catalog::{Mood, MoodDefinition, RenderedTexts};
pub use config::SelectorConfig;
pub use errors::{EngineError, EngineResult};
pub use models::{HourlyWeather, Recommendation, ScoredWindow, SunTimes, WeatherSnapshot};
pub use range::{ForecastRanges, MetricRange};
pub use safety::is_safe;
pub use scoring::score_hour;
pub use selector::{condition_commentary, WalkRequest, WindowSelector};
