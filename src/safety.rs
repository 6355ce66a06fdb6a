// ABOUTME: Absolute safety filter excluding dangerous forecast hours
// ABOUTME: The only climate-independent cutoffs applied before any scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcast Contributors

//! Safety filter
//!
//! Hard absolute limits, independent of mood and of today's forecast range.
//! An hour failing any of these is excluded from scoring entirely, never
//! merely penalized.

use crate::constants::safety_limits::{UNSAFE_RAIN_PCT, UNSAFE_TEMP_MIN_CELSIUS, UNSAFE_WIND_MS};
use crate::models::HourlyWeather;

/// Whether this hour is safe to walk regardless of mood
#[must_use]
pub fn is_safe(hour: &HourlyWeather) -> bool {
    hour.wind_speed_ms < UNSAFE_WIND_MS
        && hour.rain_probability < UNSAFE_RAIN_PCT
        && hour.temperature_celsius > UNSAFE_TEMP_MIN_CELSIUS
}
