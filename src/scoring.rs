// ABOUTME: The seven per-mood scoring policies behind one exhaustive dispatch
// ABOUTME: Pure functions from (hour, sun times, batch ranges) to a suitability score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcast Contributors

//! Mood scorers
//!
//! Each mood rates every candidate hour; the selector keeps the highest.
//! Scores are built from range-relative positions (see [`crate::range`]),
//! so a policy like "warmest available" holds in any climate. The common
//! baseline is 0–100; `burnout_recovery` alone may reach 110 through its
//! partial-cloud bonus.
//!
//! Scorers are pure and deterministic: identical inputs always produce
//! identical scores.

use crate::catalog::Mood;
use crate::constants::mood_weights::{
    burnout_recovery, character_development, doomscroll_detox, hygiene_intervention, low_battery,
    long_term_health, posture_emergency, COMFORT_BASELINE,
};
use crate::models::{HourlyWeather, SunTimes};
use crate::range::ForecastRanges;
use crate::safety::is_safe;

/// Score one forecast hour for the given mood
///
/// Dispatch is an exhaustive match over [`Mood`], so every catalog entry is
/// guaranteed a scorer at compile time.
#[must_use]
pub fn score_hour(mood: Mood, hour: &HourlyWeather, sun: &SunTimes, ranges: &ForecastRanges) -> f64 {
    match mood {
        Mood::LowBattery => score_low_battery(hour, sun, ranges),
        Mood::PostureEmergency => score_posture_emergency(hour, sun, ranges),
        Mood::DoomscrollDetox => score_doomscroll_detox(hour, sun, ranges),
        Mood::BurnoutRecovery => score_burnout_recovery(hour, sun, ranges),
        Mood::LongTermHealth => score_long_term_health(hour, ranges),
        Mood::HygieneIntervention => score_hygiene_intervention(hour, ranges),
        Mood::CharacterDevelopment => score_character_development(hour, ranges),
    }
}

/// Fraction of the sky covered, clamped to `[0, 1]`
fn cloud_fraction(hour: &HourlyWeather) -> f64 {
    (hour.cloud_cover / 100.0).clamp(0.0, 1.0)
}

/// Maximize sunlight, warmest part of day, low wind, no rain.
///
/// Picks the warmest, brightest, calmest window available today. Works at
/// −12 °C: the warmest hour of a cold day is still the right call.
fn score_low_battery(hour: &HourlyWeather, sun: &SunTimes, ranges: &ForecastRanges) -> f64 {
    if !sun.is_daylight(hour.timestamp) {
        // Must be daylight: sunlight is the whole point
        return 0.0;
    }

    let mut score = COMFORT_BASELINE;

    score += ranges.temperature.position(hour.temperature_celsius) * low_battery::WARMTH_BONUS;
    score -= ranges.rain.position(hour.rain_probability) * low_battery::RAIN_PENALTY;
    score -= ranges.wind.position(hour.wind_speed_ms) * low_battery::WIND_PENALTY;

    if hour.cloud_cover < low_battery::CLEAR_CLOUD_PCT {
        score += low_battery::CLEAR_SKY_BONUS;
    } else if hour.cloud_cover > low_battery::OVERCAST_CLOUD_PCT {
        score -= low_battery::OVERCAST_PENALTY;
    }

    score.max(0.0)
}

/// Clear visibility, crisp air, no rain, daylight only.
fn score_posture_emergency(hour: &HourlyWeather, sun: &SunTimes, ranges: &ForecastRanges) -> f64 {
    if !sun.is_daylight(hour.timestamp) {
        return 0.0;
    }

    let mut score = COMFORT_BASELINE;

    let temp_pos = ranges.temperature.position(hour.temperature_celsius);
    score -= (temp_pos - posture_emergency::TEMP_SWEET_SPOT).abs()
        * posture_emergency::TEMP_DEVIATION_PENALTY;
    score -= ranges.rain.position(hour.rain_probability) * posture_emergency::RAIN_PENALTY;
    score -= ranges.wind.position(hour.wind_speed_ms) * posture_emergency::WIND_PENALTY;

    score.max(0.0)
}

/// Calm, sensory-rich, daylight preferred but not required.
///
/// Light rain is fine (adds sensory interest); heavy rain kills phone use
/// anyway, so only the wet end of the range is penalized.
fn score_doomscroll_detox(hour: &HourlyWeather, sun: &SunTimes, ranges: &ForecastRanges) -> f64 {
    let mut score = COMFORT_BASELINE;

    if !sun.is_daylight(hour.timestamp) {
        score -= doomscroll_detox::NIGHT_PENALTY;
    }

    let temp_pos = ranges.temperature.position(hour.temperature_celsius);
    score -= (temp_pos - doomscroll_detox::TEMP_SWEET_SPOT).abs()
        * doomscroll_detox::TEMP_DEVIATION_PENALTY;

    let rain_pos = ranges.rain.position(hour.rain_probability);
    if rain_pos > doomscroll_detox::HEAVY_RAIN_POSITION {
        score -= (rain_pos - doomscroll_detox::HEAVY_RAIN_POSITION)
            * doomscroll_detox::HEAVY_RAIN_PENALTY;
    }

    score -= ranges.wind.position(hour.wind_speed_ms) * doomscroll_detox::WIND_PENALTY;

    score.max(0.0)
}

/// Low stimulation, soft light, gentle breeze, no extremes.
///
/// Overcast is preferred: harsh sun overstimulates a fried brain. The
/// partial-cloud bonus can push the score past 100, hence the 110 ceiling.
fn score_burnout_recovery(hour: &HourlyWeather, sun: &SunTimes, ranges: &ForecastRanges) -> f64 {
    let mut score = COMFORT_BASELINE;

    if !sun.is_daylight(hour.timestamp) {
        score -= burnout_recovery::NIGHT_PENALTY;
    }

    let temp_pos = ranges.temperature.position(hour.temperature_celsius);
    score -= (temp_pos - burnout_recovery::TEMP_SWEET_SPOT).abs()
        * burnout_recovery::TEMP_DEVIATION_PENALTY;

    let wind_pos = ranges.wind.position(hour.wind_speed_ms);
    if wind_pos < burnout_recovery::DEAD_CALM_POSITION {
        score -= burnout_recovery::DEAD_CALM_PENALTY;
    } else if wind_pos > burnout_recovery::WILD_WIND_POSITION {
        score -= burnout_recovery::WILD_WIND_PENALTY;
    }

    score -= ranges.rain.position(hour.rain_probability) * burnout_recovery::RAIN_PENALTY;

    if hour.cloud_cover >= burnout_recovery::SOFT_CLOUD_MIN_PCT
        && hour.cloud_cover <= burnout_recovery::SOFT_CLOUD_MAX_PCT
    {
        score += burnout_recovery::SOFT_CLOUD_BONUS;
    }

    score.clamp(0.0, burnout_recovery::SCORE_CEILING)
}

/// Stable, moderate, sustainable; manageable UV.
///
/// The UV check is the only absolute cutoff outside the safety filter:
/// an index above 7 is harmful whatever today's range looks like.
fn score_long_term_health(hour: &HourlyWeather, ranges: &ForecastRanges) -> f64 {
    let mut score = COMFORT_BASELINE;

    let temp_pos = ranges.temperature.position(hour.temperature_celsius);
    score -= (temp_pos - long_term_health::TEMP_SWEET_SPOT).abs()
        * long_term_health::TEMP_DEVIATION_PENALTY;
    score -= ranges.wind.position(hour.wind_speed_ms) * long_term_health::WIND_PENALTY;
    score -= ranges.rain.position(hour.rain_probability) * long_term_health::RAIN_PENALTY;

    if hour.uv_index > long_term_health::HARMFUL_UV_INDEX {
        score -= long_term_health::UV_PENALTY;
    }

    score.max(0.0)
}

/// Needs rain or high humidity: picks the wettest window of the day.
///
/// Works in summer rain or Swedish drizzle; the wettest available hour is
/// the answer. Builds up from 0 rather than down from the comfort baseline.
fn score_hygiene_intervention(hour: &HourlyWeather, ranges: &ForecastRanges) -> f64 {
    if !is_safe(hour) {
        // Not even for hygiene reasons
        return 0.0;
    }

    let mut score = 0.0;

    score += ranges.rain.position(hour.rain_probability) * hygiene_intervention::RAIN_BONUS;
    score += cloud_fraction(hour) * hygiene_intervention::CLOUD_BONUS;

    let wind_pos = ranges.wind.position(hour.wind_speed_ms);
    if wind_pos > hygiene_intervention::BREEZE_MIN_POSITION
        && wind_pos < hygiene_intervention::BREEZE_MAX_POSITION
    {
        score += hygiene_intervention::BREEZE_BONUS;
    }

    score.clamp(0.0, 100.0)
}

/// The most challenging but safe window: windiest, coldest, wettest.
///
/// The one "worst-window" mood. In −12 °C Stockholm this still picks the
/// worst of a bad day, as intended.
fn score_character_development(hour: &HourlyWeather, ranges: &ForecastRanges) -> f64 {
    if !is_safe(hour) {
        return 0.0;
    }

    let mut score = 0.0;

    score += ranges.wind.position(hour.wind_speed_ms) * character_development::WIND_BONUS;
    // Colder scores higher: invert the temperature position
    score += (1.0 - ranges.temperature.position(hour.temperature_celsius))
        * character_development::COLD_BONUS;
    score += ranges.rain.position(hour.rain_probability) * character_development::RAIN_BONUS;
    score += cloud_fraction(hour) * character_development::CLOUD_BONUS;

    score.clamp(0.0, 100.0)
}
