// ABOUTME: Window selection: safety filter, scoring, tie-break, fallback, response assembly
// ABOUTME: The one operation the engine exposes to its callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcast Contributors

//! Window selector
//!
//! Orchestrates one selection call: resolve the mood, compute today's
//! ranges, drop unsafe hours, score the survivors, and assemble either a
//! real recommendation or the canned fallback.
//!
//! Ranges are computed over the full batch, before safety filtering: an
//! unsafe outlier hour still anchors what counts as "warmest today"
//! (see DESIGN.md for the tradeoff).

use rand::Rng;

use crate::catalog::Mood;
use crate::config::SelectorConfig;
use crate::constants::commentary::{
    BELOW_ZERO_TEMP_CELSIUS, FROZEN_GROUND_TEMP_CELSIUS, HEAVY_RAIN_PCT, HIGH_WIND_MS,
};
use crate::errors::EngineResult;
use crate::models::{HourlyWeather, Recommendation, ScoredWindow, SunTimes, WeatherSnapshot};
use crate::range::ForecastRanges;
use crate::safety::is_safe;
use crate::scoring::score_hour;

/// Canned diagnoses for when no hour scores acceptably
///
/// Rare with relative scoring, but kept as a safety net.
const FALLBACK_DIAGNOSES: [&str; 4] = [
    "Checked the forecast. Nature is being uncooperative. Try again tomorrow or lower your standards.",
    "Weather is mid. No optimal window detected. Your human will just have to suffer inside.",
    "Nothing meets the criteria. The sky is giving nothing. Literally.",
    "Forecast reviewed. Conditions are aggressively average. Walk at your own risk.",
];

const FALLBACK_PRESCRIPTION: &str =
    "Try again tomorrow. Or just open a window and point at it.";

const FALLBACK_EXPERT_TIP: &str = "Hydration. Rest. Lower expectations.";

/// One selection request
///
/// The identity strings are used only for templating and echoing, never
/// for scoring.
#[derive(Debug, Clone, Copy)]
pub struct WalkRequest<'a> {
    /// Mood key, e.g. `"low_battery"`
    pub mood: &'a str,
    /// Ordered hourly forecast for the day of interest
    pub hours: &'a [HourlyWeather],
    /// Sunrise and sunset for the same day and location
    pub sun: &'a SunTimes,
    /// Dog name, echoed back
    pub dog_name: &'a str,
    /// Human name, substituted into the diagnosis
    pub human_name: &'a str,
    /// Relationship label, e.g. `"roommate"`
    pub relationship: &'a str,
}

/// Picks the best walk window for a mood
#[derive(Debug, Clone, Default)]
pub struct WindowSelector {
    config: SelectorConfig,
}

impl WindowSelector {
    /// Selector with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selector with a custom configuration
    #[must_use]
    pub const fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Pick the best walk window, drawing any fallback message from the
    /// thread-local RNG
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::UnknownMood`] if the mood key is not in
    /// the catalog. No viable window is NOT an error; it produces the
    /// fallback recommendation.
    pub fn select_window(&self, request: &WalkRequest<'_>) -> EngineResult<Recommendation> {
        self.select_window_with_rng(request, &mut rand::thread_rng())
    }

    /// Pick the best walk window with an explicit randomness source
    ///
    /// Everything except the fallback message choice is deterministic, so
    /// tests can pin the full response by seeding `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::UnknownMood`] if the mood key is not in
    /// the catalog.
    pub fn select_window_with_rng<R: Rng + ?Sized>(
        &self,
        request: &WalkRequest<'_>,
        rng: &mut R,
    ) -> EngineResult<Recommendation> {
        let mood: Mood = request.mood.parse()?;

        // Full-batch ranges, shared by every hour scored in this call
        let ranges = ForecastRanges::compute(request.hours);

        let mut scored: Vec<ScoredWindow<'_>> = request
            .hours
            .iter()
            .filter(|hour| is_safe(hour))
            .map(|hour| ScoredWindow {
                hour,
                score: score_hour(mood, hour, request.sun, &ranges),
            })
            .collect();

        // Stable sort: among equal maxima, the earliest forecast hour wins
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        let Some(best) = scored.first() else {
            tracing::warn!(mood = %mood, hours = request.hours.len(), "no safe hours in batch");
            return Ok(self.fallback(mood, request, rng));
        };

        tracing::debug!(
            mood = %mood,
            candidates = scored.len(),
            best_score = best.score,
            "scored walk windows"
        );

        if best.score < self.config.min_viable_score {
            tracing::warn!(mood = %mood, best_score = best.score, "best window below threshold");
            return Ok(self.fallback(mood, request, rng));
        }

        let hour = best.hour;
        let recommended_time = format!(
            "{}\u{2013}{}:59",
            hour.timestamp.format("%H:%M"),
            hour.timestamp.format("%H")
        );
        let commentary = condition_commentary(
            hour.temperature_celsius,
            hour.wind_speed_ms,
            hour.rain_probability,
        );
        let texts = mood
            .definition()
            .render(request.human_name, request.relationship);

        Ok(Recommendation {
            mood,
            recommended_time,
            diagnosis: format!("{commentary}{}", texts.diagnosis),
            prescription: texts.prescription,
            experts_recommend: texts.experts_recommend,
            weather: WeatherSnapshot::from_hour(hour),
            dog_name: request.dog_name.to_owned(),
            human_name: request.human_name.to_owned(),
            human_relationship: request.relationship.to_owned(),
        })
    }

    fn fallback<R: Rng + ?Sized>(
        &self,
        mood: Mood,
        request: &WalkRequest<'_>,
        rng: &mut R,
    ) -> Recommendation {
        let diagnosis = FALLBACK_DIAGNOSES[rng.gen_range(0..FALLBACK_DIAGNOSES.len())];
        Recommendation {
            mood,
            recommended_time: "N/A".to_owned(),
            diagnosis: diagnosis.to_owned(),
            prescription: FALLBACK_PRESCRIPTION.to_owned(),
            experts_recommend: FALLBACK_EXPERT_TIP.to_owned(),
            weather: WeatherSnapshot::zeroed(),
            dog_name: request.dog_name.to_owned(),
            human_name: request.human_name.to_owned(),
            human_relationship: request.relationship.to_owned(),
        }
    }
}

/// Short weather note prepended to the diagnosis for notable conditions
///
/// First match wins; at most one note is ever produced.
#[must_use]
pub fn condition_commentary(temp: f64, wind: f64, rain: f64) -> String {
    if temp < FROZEN_GROUND_TEMP_CELSIUS {
        format!("It is {temp:.0}\u{b0}C outside. Paw-freezing territory. Frozen ground protocol engaged. ")
    } else if temp < BELOW_ZERO_TEMP_CELSIUS {
        format!("Below zero at {temp:.0}\u{b0}C. Bundle them up and go anyway. ")
    } else if wind > HIGH_WIND_MS {
        format!("Wind at {wind:.0} m/s. Hold onto your human. ")
    } else if rain > HEAVY_RAIN_PCT {
        "Heavy rain incoming. Nature's power-wash activated. ".to_owned()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commentary_priority_is_first_match_wins() {
        // Frozen ground outranks wind and rain even when all apply
        let note = condition_commentary(-15.0, 20.0, 90.0);
        assert!(note.contains("Paw-freezing"));

        let note = condition_commentary(-3.0, 20.0, 90.0);
        assert!(note.contains("Below zero"));

        let note = condition_commentary(5.0, 13.0, 90.0);
        assert!(note.contains("Hold onto your human"));

        let note = condition_commentary(5.0, 3.0, 85.0);
        assert!(note.contains("power-wash"));

        assert!(condition_commentary(5.0, 3.0, 20.0).is_empty());
    }

    #[test]
    fn commentary_thresholds_are_exclusive() {
        assert!(condition_commentary(-10.0, 0.0, 0.0).contains("Below zero"));
        assert!(condition_commentary(0.0, 0.0, 0.0).is_empty());
        assert!(condition_commentary(5.0, 12.0, 0.0).is_empty());
        assert!(condition_commentary(5.0, 0.0, 80.0).is_empty());
    }
}
