// ABOUTME: Scoring weights, safety limits, and selection thresholds for the walk engine
// ABOUTME: Single home for every tuned number so scorer policies stay auditable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcast Contributors

//! Engine constants organized by domain
//!
//! Everything in the engine that is an absolute number lives here. The
//! safety limits are the only climate-independent cutoffs in the system
//! (plus the UV limit under `mood_weights::long_term_health`); every other
//! value is a weight applied to a range-relative position.

/// Hard safety cutoffs, independent of mood and forecast range
///
/// Hours violating any of these are excluded from scoring outright,
/// never merely penalized.
pub mod safety_limits {
    /// Gale-force wind. Unsafe regardless of mood (m/s, exclusive bound).
    pub const UNSAFE_WIND_MS: f64 = 18.0;

    /// Essentially a storm (% probability, exclusive bound).
    pub const UNSAFE_RAIN_PCT: f64 = 95.0;

    /// Extreme cold safety limit (°C, exclusive bound).
    pub const UNSAFE_TEMP_MIN_CELSIUS: f64 = -30.0;
}

/// Window selection thresholds
pub mod selection {
    /// Minimum best-hour score for a real recommendation.
    ///
    /// Kept low because relative scoring always produces some spread;
    /// anything below this routes to the fallback response.
    pub const MIN_VIABLE_SCORE: f64 = 10.0;
}

/// Thresholds for the condition commentary prefixed to the diagnosis
pub mod commentary {
    /// Below this, the frozen-ground note is used (°C).
    pub const FROZEN_GROUND_TEMP_CELSIUS: f64 = -10.0;

    /// Below this, the below-zero note is used (°C).
    pub const BELOW_ZERO_TEMP_CELSIUS: f64 = 0.0;

    /// Above this, the high-wind note is used (m/s).
    pub const HIGH_WIND_MS: f64 = 12.0;

    /// Above this, the heavy-rain note is used (% probability).
    pub const HEAVY_RAIN_PCT: f64 = 80.0;
}

/// Per-mood scoring weights
///
/// Positions referenced here are range-relative: 0.0 is today's
/// coldest/calmest/driest hour, 1.0 the warmest/windiest/wettest.
pub mod mood_weights {
    /// Common baseline the comfort-seeking moods start from.
    pub const COMFORT_BASELINE: f64 = 100.0;

    /// Low Battery Human: warmest, brightest, calmest window of the day.
    pub mod low_battery {
        /// Bonus at the warmest end of today's range.
        pub const WARMTH_BONUS: f64 = 25.0;
        /// Penalty at the wettest end — rain blocks UV.
        pub const RAIN_PENALTY: f64 = 35.0;
        /// Penalty at the windiest end — gentle walk required.
        pub const WIND_PENALTY: f64 = 20.0;
        /// Cloud cover below this counts as clear sky (%).
        pub const CLEAR_CLOUD_PCT: f64 = 30.0;
        /// Bonus for clear sky.
        pub const CLEAR_SKY_BONUS: f64 = 15.0;
        /// Cloud cover above this counts as overcast (%).
        pub const OVERCAST_CLOUD_PCT: f64 = 80.0;
        /// Penalty for overcast sky.
        pub const OVERCAST_PENALTY: f64 = 15.0;
    }

    /// Posture Emergency: crisp, dry, comfortable daylight.
    pub mod posture_emergency {
        /// Sweet spot at the 60th percentile of today's temperature range.
        pub const TEMP_SWEET_SPOT: f64 = 0.6;
        /// Penalty per unit of distance from the sweet spot.
        pub const TEMP_DEVIATION_PENALTY: f64 = 30.0;
        /// Spine rehabilitation requires dignity.
        pub const RAIN_PENALTY: f64 = 40.0;
        /// Moderate wind is fine, strong wind is not.
        pub const WIND_PENALTY: f64 = 20.0;
    }

    /// Doomscroll Detox: calm, sensory-rich, daylight preferred.
    pub mod doomscroll_detox {
        /// Soft penalty outside daylight (not an exclusion).
        pub const NIGHT_PENALTY: f64 = 25.0;
        /// Sweet spot at the middle of today's temperature range.
        pub const TEMP_SWEET_SPOT: f64 = 0.5;
        /// Penalty per unit of distance from the sweet spot.
        pub const TEMP_DEVIATION_PENALTY: f64 = 25.0;
        /// Rain position above which rain starts to count as heavy.
        pub const HEAVY_RAIN_POSITION: f64 = 0.7;
        /// Penalty per unit of rain position beyond the heavy mark.
        pub const HEAVY_RAIN_PENALTY: f64 = 40.0;
        /// Calm wind helps.
        pub const WIND_PENALTY: f64 = 20.0;
    }

    /// Burnout Recovery: low stimulation, soft light, gentle breeze.
    pub mod burnout_recovery {
        /// Soft penalty outside daylight — dusk is fine for decompression.
        pub const NIGHT_PENALTY: f64 = 20.0;
        /// Sweet spot on the cooler side of today's range.
        pub const TEMP_SWEET_SPOT: f64 = 0.35;
        /// Penalty per unit of distance from the sweet spot.
        pub const TEMP_DEVIATION_PENALTY: f64 = 25.0;
        /// Wind position below this feels dead.
        pub const DEAD_CALM_POSITION: f64 = 0.1;
        /// Penalty for dead-calm air.
        pub const DEAD_CALM_PENALTY: f64 = 10.0;
        /// Wind position above this is stressful.
        pub const WILD_WIND_POSITION: f64 = 0.7;
        /// Penalty for wild wind.
        pub const WILD_WIND_PENALTY: f64 = 25.0;
        /// No heavy rain.
        pub const RAIN_PENALTY: f64 = 25.0;
        /// Lower bound of the soothing partial-cloud band (%).
        pub const SOFT_CLOUD_MIN_PCT: f64 = 30.0;
        /// Upper bound of the soothing partial-cloud band (%).
        pub const SOFT_CLOUD_MAX_PCT: f64 = 75.0;
        /// Bonus inside the partial-cloud band.
        pub const SOFT_CLOUD_BONUS: f64 = 12.0;
        /// This mood alone may exceed the common 100-point ceiling.
        pub const SCORE_CEILING: f64 = 110.0;
    }

    /// Long Term Health Investment: stable, moderate, sustainable.
    pub mod long_term_health {
        /// Sweet spot just below the middle of today's range.
        pub const TEMP_SWEET_SPOT: f64 = 0.45;
        /// Penalty per unit of distance from the sweet spot.
        pub const TEMP_DEVIATION_PENALTY: f64 = 30.0;
        /// Strong wind makes sustained walking harder.
        pub const WIND_PENALTY: f64 = 20.0;
        /// Prefer dry.
        pub const RAIN_PENALTY: f64 = 30.0;
        /// UV index above this is genuinely harmful (absolute threshold).
        pub const HARMFUL_UV_INDEX: f64 = 7.0;
        /// Penalty for harmful UV.
        pub const UV_PENALTY: f64 = 20.0;
    }

    /// Natural Hygiene Intervention: the wettest window of the day.
    pub mod hygiene_intervention {
        /// Bonus at the wettest end of today's range — the whole point.
        pub const RAIN_BONUS: f64 = 60.0;
        /// High cloud cover suggests humidity even without direct rain.
        pub const CLOUD_BONUS: f64 = 20.0;
        /// Lower bound of the moisture-distributing breeze band.
        pub const BREEZE_MIN_POSITION: f64 = 0.2;
        /// Upper bound of the moisture-distributing breeze band.
        pub const BREEZE_MAX_POSITION: f64 = 0.6;
        /// Bonus inside the breeze band.
        pub const BREEZE_BONUS: f64 = 10.0;
    }

    /// Character Development Arc: the most challenging but safe window.
    pub mod character_development {
        /// Bonus at the windiest end of today's range.
        pub const WIND_BONUS: f64 = 35.0;
        /// Bonus at the coldest end of today's range.
        pub const COLD_BONUS: f64 = 30.0;
        /// Some rain adds to the challenge.
        pub const RAIN_BONUS: f64 = 25.0;
        /// Overcast is bleaker.
        pub const CLOUD_BONUS: f64 = 10.0;
    }
}
