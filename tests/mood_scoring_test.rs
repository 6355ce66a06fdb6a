// ABOUTME: Unit tests for the seven mood scoring policies
// ABOUTME: Validates policy shapes, determinism, and climate invariance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, TimeZone, Utc};
use pawcast::{score_hour, ForecastRanges, HourlyWeather, Mood, SunTimes};

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 10, hour, 0, 0).unwrap()
}

fn sun_all_day() -> SunTimes {
    SunTimes {
        sunrise: at(4),
        sunset: at(22),
    }
}

fn hour(h: u32, temp: f64, wind: f64, rain: f64, cloud: f64) -> HourlyWeather {
    HourlyWeather {
        timestamp: at(h),
        temperature_celsius: temp,
        wind_speed_ms: wind,
        rain_probability: rain,
        cloud_cover: cloud,
        uv_index: 2.0,
        description: String::new(),
    }
}

/// A mild varied day: temps 8..18, wind 1..6, rain 0..50
fn varied_day() -> Vec<HourlyWeather> {
    (6..20)
        .map(|h| {
            hour(
                h,
                8.0 + f64::from(h - 6) * 0.8,
                1.0 + f64::from(h % 6),
                f64::from((h * 4) % 50),
                f64::from((h * 7) % 100),
            )
        })
        .collect()
}

#[test]
fn scorers_are_deterministic() {
    let hours = varied_day();
    let sun = sun_all_day();
    let ranges = ForecastRanges::compute(&hours);

    for mood in Mood::ALL {
        for h in &hours {
            let first = score_hour(mood, h, &sun, &ranges);
            let second = score_hour(mood, h, &sun, &ranges);
            assert!(
                (first - second).abs() < f64::EPSILON,
                "{mood} scored {first} then {second} for the same hour"
            );
        }
    }
}

#[test]
fn low_battery_requires_daylight() {
    let hours = varied_day();
    let ranges = ForecastRanges::compute(&hours);
    let sun = SunTimes {
        sunrise: at(9),
        sunset: at(17),
    };

    let night = hour(6, 15.0, 2.0, 5.0, 10.0);
    let day = hour(12, 15.0, 2.0, 5.0, 10.0);

    assert!((score_hour(Mood::LowBattery, &night, &sun, &ranges) - 0.0).abs() < f64::EPSILON);
    assert!(score_hour(Mood::LowBattery, &day, &sun, &ranges) > 0.0);

    assert!(
        (score_hour(Mood::PostureEmergency, &night, &sun, &ranges) - 0.0).abs() < f64::EPSILON
    );
}

#[test]
fn doomscroll_night_is_a_soft_penalty_not_an_exclusion() {
    let hours = varied_day();
    let ranges = ForecastRanges::compute(&hours);
    let sun = SunTimes {
        sunrise: at(9),
        sunset: at(17),
    };

    let night = hour(6, 12.0, 2.0, 5.0, 10.0);
    let day = hour(12, 12.0, 2.0, 5.0, 10.0);

    let night_score = score_hour(Mood::DoomscrollDetox, &night, &sun, &ranges);
    let day_score = score_hour(Mood::DoomscrollDetox, &day, &sun, &ranges);

    assert!(night_score > 0.0, "night must be penalized, not excluded");
    assert!((day_score - night_score - 25.0).abs() < 1e-9);

    let burnout_night = score_hour(Mood::BurnoutRecovery, &night, &sun, &ranges);
    let burnout_day = score_hour(Mood::BurnoutRecovery, &day, &sun, &ranges);
    assert!((burnout_day - burnout_night - 20.0).abs() < 1e-9);
}

#[test]
fn low_battery_picks_the_warmest_hour_of_a_freezing_day() {
    // Stockholm in February: -12..-6, all daylight, low wind and rain
    let hours: Vec<HourlyWeather> = (8..16)
        .map(|h| hour(h, -12.0 + f64::from(h - 8) * 0.857, 2.0, 5.0, 20.0))
        .collect();
    let sun = sun_all_day();
    let ranges = ForecastRanges::compute(&hours);

    let best = hours
        .iter()
        .max_by(|a, b| {
            score_hour(Mood::LowBattery, a, &sun, &ranges)
                .total_cmp(&score_hour(Mood::LowBattery, b, &sun, &ranges))
        })
        .unwrap();

    // Warmest slot wins even though it is still -6°C
    assert_eq!(best.timestamp, at(15));
}

#[test]
fn climate_invariance_shifting_temps_keeps_the_same_pick() {
    let sun = sun_all_day();

    for mood in [Mood::LowBattery, Mood::CharacterDevelopment] {
        let base = varied_day();
        let shifted: Vec<HourlyWeather> = base
            .iter()
            .cloned()
            .map(|mut h| {
                h.temperature_celsius -= 40.0;
                h
            })
            .collect();

        let base_ranges = ForecastRanges::compute(&base);
        let shifted_ranges = ForecastRanges::compute(&shifted);

        let pick = |hours: &[HourlyWeather], ranges: &ForecastRanges| {
            hours
                .iter()
                .max_by(|a, b| {
                    score_hour(mood, a, &sun, ranges).total_cmp(&score_hour(mood, b, &sun, ranges))
                })
                .unwrap()
                .timestamp
        };

        assert_eq!(
            pick(&base, &base_ranges),
            pick(&shifted, &shifted_ranges),
            "{mood} changed its pick under a constant temperature offset"
        );
    }
}

#[test]
fn burnout_recovery_can_exceed_one_hundred_but_not_the_ceiling() {
    // Sweet-spot temperature, gentle breeze, dry, soothing partial cloud
    let hours: Vec<HourlyWeather> = vec![
        hour(10, 10.0, 0.0, 0.0, 50.0),
        hour(11, 11.0, 2.0, 0.0, 50.0),
        hour(12, 16.0, 8.0, 40.0, 50.0),
    ];
    let sun = sun_all_day();
    let ranges = ForecastRanges::compute(&hours);

    // 0.35 of 10..16 is 12.1; hour at 11°C sits close to the sweet spot
    let score = score_hour(Mood::BurnoutRecovery, &hours[1], &sun, &ranges);
    assert!(score > 100.0, "partial-cloud bonus should push past 100, got {score}");
    assert!(score <= 110.0);
}

#[test]
fn long_term_health_penalizes_extreme_uv() {
    let hours = varied_day();
    let sun = sun_all_day();
    let ranges = ForecastRanges::compute(&hours);

    let mut mild = hour(12, 13.0, 2.0, 10.0, 30.0);
    mild.uv_index = 5.0;
    let mut harsh = mild.clone();
    harsh.uv_index = 7.5;

    let mild_score = score_hour(Mood::LongTermHealth, &mild, &sun, &ranges);
    let harsh_score = score_hour(Mood::LongTermHealth, &harsh, &sun, &ranges);
    assert!((mild_score - harsh_score - 20.0).abs() < 1e-9);
}

#[test]
fn hygiene_intervention_chases_the_wettest_hour() {
    let hours: Vec<HourlyWeather> = vec![
        hour(9, 14.0, 2.0, 5.0, 20.0),
        hour(10, 15.0, 2.0, 60.0, 80.0),
        hour(11, 16.0, 2.0, 30.0, 50.0),
    ];
    let sun = sun_all_day();
    let ranges = ForecastRanges::compute(&hours);

    let scores: Vec<f64> = hours
        .iter()
        .map(|h| score_hour(Mood::HygieneIntervention, h, &sun, &ranges))
        .collect();

    assert!(scores[1] > scores[0]);
    assert!(scores[1] > scores[2]);
}

#[test]
fn hygiene_intervention_starts_from_zero_in_a_bone_dry_hour() {
    // Driest, clearest, calmest hour of the day earns nothing
    let hours: Vec<HourlyWeather> = vec![
        hour(9, 14.0, 0.0, 0.0, 0.0),
        hour(10, 15.0, 6.0, 80.0, 100.0),
    ];
    let sun = sun_all_day();
    let ranges = ForecastRanges::compute(&hours);

    let dry = score_hour(Mood::HygieneIntervention, &hours[0], &sun, &ranges);
    assert!((dry - 0.0).abs() < f64::EPSILON);
}

#[test]
fn character_development_prefers_the_nastiest_safe_hour() {
    let hours: Vec<HourlyWeather> = vec![
        hour(9, 2.0, 10.0, 70.0, 90.0),
        hour(10, 12.0, 1.0, 5.0, 10.0),
    ];
    let sun = sun_all_day();
    let ranges = ForecastRanges::compute(&hours);

    let nasty = score_hour(Mood::CharacterDevelopment, &hours[0], &sun, &ranges);
    let pleasant = score_hour(Mood::CharacterDevelopment, &hours[1], &sun, &ranges);
    assert!(nasty > pleasant);
}

#[test]
fn baseline_zero_moods_ignore_the_safety_filter_only_via_exclusion() {
    // An unsafe hour scores exactly zero for the two build-up moods even
    // though its raw ingredients would score high
    let hours: Vec<HourlyWeather> = vec![
        hour(9, 2.0, 20.0, 90.0, 100.0),
        hour(10, 12.0, 1.0, 5.0, 10.0),
    ];
    let sun = sun_all_day();
    let ranges = ForecastRanges::compute(&hours);

    for mood in [Mood::HygieneIntervention, Mood::CharacterDevelopment] {
        let score = score_hour(mood, &hours[0], &sun, &ranges);
        assert!((score - 0.0).abs() < f64::EPSILON, "{mood} scored unsafe hour {score}");
    }
}
