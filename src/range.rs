// ABOUTME: Range-relative normalization over one forecast batch
// ABOUTME: Maps absolute metric values to 0-1 positions within today's observed spread
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcast Contributors

//! Range normalizer
//!
//! All mood scoring is relative to today's forecast range, not absolute
//! values, which makes the engine climate-independent:
//!
//! - Stockholm in February (−12 °C to −6 °C): "warmest" = −6 °C, still valid
//! - Barcelona in August (28 °C to 36 °C): "coolest" = 28 °C, still valid
//!
//! Ranges are computed once per selection call and shared by every scored
//! hour; recomputing per hour would let hours in the same batch disagree on
//! what "warmest today" means.

use std::cmp::Ordering;

use crate::models::HourlyWeather;

/// Observed `[lo, hi]` bounds of one metric across a forecast batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRange {
    /// Smallest observed value
    pub lo: f64,
    /// Largest observed value
    pub hi: f64,
}

impl MetricRange {
    /// Range with explicit bounds
    #[must_use]
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Observed bounds of the given values; `[0, 0]` when empty
    #[must_use]
    pub fn of(values: impl Iterator<Item = f64>) -> Self {
        let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if lo > hi {
            // Empty input. The selector never scores an empty batch, but
            // the range itself stays well-defined.
            return Self::new(0.0, 0.0);
        }
        Self::new(lo, hi)
    }

    /// Where `value` sits in this range, clamped to `[0.0, 1.0]`
    ///
    /// 0.0 is the coldest/calmest/driest end, 1.0 the warmest/windiest/
    /// wettest. A flat range (all hours identical) yields exactly 0.5, the
    /// neutral midpoint, rather than a division fault.
    #[must_use]
    pub fn position(&self, value: f64) -> f64 {
        if self.hi.total_cmp(&self.lo) == Ordering::Equal {
            return 0.5;
        }
        ((value - self.lo) / (self.hi - self.lo)).clamp(0.0, 1.0)
    }
}

/// Per-metric ranges for one forecast batch, computed once per selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastRanges {
    /// Temperature bounds in °C
    pub temperature: MetricRange,
    /// Wind speed bounds in m/s
    pub wind: MetricRange,
    /// Rain probability bounds in %
    pub rain: MetricRange,
}

impl ForecastRanges {
    /// Compute all three metric ranges over the batch
    #[must_use]
    pub fn compute(hours: &[HourlyWeather]) -> Self {
        Self {
            temperature: MetricRange::of(hours.iter().map(|h| h.temperature_celsius)),
            wind: MetricRange::of(hours.iter().map(|h| h.wind_speed_ms)),
            rain: MetricRange::of(hours.iter().map(|h| h.rain_probability)),
        }
    }
}
