// ABOUTME: Selector configuration with documented defaults
// ABOUTME: Lets callers tune the fallback threshold without touching scorer weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcast Contributors

//! Selector configuration
//!
//! Scorer weights are fixed policy and live in [`crate::constants`]; the
//! config covers the one knob a deployment may reasonably want to turn.

use serde::{Deserialize, Serialize};

use crate::constants::selection::MIN_VIABLE_SCORE;

/// Configuration for the window selector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Minimum best-hour score for a real recommendation; anything below
    /// routes to the fallback response
    pub min_viable_score: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_viable_score: MIN_VIABLE_SCORE,
        }
    }
}
