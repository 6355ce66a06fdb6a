// ABOUTME: Error types for the walk-window engine
// ABOUTME: Distinguishes caller errors from the in-band fallback path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcast Contributors

//! Engine error handling
//!
//! The engine is pure computation, so the error surface is small: the only
//! failure mode is invalid caller input. "No viable window" is NOT an error —
//! it routes to the fallback recommendation instead.

/// Result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the walk-window engine
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The requested mood key does not exist in the catalog
    #[error("Unknown mood '{mood}'. Valid moods: {valid_moods}")]
    UnknownMood {
        /// Mood key supplied by the caller
        mood: String,
        /// Comma-separated list of valid mood keys
        valid_moods: String,
    },
}
