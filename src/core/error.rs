//! Centralised error types used across the crate.

use std::io;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::core::config::GlyphKind;

/// Precise configuration faults.
///
/// Only glyph settings can fail; numeric settings clamp or fall back instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the {kind} glyph must be a single character, got `{value}`")]
    InvalidGlyph { kind: GlyphKind, value: String },
    #[error("the given string `{0}` is not a valid unicode escape")]
    InvalidUnicodeEscape(String),
}

impl ConfigError {
    /// Both variants reject a glyph; callers rarely care which one.
    #[must_use]
    pub fn is_invalid_glyph(&self) -> bool {
        matches!(
            self,
            Self::InvalidGlyph { .. } | Self::InvalidUnicodeEscape(_)
        )
    }
}

/// Faults raised by the interval collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("interval end {end} must not precede its start {start}")]
    Inverted {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum GanttError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Interval(#[from] IntervalError),
    #[error("invalid span `{0}`, expected something like `[0,14)`")]
    InvalidSpan(String),
    #[error("the diff view takes exactly two spans, got {0}")]
    DiffArity(usize),
}
