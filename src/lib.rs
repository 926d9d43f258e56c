//! Public-facing crate root: re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

use std::io::Write;

pub use core::{
    bounds::Scale,
    color::Color,
    config::{GlyphKind, LabelAlign, RenderConfig},
    constants::{DEFAULT_WIDTH, MIN_WIDTH},
    dataset::{Block, IntoBlock, LabelSet},
    error::{ConfigError, GanttError, IntervalError},
    interval::{Bounds, Interval, IntervalSet},
    label::{
        AffixLabel, DecimalNumber, LabelGenerator, LatinLetter, LetterCase, ReverseLabel,
        RomanNumber,
    },
};

pub use render::{Chart, Matrix, Style, Token, Viewer, Writer, render_lines};

/// Render `set` into `sink` in one go; returns the bytes written.
///
/// # Errors
/// I/O errors from `sink`.
pub fn render_to<W: Write>(
    sink: W,
    set: &LabelSet,
    config: &RenderConfig,
    ansi: bool,
) -> Result<usize, GanttError> {
    let writer = if ansi {
        Writer::ansi(sink)
    } else {
        Writer::plain(sink)
    };
    Chart::new(config.clone(), writer).display(set)
}
