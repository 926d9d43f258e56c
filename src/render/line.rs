//! Token rows to display lines.
//!
//! A line is `margin + padded label + gap + one glyph per column`, wrapped
//! whole in the row's colour marker.

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::{
    core::{
        config::{LabelAlign, RenderConfig},
        dataset::LabelSet,
        error::GanttError,
    },
    render::{
        matrix::{Matrix, Token},
        writer::Writer,
    },
};

/// Pad `label` to `width` display columns.
///
/// Centred labels put the odd column on the right.
#[must_use]
pub fn pad_label(label: &str, width: usize, align: LabelAlign) -> String {
    let fill = width.saturating_sub(label.width());
    let (left, right) = match align {
        LabelAlign::Left => (0, fill),
        LabelAlign::Right => (fill, 0),
        LabelAlign::Center => (fill / 2, fill - fill / 2),
    };
    let mut out = String::with_capacity(label.len() + fill);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(label);
    out.extend(std::iter::repeat_n(' ', right));
    out
}

/// Glyph string for one row.
#[must_use]
pub fn render_row(row: &[Token], config: &RenderConfig) -> String {
    row.iter()
        .map(|t| config.glyph(t.glyph_kind()))
        .collect()
}

/// Uncoloured lines, row 0 first, without the left margin.
#[must_use]
pub fn render_lines(matrix: &Matrix, config: &RenderConfig) -> Vec<String> {
    let label_width = matrix.label_width();
    let gap = " ".repeat(config.gap_size());
    matrix
        .rows()
        .iter()
        .map(|(label, row)| {
            let mut line = pad_label(label, label_width, config.label_align());
            line.push_str(&gap);
            line.push_str(&render_row(row, config));
            line
        })
        .collect()
}

/// Renders label sets through a [`Writer`].
pub struct Chart<W: Write> {
    config: RenderConfig,
    writer: Writer<W>,
}

impl<W: Write> Chart<W> {
    #[must_use]
    pub fn new(config: RenderConfig, writer: Writer<W>) -> Self {
        Self { config, writer }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn with_config(self, config: RenderConfig) -> Self {
        Self { config, ..self }
    }

    #[inline]
    pub fn writer(&self) -> &Writer<W> {
        &self.writer
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Marked (not yet escaped) lines for `set`, one per row.
    #[must_use]
    pub fn lines(&self, set: &LabelSet) -> Vec<String> {
        let matrix = Matrix::build(set, self.config.width());
        let margin = " ".repeat(self.config.left_margin_size());
        render_lines(&matrix, &self.config)
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let color = self.config.color_for_row(i);
                self.writer.colorize(&format!("{margin}{line}"), color)
            })
            .collect()
    }

    /// Write every row of `set`; returns the bytes written (0 when empty).
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    pub fn display(&mut self, set: &LabelSet) -> Result<usize, GanttError> {
        let mut bytes = 0;
        for line in self.lines(set) {
            bytes += self.writer.write_line(&line)?;
        }
        tracing::debug!(rows = set.len(), bytes, "chart written");
        Ok(bytes)
    }
}
