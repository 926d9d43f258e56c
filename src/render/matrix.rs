//! Labelled rows to a token grid.
//!
//! ### Workflow
//! 1. The combined boundaries of the set define the time axis; no boundaries
//!    means nothing to draw and an empty matrix.
//! 2. A [`Scale`] maps every interval to a half-open column range.
//! 3. Each interval paints BODY over its range, then its start and end
//!    tokens. Later intervals overwrite earlier ones on the same row, and on
//!    a one-column interval the end token wins.

use unicode_width::UnicodeWidthStr;

use crate::core::{bounds::Scale, config::GlyphKind, dataset::LabelSet, interval::Interval};

/// State of one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Token {
    #[default]
    Space,
    Body,
    StartIncluded,
    StartExcluded,
    EndIncluded,
    EndExcluded,
}

impl Token {
    /// The glyph slot this token is drawn with.
    #[inline]
    #[must_use]
    pub const fn glyph_kind(self) -> GlyphKind {
        match self {
            Self::Space => GlyphKind::Space,
            Self::Body => GlyphKind::Body,
            Self::StartIncluded => GlyphKind::StartIncluded,
            Self::StartExcluded => GlyphKind::StartExcluded,
            Self::EndIncluded => GlyphKind::EndIncluded,
            Self::EndExcluded => GlyphKind::EndExcluded,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_start(self) -> bool {
        matches!(self, Self::StartIncluded | Self::StartExcluded)
    }

    #[inline]
    #[must_use]
    pub const fn is_end(self) -> bool {
        matches!(self, Self::EndIncluded | Self::EndExcluded)
    }
}

/// One labelled row of tokens, `width` cells long.
pub type Row = (String, Vec<Token>);

/// Token grid: one row per stored pair, one column per unit of width.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Row>,
    width: usize,
}

impl Matrix {
    /// Build the grid for `set` on `width` columns.
    ///
    /// Empty when the set has no boundaries or `width` is zero.
    #[must_use]
    pub fn build(set: &LabelSet, width: usize) -> Self {
        let Some(boundaries) = set.boundaries() else {
            return Self::default();
        };
        if width == 0 {
            return Self::default();
        }

        let scale = Scale::new(&boundaries, width);
        tracing::trace!(
            width,
            rows = set.len(),
            units_per_second = scale.units_per_second(),
            "building matrix"
        );

        let rows = set
            .iter()
            .map(|(label, block)| {
                let mut row = vec![Token::Space; width];
                for interval in block.intervals() {
                    paint(&mut row, &scale, interval);
                }
                (label.to_owned(), row)
            })
            .collect();

        Self { rows, width }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Display width of the widest label.
    #[must_use]
    pub fn label_width(&self) -> usize {
        self.rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0)
    }
}

fn paint(row: &mut [Token], scale: &Scale, interval: &Interval) {
    let (start, end) = scale.columns(interval);
    row[start..end].fill(Token::Body);
    row[start] = if interval.is_start_included() {
        Token::StartIncluded
    } else {
        Token::StartExcluded
    };
    row[end - 1] = if interval.is_end_included() {
        Token::EndIncluded
    } else {
        Token::EndExcluded
    };
}
