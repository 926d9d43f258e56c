//! Render configuration: an immutable value with persistent `with_*` setters.
//!
//! Every setter borrows the receiver and hands back a fresh value, so a
//! configuration can be shared and specialised without aliasing surprises.
//! Glyph setters are the only fallible ones; numeric and enum settings clamp
//! or fall back to a safe default.

use std::fmt;

use crate::core::{
    color::Color,
    constants::{
        DEFAULT_BODY, DEFAULT_END_EXCLUDED, DEFAULT_END_INCLUDED, DEFAULT_GAP_SIZE,
        DEFAULT_LEFT_MARGIN, DEFAULT_SPACE, DEFAULT_START_EXCLUDED, DEFAULT_START_INCLUDED,
        DEFAULT_WIDTH, MIN_WIDTH,
    },
    error::ConfigError,
    rng::Lcg,
};

/// Which glyph a setter targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlyphKind {
    Space,
    Body,
    StartIncluded,
    StartExcluded,
    EndIncluded,
    EndExcluded,
}

impl GlyphKind {
    pub const ALL: [GlyphKind; 6] = [
        GlyphKind::Space,
        GlyphKind::Body,
        GlyphKind::StartIncluded,
        GlyphKind::StartExcluded,
        GlyphKind::EndIncluded,
        GlyphKind::EndExcluded,
    ];
}

impl fmt::Display for GlyphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Space => "space",
            Self::Body => "body",
            Self::StartIncluded => "start-included",
            Self::StartExcluded => "start-excluded",
            Self::EndIncluded => "end-included",
            Self::EndExcluded => "end-excluded",
        })
    }
}

/// How labels are padded to the label column width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelAlign {
    #[default]
    Left,
    Right,
    Center,
}

impl LabelAlign {
    /// Unrecognised names fall back to [`LabelAlign::Left`].
    #[must_use]
    pub fn from_name(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" => Self::Right,
            "center" | "centre" | "both" => Self::Center,
            _ => Self::Left,
        }
    }
}

/// Glyph set, one string per token kind.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Glyphs {
    space: String,
    body: String,
    start_included: String,
    start_excluded: String,
    end_included: String,
    end_excluded: String,
}

impl Glyphs {
    fn get(&self, kind: GlyphKind) -> &str {
        match kind {
            GlyphKind::Space => &self.space,
            GlyphKind::Body => &self.body,
            GlyphKind::StartIncluded => &self.start_included,
            GlyphKind::StartExcluded => &self.start_excluded,
            GlyphKind::EndIncluded => &self.end_included,
            GlyphKind::EndExcluded => &self.end_excluded,
        }
    }

    fn slot(&mut self, kind: GlyphKind) -> &mut String {
        match kind {
            GlyphKind::Space => &mut self.space,
            GlyphKind::Body => &mut self.body,
            GlyphKind::StartIncluded => &mut self.start_included,
            GlyphKind::StartExcluded => &mut self.start_excluded,
            GlyphKind::EndIncluded => &mut self.end_included,
            GlyphKind::EndExcluded => &mut self.end_excluded,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            space: DEFAULT_SPACE.to_owned(),
            body: DEFAULT_BODY.to_owned(),
            start_included: DEFAULT_START_INCLUDED.to_owned(),
            start_excluded: DEFAULT_START_EXCLUDED.to_owned(),
            end_included: DEFAULT_END_INCLUDED.to_owned(),
            end_excluded: DEFAULT_END_EXCLUDED.to_owned(),
        }
    }
}

/// Immutable parameters handed to the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    width: usize,
    glyphs: Glyphs,
    gap_size: usize,
    left_margin: usize,
    label_align: LabelAlign,
    colors: Vec<Color>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            glyphs: Glyphs::default(),
            gap_size: DEFAULT_GAP_SIZE,
            left_margin: DEFAULT_LEFT_MARGIN,
            label_align: LabelAlign::Left,
            colors: vec![Color::Reset],
        }
    }
}

impl RenderConfig {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Single colour picked at random from the palette.
    #[must_use]
    pub fn random_palette() -> Self {
        Self::random_palette_with(&mut Lcg::seed_from_time())
    }

    /// Same as [`RenderConfig::random_palette`] with a caller-owned generator.
    #[must_use]
    pub fn random_palette_with(rng: &mut Lcg) -> Self {
        let pick = Color::PALETTE[rng.below(Color::PALETTE.len())];
        Self::default().with_color_list(&[pick])
    }

    /// Every palette colour, in palette order.
    #[must_use]
    pub fn rainbow_palette() -> Self {
        Self::default().with_color_list(&Color::PALETTE)
    }

    // --- readers ---

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    #[must_use]
    pub fn glyph(&self, kind: GlyphKind) -> &str {
        self.glyphs.get(kind)
    }
    #[inline]
    #[must_use]
    pub fn gap_size(&self) -> usize {
        self.gap_size
    }
    #[inline]
    #[must_use]
    pub fn left_margin_size(&self) -> usize {
        self.left_margin
    }
    #[inline]
    #[must_use]
    pub fn label_align(&self) -> LabelAlign {
        self.label_align
    }
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Colour of row `index`; the palette repeats.
    #[inline]
    #[must_use]
    pub fn color_for_row(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    // --- persistent setters ---

    /// Widths under [`MIN_WIDTH`] are raised to it.
    #[must_use]
    pub fn with_width(&self, width: usize) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
            ..self.clone()
        }
    }

    /// Replace one glyph.
    ///
    /// Accepts a single code point or `\uXXXX` escapes decoding to one.
    ///
    /// # Errors
    /// [`ConfigError::InvalidGlyph`] for anything else, or
    /// [`ConfigError::InvalidUnicodeEscape`] when the escapes decode to
    /// something other than a single code point.
    pub fn with_glyph(&self, kind: GlyphKind, glyph: &str) -> Result<Self, ConfigError> {
        let glyph = filter_glyph(kind, glyph)?;
        let mut next = self.clone();
        *next.glyphs.slot(kind) = glyph;
        Ok(next)
    }

    /// Negative gaps fall back to the default of one column.
    #[must_use]
    pub fn with_gap_size(&self, size: isize) -> Self {
        Self {
            gap_size: usize::try_from(size).unwrap_or(DEFAULT_GAP_SIZE),
            ..self.clone()
        }
    }

    /// Negative margins fall back to no margin.
    #[must_use]
    pub fn with_left_margin_size(&self, size: isize) -> Self {
        Self {
            left_margin: usize::try_from(size).unwrap_or(DEFAULT_LEFT_MARGIN),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_label_align(&self, align: LabelAlign) -> Self {
        Self {
            label_align: align,
            ..self.clone()
        }
    }

    /// Keep the recognised names (case-insensitive) in order.
    ///
    /// Nothing recognised leaves a single [`Color::Reset`].
    #[must_use]
    pub fn with_colors<I, S>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors: Vec<Color> = names
            .into_iter()
            .filter_map(|n| Color::from_name(n.as_ref()))
            .collect();
        self.with_color_list(&colors)
    }

    /// Typed counterpart of [`RenderConfig::with_colors`].
    #[must_use]
    pub fn with_color_list(&self, colors: &[Color]) -> Self {
        let colors = if colors.is_empty() {
            vec![Color::Reset]
        } else {
            colors.to_vec()
        };
        Self {
            colors,
            ..self.clone()
        }
    }
}

// --- glyph validation ---

fn is_single_char(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some() && chars.next().is_none()
}

fn filter_glyph(kind: GlyphKind, s: &str) -> Result<String, ConfigError> {
    if is_single_char(s) {
        return Ok(s.to_owned());
    }

    match decode_unicode_escapes(s) {
        Some(Ok(decoded)) if is_single_char(&decoded) => Ok(decoded),
        Some(_) => Err(ConfigError::InvalidUnicodeEscape(s.to_owned())),
        None => Err(ConfigError::InvalidGlyph {
            kind,
            value: s.to_owned(),
        }),
    }
}

/// Replace every `\uH..` (1 to 4 hex digits) escape in `s`.
///
/// `None` when `s` holds no escape at all, `Some(Err(()))` when an escape
/// names a surrogate or other non-scalar value.
fn decode_unicode_escapes(s: &str) -> Option<Result<String, ()>> {
    let mut out = String::with_capacity(s.len());
    let mut found = false;
    let mut rest = s;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        if !after.starts_with(['u', 'U']) {
            out.push('\\');
            rest = after;
            continue;
        }
        let after = &after[1..];
        let digits = after
            .bytes()
            .take(4)
            .take_while(u8::is_ascii_hexdigit)
            .count();
        if digits == 0 {
            out.push_str(&rest[pos..pos + 2]);
            rest = after;
            continue;
        }
        found = true;
        let Some(ch) = u32::from_str_radix(&after[..digits], 16)
            .ok()
            .and_then(char::from_u32)
        else {
            return Some(Err(()));
        };
        out.push(ch);
        rest = &after[digits..];
    }
    out.push_str(rest);

    found.then_some(Ok(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_chart() {
        let c = RenderConfig::default();
        assert_eq!(c.width(), 60);
        assert_eq!(c.glyph(GlyphKind::Space), " ");
        assert_eq!(c.glyph(GlyphKind::Body), "-");
        assert_eq!(c.glyph(GlyphKind::StartIncluded), "[");
        assert_eq!(c.glyph(GlyphKind::StartExcluded), "(");
        assert_eq!(c.glyph(GlyphKind::EndIncluded), "]");
        assert_eq!(c.glyph(GlyphKind::EndExcluded), ")");
        assert_eq!(c.gap_size(), 1);
        assert_eq!(c.left_margin_size(), 0);
        assert_eq!(c.label_align(), LabelAlign::Left);
        assert_eq!(c.colors(), &[Color::Reset]);
    }

    #[test]
    fn setters_leave_receiver_untouched() {
        let base = RenderConfig::default();
        let wide = base.with_width(120);
        assert_eq!(base.width(), 60);
        assert_eq!(wide.width(), 120);
        assert_eq!(base.with_width(60), base);
    }

    #[test]
    fn width_is_clamped() {
        let c = RenderConfig::default();
        assert_eq!(c.with_width(0).width(), MIN_WIDTH);
        assert_eq!(c.with_width(9).width(), MIN_WIDTH);
        assert_eq!(c.with_width(10).width(), 10);
    }

    #[test]
    fn glyph_accepts_single_char() {
        let c = RenderConfig::default()
            .with_glyph(GlyphKind::Body, "=")
            .unwrap()
            .with_glyph(GlyphKind::Space, "·")
            .unwrap()
            .with_glyph(GlyphKind::StartIncluded, "\u{301}")
            .unwrap();
        assert_eq!(c.glyph(GlyphKind::Body), "=");
        assert_eq!(c.glyph(GlyphKind::Space), "·");
        assert_eq!(c.glyph(GlyphKind::StartIncluded), "\u{301}");
    }

    #[test]
    fn glyph_rejects_multi_char_clusters() {
        let c = RenderConfig::default();
        for cluster in ["\r\n", "e\u{301}", "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}"] {
            assert_eq!(
                c.with_glyph(GlyphKind::Body, cluster),
                Err(ConfigError::InvalidGlyph {
                    kind: GlyphKind::Body,
                    value: cluster.into(),
                }),
                "{cluster:?}"
            );
        }
        assert_eq!(
            c.with_glyph(GlyphKind::Body, "\\u0065\\u0301"),
            Err(ConfigError::InvalidUnicodeEscape("\\u0065\\u0301".into()))
        );
    }

    #[test]
    fn glyph_decodes_unicode_escape() {
        let c = RenderConfig::default()
            .with_glyph(GlyphKind::Body, "\\u2588")
            .unwrap();
        assert_eq!(c.glyph(GlyphKind::Body), "█");
        let c = c.with_glyph(GlyphKind::Space, "\\u002E").unwrap();
        assert_eq!(c.glyph(GlyphKind::Space), ".");
    }

    #[test]
    fn glyph_rejects_bad_input() {
        let c = RenderConfig::default();
        for bad in ["", "ab", "--", "\\u", "\\uZZ"] {
            let err = c.with_glyph(GlyphKind::Body, bad).unwrap_err();
            assert!(err.is_invalid_glyph(), "{bad:?}");
        }
        assert_eq!(
            c.with_glyph(GlyphKind::Body, "\\u0041\\u0042"),
            Err(ConfigError::InvalidUnicodeEscape("\\u0041\\u0042".into()))
        );
        assert_eq!(
            c.with_glyph(GlyphKind::Body, "\\uD800"),
            Err(ConfigError::InvalidUnicodeEscape("\\uD800".into()))
        );
    }

    #[test]
    fn negative_gap_falls_back() {
        let c = RenderConfig::default().with_gap_size(4);
        assert_eq!(c.gap_size(), 4);
        assert_eq!(c.with_gap_size(-3).gap_size(), DEFAULT_GAP_SIZE);
        assert_eq!(c.with_gap_size(0).gap_size(), 0);
        assert_eq!(c.with_left_margin_size(-1).left_margin_size(), 0);
    }

    #[test]
    fn align_fallback_is_left() {
        assert_eq!(LabelAlign::from_name("RIGHT"), LabelAlign::Right);
        assert_eq!(LabelAlign::from_name("center"), LabelAlign::Center);
        assert_eq!(LabelAlign::from_name("diagonal"), LabelAlign::Left);
    }

    #[test]
    fn colors_are_filtered_in_order() {
        let c = RenderConfig::default().with_colors(["Blue", "mauve", "RED"]);
        assert_eq!(c.colors(), &[Color::Blue, Color::Red]);
        assert_eq!(c.color_for_row(0), Color::Blue);
        assert_eq!(c.color_for_row(1), Color::Red);
        assert_eq!(c.color_for_row(2), Color::Blue);
    }

    #[test]
    fn unknown_colors_fall_back_to_reset() {
        let c = RenderConfig::default().with_colors(["mauve", "taupe"]);
        assert_eq!(c.colors(), &[Color::Reset]);
        let c = RenderConfig::default().with_colors(Vec::<String>::new());
        assert_eq!(c.colors(), &[Color::Reset]);
    }

    #[test]
    fn palette_factories() {
        assert_eq!(RenderConfig::rainbow_palette().colors(), &Color::PALETTE);
        let random = RenderConfig::random_palette_with(&mut Lcg::seed(3));
        assert_eq!(random.colors().len(), 1);
        assert!(Color::PALETTE.contains(&random.colors()[0]));
    }
}
