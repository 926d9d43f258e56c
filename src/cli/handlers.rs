use std::io::{Stdout, stdout};

use chrono::{DateTime, TimeDelta, Utc};
use unicode_width::UnicodeWidthStr;

use crate::{
    core::{
        bounds::{chart_width, terminal_geometry},
        color::Color,
        config::{GlyphKind, LabelAlign, RenderConfig},
        dataset::LabelSet,
        error::GanttError,
        interval::{Bounds, Interval, IntervalSet},
        label::{DecimalNumber, LabelGenerator, LatinLetter, LetterCase, RomanNumber},
        rng::Lcg,
    },
    render::{Chart, Viewer, Writer},
};

use super::parse::{DemoArgs, DrawArgs, LabelKind, StyleArgs, ViewKind};

/// 2018-01-01T00:00:00Z, day zero for every span on the command line.
const ORIGIN_TIMESTAMP: i64 = 1_514_764_800;
const MS_PER_DAY: f64 = 86_400_000.0;

fn origin() -> DateTime<Utc> {
    DateTime::from_timestamp(ORIGIN_TIMESTAMP, 0).unwrap_or_default()
}

fn label_generator(kind: LabelKind) -> Box<dyn LabelGenerator> {
    match kind {
        LabelKind::Letter => Box::new(LatinLetter::default()),
        LabelKind::Number => Box::new(DecimalNumber::default()),
        LabelKind::Roman => Box::new(RomanNumber::new(DecimalNumber::default(), LetterCase::Upper)),
    }
}

fn writer(style: &StyleArgs) -> Writer<Stdout> {
    if style.ansi {
        Writer::ansi(stdout())
    } else if style.plain {
        Writer::plain(stdout())
    } else {
        Writer::stdout()
    }
}

/// Render settings from the shared flags; `label_width` only matters when
/// the width has to be fitted to the terminal.
pub fn style_config(style: &StyleArgs, label_width: usize) -> Result<RenderConfig, GanttError> {
    let palette = if style.rainbow {
        RenderConfig::rainbow_palette()
    } else if style.random_color {
        RenderConfig::random_palette()
    } else {
        RenderConfig::default().with_colors(&style.colors)
    };
    let mut config = palette
        .with_gap_size(style.gap)
        .with_left_margin_size(style.margin)
        .with_label_align(LabelAlign::from_name(&style.align));

    let width = style.width.unwrap_or_else(|| {
        chart_width(
            terminal_geometry(),
            label_width,
            config.gap_size(),
            config.left_margin_size(),
        )
    });
    config = config.with_width(width);

    let overrides = [
        (GlyphKind::Space, &style.space),
        (GlyphKind::Body, &style.body),
        (GlyphKind::StartIncluded, &style.start_included),
        (GlyphKind::StartExcluded, &style.start_excluded),
        (GlyphKind::EndIncluded, &style.end_included),
        (GlyphKind::EndExcluded, &style.end_excluded),
    ];
    for (kind, glyph) in overrides {
        if let Some(glyph) = glyph {
            config = config.with_glyph(kind, glyph)?;
        }
    }
    Ok(config)
}

fn parse_days(text: &str) -> Option<f64> {
    lexical_core::parse::<f64>(text.trim().as_bytes())
        .ok()
        .filter(|d| d.is_finite())
}

fn at_offset(origin: DateTime<Utc>, days: f64) -> Option<DateTime<Utc>> {
    let ms = (days * MS_PER_DAY).round() as i64;
    origin.checked_add_signed(TimeDelta::try_milliseconds(ms)?)
}

/// Parse `[a,b)`-style spans: day offsets from `origin`, brackets for the
/// bound flags.
pub fn parse_span(text: &str, origin: DateTime<Utc>) -> Result<Interval, GanttError> {
    let bad = || GanttError::InvalidSpan(text.to_owned());
    let s = text.trim();

    let start_included = match s.chars().next() {
        Some('[') => true,
        Some('(') => false,
        _ => return Err(bad()),
    };
    let end_included = match s.chars().next_back() {
        Some(']') if s.len() > 1 => true,
        Some(')') if s.len() > 1 => false,
        _ => return Err(bad()),
    };

    let (lo, hi) = s[1..s.len() - 1].split_once(',').ok_or_else(bad)?;
    let start = parse_days(lo)
        .and_then(|d| at_offset(origin, d))
        .ok_or_else(bad)?;
    let end = parse_days(hi)
        .and_then(|d| at_offset(origin, d))
        .ok_or_else(bad)?;

    Ok(Interval::with_bounds(
        start,
        end,
        Bounds::new(start_included, end_included),
    )?)
}

fn random_interval(rng: &mut Lcg, origin: DateTime<Utc>) -> Result<Interval, GanttError> {
    let start = origin + TimeDelta::days(rng.below(45) as i64);
    let end = start + TimeDelta::days(1 + rng.below(20) as i64);
    // mostly `[a, b)`, with the odd open or closed end
    let bounds = Bounds::new(rng.below(4) != 0, rng.below(4) == 0);
    Ok(Interval::with_bounds(start, end, bounds)?)
}

pub fn demo(a: &DemoArgs) -> Result<(), GanttError> {
    let mut rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    let origin = origin();
    let intervals = (0..a.rows)
        .map(|_| random_interval(&mut rng, origin))
        .collect::<Result<Vec<_>, _>>()?;

    let labels = label_generator(a.style.labels);
    let set = LabelSet::from_counted(intervals, &labels);
    let config = style_config(&a.style, set.max_label_length())?;

    let bytes = Chart::new(config, writer(&a.style)).display(&set)?;
    tracing::debug!(rows = set.len(), bytes, "demo drawn");
    Ok(())
}

pub fn draw(a: &DrawArgs) -> Result<(), GanttError> {
    let origin = origin();
    let spans = a
        .spans
        .iter()
        .map(|s| parse_span(s, origin))
        .collect::<Result<Vec<_>, _>>()?;
    let set: IntervalSet = spans.iter().copied().collect();

    let label = a.result_label.as_deref();
    let config = style_config(&a.style, label.map_or(0, UnicodeWidthStr::width))?;
    let mut viewer = Viewer::new(
        label_generator(a.style.labels),
        Chart::new(config, writer(&a.style)),
    );

    let bytes = match a.view {
        ViewKind::Sequence => viewer.sequence(&set)?,
        ViewKind::Intersections => viewer.intersections(&set, label)?,
        ViewKind::Gaps => viewer.gaps(&set, label)?,
        ViewKind::Unions => viewer.unions(&set, label)?,
        ViewKind::Diff => match spans.as_slice() {
            [first, second] => viewer.diff(first, second, label)?,
            other => return Err(GanttError::DiffArity(other.len())),
        },
    };
    tracing::debug!(view = ?a.view, bytes, "view drawn");
    Ok(())
}

/// Print every color name in its own color.
pub fn colors() -> Result<(), GanttError> {
    let mut out = Writer::stdout();
    out.write_line("")?;
    out.write_line("Possible colors:")?;
    for color in Color::ALL {
        let line = format!("{}  (SGR {})", out.colorize(color.name(), color), color.sgr());
        out.write_line(&line)?;
    }
    out.write_line("")?;
    Ok(())
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "period-gantt";
    println!(
        "
Example invocations
-------------------
• Random chart       : {bin} demo --rows 8
• Reproducible chart : {bin} demo --seed 42 --rainbow --labels roman
• Custom glyphs      : {bin} demo --body = --start-included '|' --end-excluded '>'
• Two spans          : {bin} draw --span '[0,14)' --span '[14,30)' --width 30
• Gaps between spans : {bin} draw --span '[0,5)' --span '(9,20]' --view gaps
• Difference         : {bin} draw --span '[0,10)' --span '[4,16)' --view diff \\
                        --result-label remainder --colors red,blue
• Debug logging      : RUST_LOG=period_gantt=trace {bin} demo
"
    );
}
