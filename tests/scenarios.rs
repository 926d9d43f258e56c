use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use period_gantt::{
    Bounds, Chart, Color, GlyphKind, Interval, IntervalSet, LabelSet, LatinLetter, Matrix,
    RenderConfig, Token, Viewer, Writer, cli::parse_span, render_lines, render_to,
};

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn plain_lines(set: &LabelSet, config: &RenderConfig) -> (usize, Vec<String>) {
    let mut sink = Vec::new();
    let bytes = render_to(&mut sink, set, config, false).unwrap();
    let text = String::from_utf8(sink).unwrap();
    (bytes, text.lines().map(str::to_owned).collect())
}

#[test]
fn two_adjacent_months_halves() {
    let set = LabelSet::from_counted(
        [
            Interval::new(at(2018, 1, 1), at(2018, 1, 15)).unwrap(),
            Interval::new(at(2018, 1, 15), at(2018, 1, 31)).unwrap(),
        ],
        &LatinLetter::default(),
    );
    let config = RenderConfig::default().with_width(30);
    let (bytes, lines) = plain_lines(&set, &config);

    let first = format!("A [{}){}", "-".repeat(12), " ".repeat(16));
    let second = format!("B {}[{})", " ".repeat(14), "-".repeat(14));
    assert_eq!(lines, [first, second]);
    assert!(bytes > 2 * 32);

    let matrix = Matrix::build(&set, 30);
    let rows = matrix.rows();
    assert_eq!(rows[0].1[0], Token::StartIncluded);
    assert_eq!(rows[0].1[13], Token::EndExcluded);
    assert_eq!(rows[1].1[14], Token::StartIncluded);
    assert_eq!(rows[1].1[29], Token::EndExcluded);
}

#[test]
fn empty_label_set_writes_nothing() {
    let mut sink = Vec::new();
    let bytes = render_to(&mut sink, &LabelSet::new(), &RenderConfig::default(), true).unwrap();
    assert_eq!(bytes, 0);
    assert!(sink.is_empty());
}

#[test]
fn one_day_intervals_on_a_two_year_axis_take_one_column() {
    let set = LabelSet::from_keyed([
        ("first", Interval::new(at(2018, 1, 1), at(2018, 1, 2)).unwrap()),
        ("last", Interval::new(at(2019, 12, 31), at(2020, 1, 1)).unwrap()),
    ]);
    let config = RenderConfig::default();
    let lines = render_lines(&Matrix::build(&set, config.width()), &config);

    let glyph_positions = |line: &str| -> Vec<usize> {
        line.chars()
            .skip("first ".len())
            .enumerate()
            .filter_map(|(i, c)| (c != ' ').then_some(i))
            .collect()
    };
    assert_eq!(glyph_positions(&lines[0]), [0]);
    assert_eq!(glyph_positions(&lines[1]), [config.width() - 1]);
}

#[test]
fn white_marker_becomes_sgr_37() {
    let writer = Writer::ansi(Vec::new());
    let marked = writer.colorize("toto", Color::White);
    assert_eq!(marked, "<<white>>toto<<reset>>");
    assert_eq!(writer.format(&marked), "\x1b[37mtoto\x1b[0m");
}

#[test]
fn ansi_rows_are_wrapped_in_their_colour() {
    let set = LabelSet::from_keyed([("A", Interval::new(at(2018, 1, 1), at(2018, 1, 11)).unwrap())]);
    let config = RenderConfig::default()
        .with_width(10)
        .with_colors(["green"])
        .with_left_margin_size(2);
    let mut sink = Vec::new();
    render_to(&mut sink, &set, &config, true).unwrap();
    let text = String::from_utf8(sink).unwrap();
    assert_eq!(text.trim_end(), "\x1b[32m  A [--------)\x1b[0m");
}

#[test]
fn custom_glyphs_and_alignment() {
    let set = LabelSet::from_keyed([
        ("x", Interval::new(at(2018, 1, 1), at(2018, 1, 6)).unwrap()),
        (
            "long",
            Interval::with_bounds(at(2018, 1, 6), at(2018, 1, 11), Bounds::IncludeAll).unwrap(),
        ),
    ]);
    let config = RenderConfig::default()
        .with_width(10)
        .with_label_align(period_gantt::LabelAlign::Right)
        .with_glyph(GlyphKind::Body, "\\u2501")
        .unwrap()
        .with_glyph(GlyphKind::Space, "·")
        .unwrap();
    let (_, lines) = plain_lines(&set, &config);
    assert_eq!(lines[0], "   x [━━━)·····");
    assert_eq!(lines[1], "long ·····[━━━]");
}

#[test]
fn viewer_draws_gaps_from_parsed_spans() {
    let origin = at(2018, 1, 1);
    let set: IntervalSet = ["[0,3)", "[7,10)"]
        .into_iter()
        .map(|s| parse_span(s, origin).unwrap())
        .collect();
    assert_eq!(set.boundaries().unwrap().end(), origin + TimeDelta::days(10));

    let chart = Chart::new(RenderConfig::default().with_width(10), Writer::plain(Vec::new()));
    let mut viewer = Viewer::new(LatinLetter::default(), chart);
    let bytes = viewer.gaps(&set, Some("holes")).unwrap();

    let out = String::from_utf8(viewer.into_inner()).unwrap();
    assert_eq!(bytes, out.len());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2], "holes    [--)   ");
}
