//! Draws an interval set followed by one derived result row (intersections,
//! gaps, unions or a diff).

use std::io::Write;

use crate::{
    core::{
        constants::DEFAULT_RESULT_LABEL,
        dataset::{IntoBlock, LabelSet},
        error::GanttError,
        interval::{Interval, IntervalSet},
        label::LabelGenerator,
    },
    render::line::Chart,
};

pub const INTERSECTIONS_LABEL: &str = "INTERSECTIONS";
pub const GAPS_LABEL: &str = "GAPS";
pub const UNIONS_LABEL: &str = "UNIONS";
pub const DIFF_LABEL: &str = "DIFF";

pub struct Viewer<W: Write, G: LabelGenerator> {
    labels: G,
    chart: Chart<W>,
}

impl<W: Write, G: LabelGenerator> Viewer<W, G> {
    #[must_use]
    pub fn new(labels: G, chart: Chart<W>) -> Self {
        Self { labels, chart }
    }

    #[inline]
    #[must_use]
    pub fn chart(&self) -> &Chart<W> {
        &self.chart
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.chart.into_inner()
    }

    /// Label for the result row: blank means [`DEFAULT_RESULT_LABEL`], and a
    /// generator that formats it away leaves it as given.
    fn result_label(&self, label: &str) -> String {
        let label = if label.trim().is_empty() {
            DEFAULT_RESULT_LABEL
        } else {
            label
        };
        let formatted = self.labels.format(label);
        if formatted.is_empty() {
            label.to_owned()
        } else {
            formatted
        }
    }

    fn view<V: IntoBlock>(
        &mut self,
        set: &IntervalSet,
        result: Option<(V, &str)>,
    ) -> Result<usize, GanttError> {
        if set.is_empty() {
            return Ok(0);
        }
        let mut rows = LabelSet::from_counted(set.iter().copied(), &self.labels);
        if let Some((value, label)) = result {
            let label = self.result_label(label);
            rows.append(label, value);
        }
        self.chart.display(&rows)
    }

    /// Only the members of `set`.
    ///
    /// # Errors
    /// I/O errors from the sink.
    pub fn sequence(&mut self, set: &IntervalSet) -> Result<usize, GanttError> {
        self.view(set, None::<(IntervalSet, &str)>)
    }

    /// # Errors
    /// I/O errors from the sink.
    pub fn intersections(
        &mut self,
        set: &IntervalSet,
        label: Option<&str>,
    ) -> Result<usize, GanttError> {
        let label = label.unwrap_or(INTERSECTIONS_LABEL);
        self.view(set, Some((set.intersections(), label)))
    }

    /// # Errors
    /// I/O errors from the sink.
    pub fn gaps(&mut self, set: &IntervalSet, label: Option<&str>) -> Result<usize, GanttError> {
        let label = label.unwrap_or(GAPS_LABEL);
        self.view(set, Some((set.gaps(), label)))
    }

    /// # Errors
    /// I/O errors from the sink.
    pub fn unions(&mut self, set: &IntervalSet, label: Option<&str>) -> Result<usize, GanttError> {
        let label = label.unwrap_or(UNIONS_LABEL);
        self.view(set, Some((set.unions(), label)))
    }

    /// `a`, `b`, then whatever of their span the two do not share.
    ///
    /// # Errors
    /// I/O errors from the sink.
    pub fn diff(
        &mut self,
        a: &Interval,
        b: &Interval,
        label: Option<&str>,
    ) -> Result<usize, GanttError> {
        let label = label.unwrap_or(DIFF_LABEL);
        let (before, after) = a.diff(b);
        let parts: IntervalSet = before.into_iter().chain(after).collect();
        let pair = IntervalSet::from(vec![*a, *b]);
        self.view(&pair, Some((parts, label)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::{
        core::{
            config::RenderConfig,
            label::{DecimalNumber, LatinLetter, LetterCase, RomanNumber},
        },
        render::writer::Writer,
    };

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2018, 1, d, 0, 0, 0).unwrap()
    }

    fn span(a: u32, b: u32) -> Interval {
        Interval::new(day(a), day(b)).unwrap()
    }

    fn viewer<G: LabelGenerator>(labels: G) -> Viewer<Vec<u8>, G> {
        let config = RenderConfig::default().with_width(10);
        Viewer::new(labels, Chart::new(config, Writer::plain(Vec::new())))
    }

    fn output(v: Viewer<Vec<u8>, impl LabelGenerator>) -> Vec<String> {
        String::from_utf8(v.into_inner())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn empty_sequence_writes_nothing() {
        let mut v = viewer(LatinLetter::default());
        assert_eq!(v.gaps(&IntervalSet::new(), None).unwrap(), 0);
        assert!(output(v).is_empty());
    }

    #[test]
    fn sequence_only() {
        let mut v = viewer(LatinLetter::default());
        v.sequence(&IntervalSet::from(vec![span(1, 6), span(6, 11)]))
            .unwrap();
        assert_eq!(output(v), ["A [---)     ", "B      [---)"]);
    }

    #[test]
    fn gaps_row_is_appended() {
        let mut v = viewer(LatinLetter::default());
        v.gaps(&IntervalSet::from(vec![span(1, 4), span(8, 11)]), None)
            .unwrap();
        assert_eq!(
            output(v),
            ["A    [-)       ", "B           [-)", "GAPS    [--)   "]
        );
    }

    #[test]
    fn blank_label_becomes_result() {
        let mut v = viewer(LatinLetter::default());
        v.unions(&IntervalSet::from(vec![span(1, 6), span(4, 11)]), Some("  "))
            .unwrap();
        let lines = output(v);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "RESULT [--------)");
    }

    #[test]
    fn result_label_is_formatted_untrimmed() {
        let mut v = viewer(DecimalNumber::default());
        v.unions(&IntervalSet::from(vec![span(1, 6), span(4, 11)]), Some(" sum "))
            .unwrap();
        let lines = output(v);
        assert_eq!(lines[0], "1     [---)     ");
        assert_eq!(lines[2], " sum  [--------)");
    }

    #[test]
    fn roman_labels_keep_result_label() {
        let mut v = viewer(RomanNumber::new(DecimalNumber::default(), LetterCase::Upper));
        v.intersections(&IntervalSet::from(vec![span(1, 6), span(4, 11)]), None)
            .unwrap();
        let lines = output(v);
        assert!(lines[0].starts_with("I "));
        assert!(lines[1].starts_with("II "));
        assert!(lines[2].starts_with("INTERSECTIONS "));
    }

    #[test]
    fn diff_shows_both_inputs_and_remainder() {
        let mut v = viewer(LatinLetter::default());
        v.diff(&span(1, 6), &span(4, 11), None).unwrap();
        assert_eq!(
            output(v),
            ["A    [---)     ", "B       [-----)", "DIFF [-)  [---)"]
        );
    }
}
