//! Geometry helpers: time-to-column scaling + terminal size plumbing.

use chrono::{DateTime, Utc};
use terminal_size::{Height, Width, terminal_size};

use crate::core::{
    constants::{LABEL_RESERVE, MIN_WIDTH},
    interval::Interval,
};

/// Maps instants inside a boundary interval onto `width` columns.
///
/// Arithmetic runs on whole milliseconds so that instants landing exactly on
/// a column edge never spill into the neighbour through float rounding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scale {
    origin: DateTime<Utc>,
    span_ms: i128,
    width: usize,
}

impl Scale {
    #[must_use]
    pub fn new(boundaries: &Interval, width: usize) -> Self {
        let span_ms = i128::from((boundaries.end() - boundaries.start()).num_milliseconds());
        if span_ms == 0 {
            tracing::debug!("zero-duration boundaries, every interval maps to column 0");
        }
        Self {
            origin: boundaries.start(),
            span_ms,
            width,
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Columns per second; zero for a degenerate (single-instant) boundary.
    #[must_use]
    pub fn units_per_second(&self) -> f64 {
        if self.span_ms == 0 {
            return 0.0;
        }
        self.width as f64 * 1000.0 / self.span_ms as f64
    }

    /// `offset * width / span`, rounded down or up.
    fn position(&self, at: DateTime<Utc>, round_up: bool) -> usize {
        if self.span_ms <= 0 {
            return 0;
        }
        let offset = i128::from((at - self.origin).num_milliseconds()).max(0);
        let scaled = offset * self.width as i128;
        let col = if round_up {
            (scaled + self.span_ms - 1) / self.span_ms
        } else {
            scaled / self.span_ms
        };
        usize::try_from(col).unwrap_or(usize::MAX)
    }

    /// Half-open column range `[start, end)` covered by `interval`.
    ///
    /// Never empty: an interval too short to reach a column edge still
    /// claims the column it starts in.
    #[must_use]
    pub fn columns(&self, interval: &Interval) -> (usize, usize) {
        let last = self.width.saturating_sub(1);
        let start = self.position(interval.start(), false).min(last);
        let end = self
            .position(interval.end(), true)
            .max(start + 1)
            .min(self.width.max(1));
        (start, end)
    }
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Chart width that fits the terminal once labels, gap and margin are placed.
#[inline]
#[must_use]
pub fn chart_width((w, _): (Width, Height), label_width: usize, gap: usize, margin: usize) -> usize {
    usize::from(w.0)
        .saturating_sub(label_width.max(LABEL_RESERVE) + gap + margin + 1)
        .max(MIN_WIDTH)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2018, 1, d, 0, 0, 0).unwrap()
    }

    fn span(a: u32, b: u32) -> Interval {
        Interval::new(day(a), day(b)).unwrap()
    }

    #[test]
    fn one_column_per_day() {
        let scale = Scale::new(&span(1, 31), 30);
        assert_eq!(scale.columns(&span(1, 15)), (0, 14));
        assert_eq!(scale.columns(&span(15, 31)), (14, 30));
        assert!((scale.units_per_second() - 30.0 / (30.0 * 86_400.0)).abs() < 1e-12);
    }

    #[test]
    fn partial_columns_round_outwards() {
        // 10 columns over 20 days: two days per column
        let scale = Scale::new(&span(1, 21), 10);
        assert_eq!(scale.columns(&span(2, 4)), (0, 2));
        assert_eq!(scale.columns(&span(3, 5)), (1, 2));
    }

    #[test]
    fn instant_intervals_claim_one_column() {
        let scale = Scale::new(&span(1, 11), 10);
        assert_eq!(scale.columns(&span(4, 4)), (3, 4));
        assert_eq!(scale.columns(&span(11, 11)), (9, 10));
    }

    #[test]
    fn zero_duration_boundary_is_single_column() {
        let scale = Scale::new(&span(5, 5), 12);
        assert_eq!(scale.units_per_second(), 0.0);
        assert_eq!(scale.columns(&span(5, 5)), (0, 1));
    }

    #[test]
    fn chart_width_never_below_minimum() {
        assert_eq!(chart_width((Width(20), Height(10)), 4, 1, 0), MIN_WIDTH);
        assert_eq!(chart_width((Width(80), Height(10)), 4, 1, 0), 80 - 16 - 1 - 1);
    }
}
