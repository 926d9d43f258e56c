//! Minimal interval collaborator: time spans with boundary flags and the few
//! set operations the charts display (merge, intersections, gaps, unions,
//! diff).
//!
//! Instants are `DateTime<Utc>`; durations are measured in seconds with
//! millisecond precision.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::core::error::IntervalError;

/// Which ends of an interval belong to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Bounds {
    /// `[start, end)`
    #[default]
    IncludeStartExcludeEnd,
    /// `(start, end]`
    ExcludeStartIncludeEnd,
    /// `(start, end)`
    ExcludeAll,
    /// `[start, end]`
    IncludeAll,
}

impl Bounds {
    #[must_use]
    pub const fn new(start_included: bool, end_included: bool) -> Self {
        match (start_included, end_included) {
            (true, false) => Self::IncludeStartExcludeEnd,
            (false, true) => Self::ExcludeStartIncludeEnd,
            (false, false) => Self::ExcludeAll,
            (true, true) => Self::IncludeAll,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_start_included(self) -> bool {
        matches!(self, Self::IncludeStartExcludeEnd | Self::IncludeAll)
    }

    #[inline]
    #[must_use]
    pub const fn is_end_included(self) -> bool {
        matches!(self, Self::ExcludeStartIncludeEnd | Self::IncludeAll)
    }
}

/// Seconds between two instants, millisecond precision.
#[inline]
#[must_use]
pub fn seconds_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0
}

// --- Interval ---

/// A span between two instants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    bounds: Bounds,
}

impl Interval {
    /// `[start, end)`.
    ///
    /// # Errors
    /// [`IntervalError::Inverted`] when `end < start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, IntervalError> {
        Self::with_bounds(start, end, Bounds::default())
    }

    /// # Errors
    /// [`IntervalError::Inverted`] when `end < start`.
    pub fn with_bounds(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        bounds: Bounds,
    ) -> Result<Self, IntervalError> {
        if end < start {
            return Err(IntervalError::Inverted { start, end });
        }
        Ok(Self { start, end, bounds })
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }
    #[inline]
    #[must_use]
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
    #[inline]
    #[must_use]
    pub fn is_start_included(&self) -> bool {
        self.bounds.is_start_included()
    }
    #[inline]
    #[must_use]
    pub fn is_end_included(&self) -> bool {
        self.bounds.is_end_included()
    }

    #[inline]
    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        seconds_between(self.start, self.end)
    }

    /// Smallest interval containing both.
    #[must_use]
    pub fn merge(&self, other: &Interval) -> Interval {
        let (start, start_in) = match self.start.cmp(&other.start) {
            Ordering::Less => (self.start, self.is_start_included()),
            Ordering::Greater => (other.start, other.is_start_included()),
            Ordering::Equal => (
                self.start,
                self.is_start_included() || other.is_start_included(),
            ),
        };
        let (end, end_in) = match self.end.cmp(&other.end) {
            Ordering::Greater => (self.end, self.is_end_included()),
            Ordering::Less => (other.end, other.is_end_included()),
            Ordering::Equal => (self.end, self.is_end_included() || other.is_end_included()),
        };
        Interval {
            start,
            end,
            bounds: Bounds::new(start_in, end_in),
        }
    }

    /// True when both intervals share at least one instant.
    #[must_use]
    pub fn overlaps(&self, other: &Interval) -> bool {
        if self.start < other.end && other.start < self.end {
            return true;
        }
        (self.end == other.start && self.is_end_included() && other.is_start_included())
            || (other.end == self.start && other.is_end_included() && self.is_start_included())
    }

    /// True when one ends exactly where the other starts without overlapping.
    #[must_use]
    pub fn abuts(&self, other: &Interval) -> bool {
        (self.end == other.start && self.is_end_included() != other.is_start_included())
            || (other.end == self.start && other.is_end_included() != self.is_start_included())
    }

    /// Shared part of both intervals.
    #[must_use]
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        if !self.overlaps(other) {
            return None;
        }
        let (start, start_in) = match self.start.cmp(&other.start) {
            Ordering::Greater => (self.start, self.is_start_included()),
            Ordering::Less => (other.start, other.is_start_included()),
            Ordering::Equal => (
                self.start,
                self.is_start_included() && other.is_start_included(),
            ),
        };
        let (end, end_in) = match self.end.cmp(&other.end) {
            Ordering::Less => (self.end, self.is_end_included()),
            Ordering::Greater => (other.end, other.is_end_included()),
            Ordering::Equal => (self.end, self.is_end_included() && other.is_end_included()),
        };
        Some(Interval {
            start,
            end,
            bounds: Bounds::new(start_in, end_in),
        })
    }

    /// The span strictly between two disjoint intervals.
    #[must_use]
    pub fn gap(&self, other: &Interval) -> Option<Interval> {
        let (first, second) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        if first.end >= second.start {
            return None;
        }
        Some(Interval {
            start: first.end,
            end: second.start,
            bounds: Bounds::new(!first.is_end_included(), !second.is_start_included()),
        })
    }

    /// Parts of the merged span not covered by the intersection.
    ///
    /// Disjoint intervals are returned unchanged.
    #[must_use]
    pub fn diff(&self, other: &Interval) -> (Option<Interval>, Option<Interval>) {
        let Some(shared) = self.intersect(other) else {
            return (Some(*self), Some(*other));
        };
        let merged = self.merge(other);

        let before = (merged.start != shared.start
            || merged.is_start_included() != shared.is_start_included())
        .then(|| Interval {
            start: merged.start,
            end: shared.start,
            bounds: Bounds::new(merged.is_start_included(), !shared.is_start_included()),
        });
        let after = (merged.end != shared.end
            || merged.is_end_included() != shared.is_end_included())
        .then(|| Interval {
            start: shared.end,
            end: merged.end,
            bounds: Bounds::new(!shared.is_end_included(), merged.is_end_included()),
        });
        (before, after)
    }
}

// --- IntervalSet ---

/// Ordered collection of intervals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntervalSet {
    items: Vec<Interval>,
}

impl IntervalSet {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, interval: Interval) {
        self.items.push(interval);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.items.iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Interval] {
        &self.items
    }

    /// Smallest interval containing every member; `None` when empty.
    #[must_use]
    pub fn boundaries(&self) -> Option<Interval> {
        let (first, rest) = self.items.split_first()?;
        Some(rest.iter().fold(*first, |acc, i| acc.merge(i)))
    }

    fn sorted(&self) -> Vec<Interval> {
        let mut items = self.items.clone();
        items.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then_with(|| b.is_start_included().cmp(&a.is_start_included()))
        });
        items
    }

    /// Members merged wherever they overlap or abut.
    #[must_use]
    pub fn unions(&self) -> IntervalSet {
        let mut out: Vec<Interval> = Vec::with_capacity(self.items.len());
        for item in self.sorted() {
            match out.last_mut() {
                Some(last) if last.overlaps(&item) || last.abuts(&item) => {
                    *last = last.merge(&item);
                }
                _ => out.push(item),
            }
        }
        IntervalSet { items: out }
    }

    /// Spans covered by at least two members.
    #[must_use]
    pub fn intersections(&self) -> IntervalSet {
        let mut shared = IntervalSet::new();
        for (i, a) in self.items.iter().enumerate() {
            for b in &self.items[i + 1..] {
                if let Some(part) = a.intersect(b) {
                    shared.push(part);
                }
            }
        }
        shared.unions()
    }

    /// Holes between the members, within their boundaries.
    #[must_use]
    pub fn gaps(&self) -> IntervalSet {
        let unions = self.unions();
        unions
            .items
            .windows(2)
            .filter_map(|w| w[0].gap(&w[1]))
            .collect()
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Interval>> for IntervalSet {
    fn from(items: Vec<Interval>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
