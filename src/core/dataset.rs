//! Labelled rows: ordered `(label, interval-or-set)` pairs plus the aggregates
//! the renderer needs (combined boundaries, widest label).
//!
//! The set is append-only. Pairs that cannot be drawn (a label that renders to
//! nothing, a missing value) are dropped silently so callers can feed mixed
//! collections without pre-filtering.

use std::fmt::Display;

use unicode_width::UnicodeWidthStr;

use crate::core::{
    interval::{Interval, IntervalSet},
    label::LabelGenerator,
};

/// What one row draws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Interval(Interval),
    Set(IntervalSet),
}

impl Block {
    /// Every interval painted on the row, in order.
    #[must_use]
    pub fn intervals(&self) -> &[Interval] {
        match self {
            Self::Interval(i) => std::slice::from_ref(i),
            Self::Set(s) => s.as_slice(),
        }
    }

    #[must_use]
    pub fn boundaries(&self) -> Option<Interval> {
        match self {
            Self::Interval(i) => Some(*i),
            Self::Set(s) => s.boundaries(),
        }
    }
}

impl From<Interval> for Block {
    fn from(i: Interval) -> Self {
        Self::Interval(i)
    }
}

impl From<IntervalSet> for Block {
    fn from(s: IntervalSet) -> Self {
        Self::Set(s)
    }
}

/// Values a [`LabelSet`] accepts; `None` means "nothing to draw".
pub trait IntoBlock {
    fn into_block(self) -> Option<Block>;
}

impl IntoBlock for Block {
    fn into_block(self) -> Option<Block> {
        Some(self)
    }
}

impl IntoBlock for Interval {
    fn into_block(self) -> Option<Block> {
        Some(Block::Interval(self))
    }
}

impl IntoBlock for IntervalSet {
    fn into_block(self) -> Option<Block> {
        Some(Block::Set(self))
    }
}

impl<T: IntoBlock> IntoBlock for Option<T> {
    fn into_block(self) -> Option<Block> {
        self.and_then(IntoBlock::into_block)
    }
}

/// Ordered labelled rows with cached aggregates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelSet {
    pairs: Vec<(String, Block)>,
    max_label_length: usize,
    boundaries: Option<Interval>,
}

impl LabelSet {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zip `source` with `source.len()` labels from `labels`.
    pub fn from_counted<I, V, G>(source: I, labels: &G) -> Self
    where
        I: IntoIterator<Item = V>,
        I::IntoIter: ExactSizeIterator,
        V: IntoBlock,
        G: LabelGenerator + ?Sized,
    {
        let iter = source.into_iter();
        let names = labels.generate(iter.len());
        let mut set = Self::new();
        for (name, value) in names.into_iter().zip(iter) {
            set.append(name, value);
        }
        set
    }

    /// Append each `(label, value)` as given.
    pub fn from_keyed<I, L, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, V)>,
        L: Display,
        V: IntoBlock,
    {
        let mut set = Self::new();
        set.extend(pairs);
        set
    }

    /// Store the pair, or drop it when the label renders empty or there is no
    /// value.
    pub fn append<L: Display, V: IntoBlock>(&mut self, label: L, value: V) {
        let label = label.to_string();
        if label.is_empty() {
            tracing::debug!("dropping pair with an empty label");
            return;
        }
        let Some(block) = value.into_block() else {
            tracing::debug!(label = %label, "dropping pair without a value");
            return;
        };

        self.max_label_length = self.max_label_length.max(label.width());
        if let Some(b) = block.boundaries() {
            self.boundaries = Some(match self.boundaries {
                Some(acc) => acc.merge(&b),
                None => b,
            });
        }
        self.pairs.push((label, block));
    }

    /// A new set holding the same values under fresh labels.
    #[must_use]
    pub fn relabel<G: LabelGenerator + ?Sized>(&self, labels: &G) -> Self {
        Self::from_counted(self.values().cloned().collect::<Vec<_>>(), labels)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(l, _)| l.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Block> {
        self.pairs.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Block)> {
        self.pairs.iter().map(|(l, v)| (l.as_str(), v))
    }

    /// Smallest interval covering every stored value.
    #[inline]
    #[must_use]
    pub fn boundaries(&self) -> Option<Interval> {
        self.boundaries
    }

    /// Display width of the widest label.
    #[inline]
    #[must_use]
    pub fn max_label_length(&self) -> usize {
        self.max_label_length
    }
}

impl<L: Display, V: IntoBlock> Extend<(L, V)> for LabelSet {
    fn extend<T: IntoIterator<Item = (L, V)>>(&mut self, iter: T) {
        for (label, value) in iter {
            self.append(label, value);
        }
    }
}

impl<L: Display, V: IntoBlock> FromIterator<(L, V)> for LabelSet {
    fn from_iter<T: IntoIterator<Item = (L, V)>>(iter: T) -> Self {
        Self::from_keyed(iter)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::core::label::{DecimalNumber, LatinLetter};

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2018, 1, d, 0, 0, 0).unwrap()
    }

    fn span(a: u32, b: u32) -> Interval {
        Interval::new(day(a), day(b)).unwrap()
    }

    #[test]
    fn empty_by_default() {
        let set = LabelSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.max_label_length(), 0);
        assert!(set.boundaries().is_none());
    }

    #[test]
    fn append_tracks_aggregates() {
        let mut set = LabelSet::new();
        set.append("A", span(3, 5));
        set.append(42, IntervalSet::from(vec![span(1, 2), span(8, 9)]));
        set.append("long label", span(4, 6));

        assert_eq!(set.len(), 3);
        assert_eq!(set.labels().collect::<Vec<_>>(), ["A", "42", "long label"]);
        assert_eq!(set.max_label_length(), 10);
        assert_eq!(set.boundaries(), Some(span(1, 9)));
    }

    #[test]
    fn unusable_pairs_are_dropped() {
        let mut set = LabelSet::new();
        set.append("A", span(1, 2));
        let before = set.clone();

        set.append("", span(1, 20));
        set.append("B", None::<Interval>);
        assert_eq!(set, before);
    }

    #[test]
    fn empty_sequence_is_kept_but_adds_no_boundary() {
        let mut set = LabelSet::new();
        set.append("E", IntervalSet::new());
        assert_eq!(set.len(), 1);
        assert!(set.boundaries().is_none());
        set.append("A", span(2, 4));
        assert_eq!(set.boundaries(), Some(span(2, 4)));
    }

    #[test]
    fn counted_source_uses_generator() {
        let set = LabelSet::from_counted(vec![span(1, 2), span(2, 3)], &LatinLetter::default());
        assert_eq!(set.labels().collect::<Vec<_>>(), ["A", "B"]);
    }

    #[test]
    fn keyed_source_keeps_keys() {
        let set: LabelSet = vec![("x", Some(span(1, 2))), ("y", None), ("z", Some(span(4, 5)))]
            .into_iter()
            .collect();
        assert_eq!(set.labels().collect::<Vec<_>>(), ["x", "z"]);
    }

    #[test]
    fn relabel_builds_a_new_set() {
        let set = LabelSet::from_keyed([("first", span(1, 2)), ("second", span(3, 4))]);
        let renamed = set.relabel(&DecimalNumber::new(7));
        assert_eq!(renamed.labels().collect::<Vec<_>>(), ["7", "8"]);
        assert_eq!(set.labels().collect::<Vec<_>>(), ["first", "second"]);
        assert_eq!(
            renamed.values().collect::<Vec<_>>(),
            set.values().collect::<Vec<_>>()
        );
        assert_eq!(renamed.boundaries(), set.boundaries());
    }
}
