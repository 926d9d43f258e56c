//! Row label generators.
//!
//! A generator produces `count` labels in order and can `format` a free-form
//! label the same way it decorates its own. Decorators wrap any other
//! generator, boxed ones included.

/// Produces and decorates row labels.
pub trait LabelGenerator {
    /// `count` labels, in row order.
    fn generate(&self, count: usize) -> Vec<String>;

    /// Apply this generator's decoration to an arbitrary label.
    fn format(&self, label: &str) -> String;
}

impl<G: LabelGenerator + ?Sized> LabelGenerator for Box<G> {
    fn generate(&self, count: usize) -> Vec<String> {
        (**self).generate(count)
    }
    fn format(&self, label: &str) -> String {
        (**self).format(label)
    }
}

impl<G: LabelGenerator + ?Sized> LabelGenerator for &G {
    fn generate(&self, count: usize) -> Vec<String> {
        (**self).generate(count)
    }
    fn format(&self, label: &str) -> String {
        (**self).format(label)
    }
}

// --- LatinLetter ---

/// `A, B, … Z, AA, AB, …` starting from any letter string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatinLetter {
    start: String,
}

impl Default for LatinLetter {
    fn default() -> Self {
        Self {
            start: "A".to_owned(),
        }
    }
}

impl LatinLetter {
    #[must_use]
    pub fn new(start: &str) -> Self {
        Self {
            start: filter_letters(start),
        }
    }

    #[must_use]
    pub fn starting_at(&self) -> &str {
        &self.start
    }

    #[must_use]
    pub fn starts_with(self, start: &str) -> Self {
        Self {
            start: filter_letters(start),
        }
    }
}

/// Trimmed letters pass; blank becomes `"0"`, anything else `"A"`.
fn filter_letters(s: &str) -> String {
    let s = s.trim();
    if s.is_empty() {
        return "0".to_owned();
    }
    if !s.bytes().all(|b| b.is_ascii_alphabetic()) {
        return "A".to_owned();
    }
    s.to_owned()
}

/// Alphanumeric successor: `Az -> Ba`, `zz -> aaa`, `9 -> 10`.
fn successor(s: &str) -> String {
    let mut bytes = s.as_bytes().to_vec();
    for i in (0..bytes.len()).rev() {
        match bytes[i] {
            b'z' => bytes[i] = b'a',
            b'Z' => bytes[i] = b'A',
            b'9' => bytes[i] = b'0',
            b if b.is_ascii_alphanumeric() => {
                bytes[i] = b + 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
            _ => return String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
    // carried past the first character
    let lead = match bytes.first() {
        Some(b'a') => b'a',
        Some(b'A') => b'A',
        _ => b'1',
    };
    bytes.insert(0, lead);
    String::from_utf8_lossy(&bytes).into_owned()
}

impl LabelGenerator for LatinLetter {
    fn generate(&self, count: usize) -> Vec<String> {
        let mut labels = Vec::with_capacity(count);
        let mut current = self.start.clone();
        for _ in 0..count {
            let next = successor(&current);
            labels.push(current);
            current = next;
        }
        labels
    }

    fn format(&self, label: &str) -> String {
        filter_letters(label)
    }
}

// --- DecimalNumber ---

/// `1, 2, 3, …`, optionally zero-padded to the widest label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalNumber {
    start: u64,
    padded: bool,
}

impl Default for DecimalNumber {
    fn default() -> Self {
        Self {
            start: 1,
            padded: false,
        }
    }
}

impl DecimalNumber {
    /// Starts below 1 fall back to 1.
    #[must_use]
    pub fn new(start: i64) -> Self {
        Self::default().starts_with(start)
    }

    #[must_use]
    pub fn starting_at(&self) -> u64 {
        self.start
    }

    #[must_use]
    pub fn is_padded(&self) -> bool {
        self.padded
    }

    #[must_use]
    pub fn starts_with(self, start: i64) -> Self {
        Self {
            start: u64::try_from(start).ok().filter(|&n| n > 0).unwrap_or(1),
            ..self
        }
    }

    #[must_use]
    pub fn with_padding(self) -> Self {
        Self {
            padded: true,
            ..self
        }
    }

    #[must_use]
    pub fn without_padding(self) -> Self {
        Self {
            padded: false,
            ..self
        }
    }

    fn numbers(&self, count: usize) -> std::ops::Range<u64> {
        self.start..self.start + count as u64
    }
}

impl LabelGenerator for DecimalNumber {
    fn generate(&self, count: usize) -> Vec<String> {
        if count == 0 {
            return Vec::new();
        }
        if !self.padded {
            return self.numbers(count).map(|n| n.to_string()).collect();
        }
        let last = self.start + count as u64 - 1;
        let pad = last.to_string().len();
        self.numbers(count).map(|n| format!("{n:0pad$}")).collect()
    }

    fn format(&self, label: &str) -> String {
        label.to_owned()
    }
}

// --- RomanNumber ---

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LetterCase {
    #[default]
    Upper,
    Lower,
}

const ROMAN_MAP: [(&str, u64); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Largest value written without overlined numerals.
const ROMAN_MAX: u64 = 3999;

fn to_roman(mut n: u64) -> String {
    let mut out = String::new();
    for (glyph, value) in ROMAN_MAP {
        while n >= value {
            out.push_str(glyph);
            n -= value;
        }
    }
    out
}

/// Roman numerals over a [`DecimalNumber`] sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RomanNumber {
    inner: DecimalNumber,
    case: LetterCase,
}

impl RomanNumber {
    #[must_use]
    pub fn new(inner: DecimalNumber, case: LetterCase) -> Self {
        Self { inner, case }
    }

    #[must_use]
    pub fn starting_at(&self) -> u64 {
        self.inner.starting_at()
    }

    #[must_use]
    pub fn is_upper(&self) -> bool {
        self.case == LetterCase::Upper
    }

    #[must_use]
    pub fn starts_with(self, start: i64) -> Self {
        Self {
            inner: self.inner.starts_with(start),
            ..self
        }
    }

    #[must_use]
    pub fn with_letter_case(self, case: LetterCase) -> Self {
        Self { case, ..self }
    }
}

impl LabelGenerator for RomanNumber {
    fn generate(&self, count: usize) -> Vec<String> {
        self.inner
            .generate(count)
            .iter()
            .map(|l| self.format(l))
            .collect()
    }

    /// Decimal strings in `1..=3999` convert, anything else becomes empty.
    fn format(&self, label: &str) -> String {
        match label.trim().parse::<u64>() {
            Ok(n @ 1..=ROMAN_MAX) => {
                let roman = to_roman(n);
                match self.case {
                    LetterCase::Upper => roman,
                    LetterCase::Lower => roman.to_ascii_lowercase(),
                }
            }
            _ => String::new(),
        }
    }
}

// --- decorators ---

fn strip_newlines(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

/// Adds a prefix and/or suffix to every label of another generator.
#[derive(Clone, Debug)]
pub struct AffixLabel<G> {
    inner: G,
    prefix: String,
    suffix: String,
}

impl<G: LabelGenerator> AffixLabel<G> {
    #[must_use]
    pub fn new(inner: G, prefix: &str, suffix: &str) -> Self {
        Self {
            inner,
            prefix: strip_newlines(prefix),
            suffix: strip_newlines(suffix),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[must_use]
    pub fn with_prefix(self, prefix: &str) -> Self {
        Self {
            prefix: strip_newlines(prefix),
            ..self
        }
    }

    #[must_use]
    pub fn with_suffix(self, suffix: &str) -> Self {
        Self {
            suffix: strip_newlines(suffix),
            ..self
        }
    }
}

impl<G: LabelGenerator> LabelGenerator for AffixLabel<G> {
    fn generate(&self, count: usize) -> Vec<String> {
        self.inner
            .generate(count)
            .iter()
            .map(|l| self.format(l))
            .collect()
    }

    fn format(&self, label: &str) -> String {
        format!("{}{label}{}", self.prefix, self.suffix)
    }
}

/// Generates another generator's labels in reverse order.
#[derive(Clone, Debug)]
pub struct ReverseLabel<G> {
    inner: G,
}

impl<G: LabelGenerator> ReverseLabel<G> {
    #[must_use]
    pub fn new(inner: G) -> Self {
        Self { inner }
    }
}

impl<G: LabelGenerator> LabelGenerator for ReverseLabel<G> {
    fn generate(&self, count: usize) -> Vec<String> {
        let mut labels = self.inner.generate(count);
        labels.reverse();
        labels
    }

    fn format(&self, label: &str) -> String {
        self.inner.format(label)
    }
}
