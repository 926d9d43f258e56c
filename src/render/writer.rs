//! Line writer that resolves `<<colour>>` markers for its target.
//!
//! The escape strategy is fixed when the writer is built: ANSI targets get
//! `ESC[<codes>m`, plain targets get the bare text. Every `write_line` ends
//! with a newline and a flush so lines show up immediately and in order.

use std::io::{self, IsTerminal, Stdout, Write, stdout};

use crate::core::color::{Color, MARKER_CLOSE, MARKER_OPEN, mark};

#[cfg(windows)]
const NEWLINE: &str = "\r\n";
#[cfg(not(windows))]
const NEWLINE: &str = "\n";

/// What the target understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// SGR escape sequences.
    Ansi,
    /// Markers are stripped.
    Plain,
}

pub struct Writer<W: Write> {
    sink: W,
    style: Style,
    // colour name -> SGR parameter
    codes: [(&'static str, &'static str); 9],
}

impl Writer<Stdout> {
    /// Standard output, ANSI when it is a terminal and `NO_COLOR` is unset.
    #[must_use]
    pub fn stdout() -> Self {
        let out = stdout();
        let tty = out.is_terminal();
        Self::detect(out, tty)
    }
}

impl<W: Write> Writer<W> {
    #[must_use]
    pub fn new(sink: W, style: Style) -> Self {
        tracing::debug!(?style, "writer ready");
        Self {
            sink,
            style,
            codes: Color::ALL.map(|c| (c.name(), c.sgr())),
        }
    }

    #[inline]
    #[must_use]
    pub fn ansi(sink: W) -> Self {
        Self::new(sink, Style::Ansi)
    }

    #[inline]
    #[must_use]
    pub fn plain(sink: W) -> Self {
        Self::new(sink, Style::Plain)
    }

    /// ANSI iff `is_terminal` and the user has not set `NO_COLOR`.
    #[must_use]
    pub fn detect(sink: W, is_terminal: bool) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        let style = if is_terminal && !no_color {
            Style::Ansi
        } else {
            Style::Plain
        };
        Self::new(sink, style)
    }

    #[inline]
    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Mark `text` with `color`; the reset colour leaves it untouched.
    #[must_use]
    pub fn colorize(&self, text: &str, color: Color) -> String {
        if color.is_reset() {
            return text.to_owned();
        }
        mark(color, text)
    }

    /// Same as [`Writer::colorize`] from a colour name; unknown names apply
    /// no colour.
    #[must_use]
    pub fn colorize_name(&self, text: &str, name: &str) -> String {
        match Color::from_name(name) {
            Some(color) => self.colorize(text, color),
            None => {
                tracing::debug!(name, "unknown colour, leaving text as is");
                text.to_owned()
            }
        }
    }

    fn sgr(&self, name: &str) -> Option<&'static str> {
        let name = name.to_ascii_lowercase();
        self.codes
            .iter()
            .find_map(|(n, code)| (*n == name).then_some(*code))
    }

    /// Resolve a marker body like `red` or `red reset` to SGR parameters.
    fn marker_codes(&self, body: &str) -> Option<String> {
        let mut codes = Vec::new();
        for name in body.split_whitespace() {
            codes.push(self.sgr(name)?);
        }
        (!codes.is_empty()).then(|| codes.join(";"))
    }

    /// Replace every recognised marker with its escape (or nothing).
    #[must_use]
    pub fn format(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 16);
        let mut rest = text;

        while let Some(open) = rest.find(MARKER_OPEN) {
            let after_open = &rest[open + MARKER_OPEN.len()..];
            let Some(close) = after_open.find(MARKER_CLOSE) else {
                break;
            };
            out.push_str(&rest[..open]);
            match self.marker_codes(&after_open[..close]) {
                Some(codes) => {
                    if self.style == Style::Ansi {
                        out.push_str("\x1b[");
                        out.push_str(&codes);
                        out.push('m');
                    }
                    rest = &after_open[close + MARKER_CLOSE.len()..];
                }
                None => {
                    // not a marker: keep one `<` and rescan from the next byte
                    out.push('<');
                    rest = &rest[open + 1..];
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// Format `text`, append the platform newline, write and flush.
    ///
    /// # Errors
    /// Any I/O error from the sink.
    pub fn write_line(&mut self, text: &str) -> io::Result<usize> {
        let mut line = self.format(text);
        line.push_str(NEWLINE);
        self.sink.write_all(line.as_bytes())?;
        self.sink.flush()?;
        Ok(line.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_leaves_text_alone() {
        let w = Writer::ansi(Vec::new());
        assert_eq!(w.colorize("toto", Color::Reset), "toto");
        assert_eq!(w.colorize_name("toto", "reset"), "toto");
    }

    #[test]
    fn colour_becomes_sgr_on_ansi() {
        let w = Writer::ansi(Vec::new());
        let marked = w.colorize_name("toto", "white");
        assert_eq!(marked, "<<white>>toto<<reset>>");
        assert_eq!(w.format(&marked), "\x1b[37mtoto\x1b[0m");
    }

    #[test]
    fn plain_strips_markers() {
        let w = Writer::plain(Vec::new());
        let marked = w.colorize("toto", Color::Red);
        assert_eq!(w.format(&marked), "toto");
    }

    #[test]
    fn unknown_colour_is_not_an_error() {
        let w = Writer::ansi(Vec::new());
        assert_eq!(w.colorize_name("toto", "chartreuse"), "toto");
    }

    #[test]
    fn combined_and_foreign_markers() {
        let w = Writer::ansi(Vec::new());
        assert_eq!(w.format("<< RED  blue >>x"), "\x1b[31;34mx");
        assert_eq!(w.format("a <<b>> c"), "a <<b>> c");
        assert_eq!(w.format("<<red"), "<<red");
        assert_eq!(w.format("<<<red>>x"), "<\x1b[31mx");
    }

    #[test]
    fn write_line_flushes_each_line() {
        let mut w = Writer::ansi(Vec::new());
        let n = w.write_line("<<green>>ok<<reset>>").unwrap();
        let m = w.write_line("plain").unwrap();
        let out = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(out, format!("\x1b[32mok\x1b[0m{NEWLINE}plain{NEWLINE}"));
        assert_eq!(n + m, out.len());
    }
}
