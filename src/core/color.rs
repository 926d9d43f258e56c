//! POSIX colour palette, SGR escapes and the `<<colour>>` marker syntax.
//!
//! Colour requests travel through the renderer as marker pairs
//! (`<<red>>text<<reset>>`); only the writer decides whether they become
//! escape sequences or disappear.

use std::fmt;

/// Opening delimiter of a colour marker.
pub const MARKER_OPEN: &str = "<<";
/// Closing delimiter of a colour marker.
pub const MARKER_CLOSE: &str = ">>";

// --- Color ---
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// The default colour, also the "no colour" sentinel.
    #[default]
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Every known colour, sentinel included.
    pub const ALL: [Color; 9] = [
        Color::Reset,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// The drawable palette in its defined (rainbow) order.
    pub const PALETTE: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// SGR parameter for this colour.
    #[must_use]
    pub const fn sgr(self) -> &'static str {
        match self {
            Self::Reset => "0",
            Self::Black => "30",
            Self::Red => "31",
            Self::Green => "32",
            Self::Yellow => "33",
            Self::Blue => "34",
            Self::Magenta => "35",
            Self::Cyan => "36",
            Self::White => "37",
        }
    }

    /// Case-insensitive lookup; unknown names yield `None`.
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == wanted)
    }

    #[inline]
    #[must_use]
    pub const fn is_reset(self) -> bool {
        matches!(self, Self::Reset)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wrap `text` in a marker pair: `<<color>>text<<reset>>`.
#[inline]
#[must_use]
pub fn mark(color: Color, text: &str) -> String {
    format!(
        "{MARKER_OPEN}{color}{MARKER_CLOSE}{text}{MARKER_OPEN}{}{MARKER_CLOSE}",
        Color::Reset
    )
}
