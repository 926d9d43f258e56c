//! A collection of constants.

/// Rows are never narrower than 10 columns
pub const MIN_WIDTH: usize = 10;
/// Row width used when nothing else is asked for
pub const DEFAULT_WIDTH: usize = 60;

/// One space between the label column and the bars
pub const DEFAULT_GAP_SIZE: usize = 1;
/// No margin in front of the label column
pub const DEFAULT_LEFT_MARGIN: usize = 0;

pub const DEFAULT_SPACE: &str = " ";
pub const DEFAULT_BODY: &str = "-";
pub const DEFAULT_START_INCLUDED: &str = "[";
pub const DEFAULT_START_EXCLUDED: &str = "(";
pub const DEFAULT_END_INCLUDED: &str = "]";
pub const DEFAULT_END_EXCLUDED: &str = ")";

/// Label used by the viewer when the caller leaves the result label blank.
pub const DEFAULT_RESULT_LABEL: &str = "RESULT";

/// Columns kept free for the label column when sizing against the terminal.
pub const LABEL_RESERVE: usize = 16;
