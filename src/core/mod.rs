//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod interval;
pub mod label;
pub mod rng;

// re-export frequently-used items for convenience
pub use bounds::Scale;
pub use color::Color;
pub use config::{GlyphKind, LabelAlign, RenderConfig};
pub use constants::{DEFAULT_WIDTH, MIN_WIDTH};
pub use dataset::{Block, IntoBlock, LabelSet};
pub use error::{ConfigError, GanttError, IntervalError};
pub use interval::{Bounds, Interval, IntervalSet};
pub use label::{
    AffixLabel, DecimalNumber, LabelGenerator, LatinLetter, LetterCase, ReverseLabel, RomanNumber,
};
