pub mod line;
pub mod matrix;
pub mod viewer;
pub mod writer;

pub use line::{Chart, pad_label, render_lines, render_row};
pub use matrix::{Matrix, Token};
pub use viewer::Viewer;
pub use writer::{Style, Writer};
