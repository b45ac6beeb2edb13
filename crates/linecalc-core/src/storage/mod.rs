//! Reading calculator documents from plain text.
//!
//! Each text line is one document line, in order.

mod text;

pub use text::{parse_text, read_text};
