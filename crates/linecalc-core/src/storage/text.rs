use crate::error::Result;
use linecalc_engine::engine::Line;
use std::fs;
use std::path::Path;

/// Read a plain text file into lines with positions `0..n`.
pub fn read_text(path: &Path) -> Result<Vec<Line>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_text(&content))
}

/// Split text into lines with positions `0..n`.
///
/// Blank lines are kept (they evaluate to an empty result). A trailing
/// newline does not produce an extra line.
pub fn parse_text(content: &str) -> Vec<Line> {
    content
        .lines()
        .enumerate()
        .map(|(i, text)| Line::new(i as i64, text))
        .collect()
}
