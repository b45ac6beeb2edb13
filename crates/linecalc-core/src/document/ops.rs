use super::Document;
use crate::error::{DocumentError, Result};
use linecalc_engine::engine::Line;

impl Document {
    /// Append a line after the last one. Returns its position.
    pub fn push_line(&mut self, expression: &str) -> i64 {
        let position = self.lines.last().map(|l| l.position + 1).unwrap_or(0);
        self.lines.push(Line::new(position, expression));
        self.touch();
        position
    }

    /// Insert a line at an unused position.
    pub fn insert_line(&mut self, position: i64, expression: &str) -> Result<()> {
        match self
            .lines
            .binary_search_by_key(&position, |l| l.position)
        {
            Ok(_) => Err(DocumentError::DuplicatePosition(position)),
            Err(idx) => {
                self.lines.insert(idx, Line::new(position, expression));
                self.touch();
                Ok(())
            }
        }
    }

    /// Replace the expression of the line at `position`.
    ///
    /// The old result is kept until the next pass is applied.
    pub fn set_expression(&mut self, position: i64, expression: &str) -> Result<()> {
        let idx = self
            .index_of(position)
            .ok_or(DocumentError::UnknownPosition(position))?;
        if self.lines[idx].expression != expression {
            self.lines[idx].expression = expression.to_string();
            self.touch();
        }
        Ok(())
    }

    /// Remove and return the line at `position`.
    pub fn remove_line(&mut self, position: i64) -> Result<Line> {
        let idx = self
            .index_of(position)
            .ok_or(DocumentError::UnknownPosition(position))?;
        let line = self.lines.remove(idx);
        self.touch();
        Ok(line)
    }
}
