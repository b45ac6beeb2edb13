use super::Document;
use crate::error::Result;
use crate::storage::{parse_text, read_text};
use linecalc_engine::engine::Environment;
use std::path::Path;

impl Document {
    /// Build a document from plain text, one line per text line.
    pub fn from_text(content: &str) -> Self {
        Document {
            lines: parse_text(content),
            ..Self::new()
        }
    }

    /// Replace the document contents with a text file.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        self.lines = read_text(path)?;
        self.variables = Environment::new();
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        self.revision += 1;
        log::debug!("loaded {} lines from {}", self.lines.len(), path.display());
        Ok(())
    }
}
