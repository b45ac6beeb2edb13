use crate::error::{DocumentError, Result};
use linecalc_engine::engine::{Environment, Line};
use std::path::PathBuf;

/// UI-agnostic state for one calculator document.
pub struct Document {
    /// Lines, kept sorted by position
    pub(crate) lines: Vec<Line>,
    /// File the document was loaded from, if any
    pub file_path: Option<PathBuf>,
    /// Whether any line has been edited since load
    pub modified: bool,
    /// Bumped on every edit; pass results from older revisions are discarded
    pub(crate) revision: u64,
    /// Variables as of the last applied pass
    pub(crate) variables: Environment,
}

impl Document {
    /// Create an empty document.
    ///
    /// This constructor is side-effect free: it does not touch the filesystem.
    pub fn new() -> Self {
        Document {
            lines: Vec::new(),
            file_path: None,
            modified: false,
            revision: 0,
            variables: Environment::new(),
        }
    }

    /// Create a document from existing line records.
    /// Positions must be unique.
    pub fn from_lines(mut lines: Vec<Line>) -> Result<Self> {
        lines.sort_by_key(|l| l.position);
        if let Some(pair) = lines.windows(2).find(|w| w[0].position == w[1].position) {
            return Err(DocumentError::DuplicatePosition(pair[0].position));
        }
        Ok(Document {
            lines,
            ..Self::new()
        })
    }

    /// Lines in position order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Results in position order, as of the last applied pass.
    pub fn results(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.result.as_str()).collect()
    }

    pub fn line(&self, position: i64) -> Option<&Line> {
        self.index_of(position).map(|idx| &self.lines[idx])
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Variables bound by the last applied pass.
    pub fn variables(&self) -> &Environment {
        &self.variables
    }

    pub(crate) fn index_of(&self, position: i64) -> Option<usize> {
        self.lines
            .binary_search_by_key(&position, |l| l.position)
            .ok()
    }

    pub(crate) fn touch(&mut self) {
        self.revision += 1;
        self.modified = true;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
