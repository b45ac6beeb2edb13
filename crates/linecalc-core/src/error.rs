//! Error types for linecalc core.

use thiserror::Error;

/// Errors that can occur while editing or loading a document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No line at position {0}")]
    UnknownPosition(i64),

    #[error("A line already exists at position {0}")]
    DuplicatePosition(i64),

    #[error("Stale pass result (revision {found}, document is at {current})")]
    StaleRevision { found: u64, current: u64 },
}

pub type Result<T> = std::result::Result<T, DocumentError>;
