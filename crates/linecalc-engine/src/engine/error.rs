//! Per-line evaluation errors.

use thiserror::Error;

/// Display marker for any line that failed to evaluate.
pub const ERROR_MARKER: &str = "Err";

/// Errors that can occur while evaluating a single line.
///
/// None of these are fatal to a pass: they are caught at the line boundary
/// and rendered as [`ERROR_MARKER`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Syntax error at column {column}: {message}")]
    Syntax { column: usize, message: String },

    #[error("Unbound identifier: {0}")]
    UnboundIdentifier(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Undefined result")]
    Undefined,
}

impl CalcError {
    pub(crate) fn syntax(column: usize, message: impl Into<String>) -> Self {
        CalcError::Syntax {
            column,
            message: message.into(),
        }
    }

    /// Short, stable name of the error kind (used for logging).
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::Syntax { .. } => "syntax",
            CalcError::UnboundIdentifier(_) => "unbound",
            CalcError::DivisionByZero | CalcError::Undefined => "arithmetic",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
