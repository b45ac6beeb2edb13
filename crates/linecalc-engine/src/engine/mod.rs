//! Calculation engine API.
//!
//! This module turns the raw lines of a calculator document into results:
//!
//! - [`Line`] - A document line (position, expression, result)
//! - [`Environment`] - Pass-scoped variables
//! - [`strip_comment`], [`normalize_operators`], [`normalize_identifiers`] - Text cleanup
//! - [`rewrite_percentages`] - Percentage idioms to arithmetic
//! - [`split_assignment`] - `name = expr` detection
//! - [`parse_expression`], [`evaluate`] - Arithmetic evaluation
//! - [`format_number`] - Format values for display
//! - [`run_pass`], [`calculate`] - Evaluate a whole document

mod assign;
mod env;
mod error;
mod eval;
mod format;
mod line;
mod pass;
mod percent;
mod preprocess;

pub use assign::{Statement, split_assignment};
pub use env::Environment;
pub use error::{CalcError, ERROR_MARKER, Result};
pub use eval::{BinOp, Expr, evaluate, parse_expression};
pub use format::{format_number, format_result};
pub use line::Line;
pub use pass::{Outcome, calculate, evaluate_line, preprocess_line, run_pass};
pub use percent::{PERCENT_RULES, PercentRule, rewrite_percentages};
pub use preprocess::{
    COMMENT_MARKER, IDENT_JOIN, normalize_identifiers, normalize_operators, strip_comment,
};
