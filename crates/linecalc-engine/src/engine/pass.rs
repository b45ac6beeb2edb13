//! Evaluation passes over a whole document.
//!
//! A pass walks the lines in `position` order with a fresh [`Environment`].
//! Each line goes through the same pipeline:
//!
//! 1. strip the `#` comment (blank lines stop here with an empty result)
//! 2. normalize `×`/`÷`
//! 3. join multi-word identifiers
//! 4. rewrite percentage idioms
//! 5. split `name = expr`
//! 6. evaluate against the environment
//! 7. format, and bind the target on success
//!
//! Errors never leave a line: they become `Err` and bind nothing.

use super::assign::split_assignment;
use super::env::Environment;
use super::error::{CalcError, ERROR_MARKER};
use super::eval::evaluate;
use super::format::format_number;
use super::line::Line;
use super::percent::rewrite_percentages;
use super::preprocess::{normalize_identifiers, normalize_operators, strip_comment};

/// Result of evaluating one line.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Nothing to compute (empty, whitespace or comment only).
    Blank,
    Value { value: f64, target: Option<String> },
    Failed(CalcError),
}

impl Outcome {
    /// Text shown beside the line.
    pub fn display(&self) -> String {
        match self {
            Outcome::Blank => String::new(),
            Outcome::Value { value, .. } => format_number(*value),
            Outcome::Failed(_) => ERROR_MARKER.to_string(),
        }
    }
}

/// Run the textual stages on a raw line. Returns `None` for lines with
/// nothing to compute.
pub fn preprocess_line(raw: &str) -> Option<String> {
    let text = strip_comment(raw);
    if text.trim().is_empty() {
        return None;
    }
    let text = normalize_operators(text);
    let text = normalize_identifiers(&text);
    Some(rewrite_percentages(&text))
}

/// Evaluate a single raw line, binding its target in `env` on success.
pub fn evaluate_line(raw: &str, env: &mut Environment) -> Outcome {
    let Some(text) = preprocess_line(raw) else {
        return Outcome::Blank;
    };
    log::trace!("preprocessed {:?} -> {:?}", raw, text);

    let stmt = split_assignment(&text);
    if stmt.target == Some("") {
        return Outcome::Failed(CalcError::syntax(1, "missing assignment target"));
    }

    match evaluate(stmt.expression, env) {
        Ok(value) => {
            if let Some(target) = stmt.target {
                env.assign(target, value);
            }
            Outcome::Value {
                value,
                target: stmt.target.map(str::to_string),
            }
        }
        Err(e) => Outcome::Failed(e),
    }
}

/// Evaluate every line in `position` order and fill in `result`.
///
/// The slice itself is never reordered. Lines sharing a position keep their
/// relative order. Returns the environment as it stands after the last line.
pub fn run_pass(lines: &mut [Line]) -> Environment {
    let mut order: Vec<usize> = (0..lines.len()).collect();
    order.sort_by_key(|&idx| lines[idx].position);

    let mut env = Environment::new();
    let mut failures = 0usize;
    for idx in order {
        let line = &mut lines[idx];
        let outcome = evaluate_line(&line.expression, &mut env);
        if let Outcome::Failed(e) = &outcome {
            failures += 1;
            log::debug!("line at position {} failed ({}): {}", line.position, e.kind(), e);
        }
        line.result = outcome.display();
    }

    log::debug!(
        "pass complete: {} lines, {} failed, {} variables bound",
        lines.len(),
        failures,
        env.len()
    );
    env
}

/// Evaluate a document and return its lines with results populated.
pub fn calculate(mut lines: Vec<Line>) -> Vec<Line> {
    run_pass(&mut lines);
    lines
}
