//! Recalculation, in place or off the interactive thread.
//!
//! A pass always covers the whole document. For large documents a caller can
//! take a [`PassRequest`] snapshot, run it on another thread and hand the
//! [`PassResult`] back with [`Document::apply`]. If the document was edited in
//! the meantime the result is stale and is discarded (last writer wins).

use super::Document;
use crate::error::{DocumentError, Result};
use linecalc_engine::engine::{Environment, Line, run_pass};

/// A snapshot of a document's lines, ready to be evaluated anywhere.
#[derive(Clone, Debug)]
pub struct PassRequest {
    pub revision: u64,
    pub lines: Vec<Line>,
}

/// The evaluated lines of a [`PassRequest`].
#[derive(Clone, Debug)]
pub struct PassResult {
    pub revision: u64,
    pub lines: Vec<Line>,
    pub variables: Environment,
}

impl PassRequest {
    pub fn run(mut self) -> PassResult {
        let variables = run_pass(&mut self.lines);
        PassResult {
            revision: self.revision,
            lines: self.lines,
            variables,
        }
    }
}

impl Document {
    /// Run a full pass synchronously and store the results.
    pub fn recalculate(&mut self) {
        self.variables = run_pass(&mut self.lines);
    }

    /// Snapshot the current lines for evaluation elsewhere.
    pub fn snapshot(&self) -> PassRequest {
        PassRequest {
            revision: self.revision,
            lines: self.lines.clone(),
        }
    }

    /// Store the results of a pass taken from [`Document::snapshot`].
    ///
    /// Fails with [`DocumentError::StaleRevision`] and leaves the document
    /// untouched if it was edited after the snapshot.
    pub fn apply(&mut self, result: PassResult) -> Result<()> {
        if result.revision != self.revision {
            log::debug!(
                "discarding pass for revision {} (current {})",
                result.revision,
                self.revision
            );
            return Err(DocumentError::StaleRevision {
                found: result.revision,
                current: self.revision,
            });
        }
        self.lines = result.lines;
        self.variables = result.variables;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recalculate_stores_results_and_variables() {
        let mut doc = Document::new();
        doc.push_line("price = 100");
        doc.push_line("tax = 10% of price");
        doc.push_line("price + tax");
        doc.recalculate();
        assert_eq!(doc.results(), vec!["100", "10", "110"]);
        assert_eq!(doc.variables().get("tax"), Some(10.0));
    }

    #[test]
    fn test_apply_current_snapshot() {
        let mut doc = Document::new();
        doc.push_line("2 * 21");
        let result = doc.snapshot().run();
        doc.apply(result).unwrap();
        assert_eq!(doc.results(), vec!["42"]);
    }

    #[test]
    fn test_apply_discards_stale_snapshot() {
        let mut doc = Document::new();
        doc.push_line("1 + 1");
        let result = doc.snapshot().run();
        doc.set_expression(0, "2 + 2").unwrap();
        assert!(matches!(
            doc.apply(result),
            Err(DocumentError::StaleRevision { found: 1, current: 2 })
        ));
        assert_eq!(doc.results(), vec![""]);
        assert_eq!(doc.lines()[0].expression, "2 + 2");
    }

    #[test]
    fn test_snapshot_runs_on_another_thread() {
        let mut doc = Document::new();
        doc.push_line("a = 6");
        doc.push_line("a * 7");
        let request = doc.snapshot();
        let result = std::thread::spawn(move || request.run()).join().unwrap();
        doc.apply(result).unwrap();
        assert_eq!(doc.results(), vec!["6", "42"]);
    }
}
