//! Document loading and recalculation through the public API.

use linecalc_core::{Document, DocumentError, Line};
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn load_file_and_recalculate() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "# Monthly budget\nincome = 5000\nrent = 1200 # apartment\n\nincome - rent\n"
    )
    .unwrap();

    let mut doc = Document::new();
    doc.load_file(file.path()).unwrap();
    assert_eq!(doc.len(), 5);
    assert!(!doc.modified);
    assert_eq!(doc.file_path.as_deref(), Some(file.path()));

    doc.recalculate();
    assert_eq!(doc.results(), vec!["", "5000", "1200", "", "3800"]);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = Document::new();
    let err = doc.load_file(&dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, DocumentError::Io(_)));
}

#[test]
fn from_lines_rejects_duplicate_positions() {
    let err = Document::from_lines(vec![Line::new(1, "a"), Line::new(1, "b")]);
    assert!(matches!(err, Err(DocumentError::DuplicatePosition(1))));
}

#[test]
fn from_lines_orders_by_position() {
    let mut doc =
        Document::from_lines(vec![Line::new(5, "x * 3"), Line::new(-1, "x = 2")]).unwrap();
    doc.recalculate();
    assert_eq!(doc.results(), vec!["2", "6"]);
}

#[test]
fn edits_take_effect_on_next_pass() {
    let mut doc = Document::from_text("x = 5\nx * 2\nx = 10\nx * 2");
    doc.recalculate();
    assert_eq!(doc.results(), vec!["5", "10", "10", "20"]);

    doc.set_expression(0, "x = 1").unwrap();
    assert_eq!(doc.results(), vec!["5", "10", "10", "20"]);
    doc.recalculate();
    assert_eq!(doc.results(), vec!["1", "2", "10", "20"]);

    doc.remove_line(2).unwrap();
    doc.recalculate();
    assert_eq!(doc.results(), vec!["1", "2", "2"]);
}

#[test]
fn superseded_pass_is_discarded() {
    let mut doc = Document::from_text("a = 1\na + 1");
    let slow = doc.snapshot();
    doc.set_expression(0, "a = 100").unwrap();
    let fresh = doc.snapshot();

    let fresh_result = fresh.run();
    let slow_result = slow.run();

    doc.apply(fresh_result).unwrap();
    assert!(doc.apply(slow_result).is_err());
    assert_eq!(doc.results(), vec!["100", "101"]);
}
