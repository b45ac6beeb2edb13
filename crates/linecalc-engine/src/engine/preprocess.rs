//! Line preprocessing.
//!
//! Before a line can be evaluated, its raw text is reduced to a canonical
//! arithmetic form. This module handles the purely textual stages:
//!
//! - **Comments**: `10 + 5 # note` → `10 + 5`
//! - **Operators**: `5 × 6 ÷ 2` → `5 * 6 / 2`
//! - **Identifiers**: `monthly salary * 12` → `monthly_salary * 12`
//!
//! Percentage idioms are rewritten by [`crate::engine::rewrite_percentages`].

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Marker that starts a trailing comment.
pub const COMMENT_MARKER: char = '#';

/// Character used to join the words of a multi-word identifier.
pub const IDENT_JOIN: char = '_';

/// Words that follow `A%` in percentage idioms.
const PERCENT_KEYWORDS: [&str; 2] = ["of", "off"];

/// Strip a trailing `#` comment.
///
/// With a marker present, returns the text before it, trimmed. Without one,
/// the text is returned unchanged (not trimmed).
pub fn strip_comment(text: &str) -> &str {
    match text.find(COMMENT_MARKER) {
        Some(idx) => text[..idx].trim(),
        None => text,
    }
}

/// Replace `×` with `*` and `÷` with `/`.
pub fn normalize_operators(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '×' => '*',
            '÷' => '/',
            other => other,
        })
        .collect()
}

fn multi_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([A-Za-z][A-Za-z0-9_]*(?:[ \t]+[A-Za-z0-9_]+)+)(\s*(?:[=+\-*/^()]|$))")
            .unwrap()
    })
}

/// Join multi-word names that sit before an operator, `=`, a parenthesis or
/// the end of the text: `base price + 100` → `base_price + 100`.
///
/// An `of`/`off` right after a `%` stays a separate word, so
/// `20% of monthly salary` becomes `20% of monthly_salary`. Anywhere else it
/// is part of the name: `cost of living` → `cost_of_living`.
pub fn normalize_identifiers(text: &str) -> String {
    multi_word_re()
        .replace_all(text, |caps: &Captures| {
            let start = caps.get(0).map_or(0, |m| m.start());
            let after_percent = text[..start].trim_end().ends_with('%');

            let words: Vec<&str> = caps[1].split_whitespace().collect();
            let split = match words.first() {
                Some(first) if after_percent && PERCENT_KEYWORDS.contains(first) => 1,
                _ => 0,
            };

            let (kept, joined) = words.split_at(split);
            let mut out = kept.join(" ");
            if !kept.is_empty() && !joined.is_empty() {
                out.push(' ');
            }
            out.push_str(&joined.join(IDENT_JOIN.to_string().as_str()));
            out.push_str(&caps[2]);
            out
        })
        .into_owned()
}
