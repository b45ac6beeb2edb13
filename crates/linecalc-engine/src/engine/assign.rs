/// A line split into an optional assignment target and the expression text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement<'a> {
    pub target: Option<&'a str>,
    pub expression: &'a str,
}

/// Split `name = expr`.
///
/// Only a line with exactly one `=` is an assignment. With zero or several
/// `=` the whole (trimmed) text is the expression, which usually fails to
/// evaluate downstream.
pub fn split_assignment(text: &str) -> Statement<'_> {
    let mut parts = text.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(lhs), Some(rhs), None) => Statement {
            target: Some(lhs.trim()),
            expression: rhs.trim(),
        },
        _ => Statement {
            target: None,
            expression: text.trim(),
        },
    }
}
