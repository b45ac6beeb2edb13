use serde::{Deserialize, Serialize};

/// A single line of a calculator document.
///
/// `position` decides evaluation order; it does not need to be contiguous or
/// positive. `result` is owned by the engine and overwritten on every pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub position: i64,
    pub expression: String,
    #[serde(default)]
    pub result: String,
}

impl Line {
    pub fn new(position: i64, expression: &str) -> Self {
        Line {
            position,
            expression: expression.to_string(),
            result: String::new(),
        }
    }
}
