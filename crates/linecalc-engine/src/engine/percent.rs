//! Percentage idiom rewriting.
//!
//! Four idioms are rewritten into plain arithmetic before evaluation. The
//! rules are applied in table order and the order is load-bearing: `off` and
//! `of` must run before the additive forms so that their operands are not
//! captured by `B + A%` / `B - A%`.
//!
//! | idiom      | rewritten form          |
//! |------------|-------------------------|
//! | `A% off B` | `(B - B * A / 100)`     |
//! | `A% of B`  | `(B * A / 100)`         |
//! | `B + A%`   | `(B * (1 + A / 100))`   |
//! | `B - A%`   | `(B * (1 - A / 100))`   |

use regex::Regex;
use std::sync::OnceLock;

/// A single rewrite rule: pattern and replacement template.
pub struct PercentRule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub template: &'static str,
}

/// Rewrite rules, in application order.
pub const PERCENT_RULES: [PercentRule; 4] = [
    PercentRule {
        name: "off",
        pattern: r"(\d+(?:\.\d+)?)\s*%\s+off\s+(\d+(?:\.\d+)?|\w+)",
        template: "(${2} - ${2} * ${1} / 100)",
    },
    PercentRule {
        name: "of",
        pattern: r"(\d+(?:\.\d+)?)\s*%\s+of\s+(\d+(?:\.\d+)?|\w+)",
        template: "(${2} * ${1} / 100)",
    },
    PercentRule {
        name: "add",
        pattern: r"(\d+(?:\.\d+)?|\w+)\s*\+\s*(\d+(?:\.\d+)?)\s*%",
        template: "(${1} * (1 + ${2} / 100))",
    },
    PercentRule {
        name: "subtract",
        pattern: r"(\d+(?:\.\d+)?|\w+)\s*-\s*(\d+(?:\.\d+)?)\s*%",
        template: "(${1} * (1 - ${2} / 100))",
    },
];

fn compiled_rules() -> &'static [Regex] {
    static RULES: OnceLock<Vec<Regex>> = OnceLock::new();
    RULES.get_or_init(|| {
        PERCENT_RULES
            .iter()
            .map(|rule| Regex::new(rule.pattern).unwrap())
            .collect()
    })
}

/// Rewrite every percentage idiom in `text`.
pub fn rewrite_percentages(text: &str) -> String {
    let mut out = text.to_string();
    for (rule, re) in PERCENT_RULES.iter().zip(compiled_rules()) {
        let rewritten = re.replace_all(&out, rule.template);
        if rewritten != out {
            log::trace!("percent rule '{}': {} -> {}", rule.name, out, rewritten);
            out = rewritten.into_owned();
        }
    }
    out
}
