//! Plain-text rendering of evaluated lines.

use crate::config::Config;
use linecalc_core::{Environment, Line};
use linecalc_engine::engine::format_number;

/// Render each line as `expression<separator>result`.
pub fn render_lines(lines: &[Line], config: &Config) -> String {
    let width = if config.align {
        lines
            .iter()
            .map(|l| l.expression.chars().count())
            .max()
            .unwrap_or(0)
    } else {
        0
    };

    let mut out = String::new();
    for line in lines {
        if line.result.is_empty() && !config.show_blank {
            out.push_str(&line.expression);
        } else {
            let row = format!(
                "{:<width$}{}{}",
                line.expression,
                config.separator,
                line.result,
                width = width
            );
            out.push_str(row.trim_end());
        }
        out.push('\n');
    }
    out
}

/// Render only the results, one per line.
pub fn render_results(lines: &[Line]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line.result);
        out.push('\n');
    }
    out
}

/// Render variables as `name = value`, sorted by name.
pub fn render_variables(env: &Environment) -> String {
    let mut out = String::new();
    for (name, value) in env.sorted() {
        out.push_str(&format!("{} = {}\n", name, format_number(value)));
    }
    out
}
