//! Report rendering.

use serde_json::Value;

use crate::config::OutputFormat;
use crate::error::Result;

/// Render a command report in the requested format.
pub fn render(report: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => Ok(render_table(report)),
    }
}

/// Flatten a report into dotted keys, one row per scalar.
fn flatten(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    let key = |child: &str| {
        if prefix.is_empty() {
            child.to_string()
        } else {
            format!("{}.{}", prefix, child)
        }
    };
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                flatten(&key(k), v, rows);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (i, v) in items.iter().enumerate() {
                flatten(&key(&i.to_string()), v, rows);
            }
        }
        Value::String(s) => rows.push((prefix.to_string(), s.clone())),
        other => rows.push((prefix.to_string(), other.to_string())),
    }
}

fn render_table(report: &Value) -> String {
    let mut rows = Vec::new();
    flatten("", report, &mut rows);

    let key_width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0).max(5);
    let value_width = rows.iter().map(|(_, v)| v.len()).max().unwrap_or(0).max(5);

    let rule = |left: char, mid: char, right: char| {
        format!(
            "{}{}{}{}{}",
            left,
            "─".repeat(key_width + 2),
            mid,
            "─".repeat(value_width + 2),
            right
        )
    };

    let mut out = Vec::with_capacity(rows.len() + 4);
    out.push(rule('┌', '┬', '┐'));
    out.push(format!(
        "│ {:<kw$} │ {:<vw$} │",
        "Field",
        "Value",
        kw = key_width,
        vw = value_width
    ));
    out.push(rule('├', '┼', '┤'));
    for (k, v) in &rows {
        out.push(format!(
            "│ {:<kw$} │ {:>vw$} │",
            k,
            v,
            kw = key_width,
            vw = value_width
        ));
    }
    out.push(rule('└', '┴', '┘'));
    out.join("\n")
}
