//! Helpers for rendering event payloads.

use std::fmt::Display;

/// Joins displayable items with `"; "`, the separator used by every event snapshot.
pub fn join_text<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str("; ");
        }
        out.push_str(&item.to_string());
    }
    out
}

/// Formats a number rounded to two decimals, without trailing zeros.
///
/// Integral values print without a fractional part (`3`, not `3.00`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    let rounded = (value * 100.0).round() / 100.0;
    // -0 would print as "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

/// Formats an optional distance, `∞` when unknown.
#[must_use]
pub fn format_distance(value: Option<f64>) -> String {
    value.map_or_else(|| "∞".to_string(), format_number)
}
