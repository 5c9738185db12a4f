//! Field coercion helpers for loosely-typed request bodies.
//!
//! Browser forms submit numbers as strings, so numeric fields arrive either as
//! JSON numbers or as numeric strings. These helpers accept both and reject
//! everything else. A missing field and an explicit `null` are the same thing.

use serde_json::Value;

/// Return the trimmed text of a required string field, or `None` if it is
/// absent or blank.
pub fn required_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Whether a JSON field carries a value at all.
///
/// Blank strings count as missing, matching how an empty form input is sent.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

/// Interpret a JSON field as a whole number.
///
/// Accepts integers, floats with no fractional part, and strings that parse
/// as integers. Returns `None` for anything else.
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Interpret a JSON field as a finite number (integer or decimal).
pub fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}
