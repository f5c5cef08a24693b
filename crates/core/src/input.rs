//! Coercion of loosely typed request values.
//!
//! Clients send numbers either as JSON numbers or as strings (`"20"`), and
//! query parameters always arrive as strings. These helpers give both forms
//! the same meaning without going through floating point.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;

/// Returns true when a field counts as not provided.
///
/// Absent, `null`, `false`, numeric zero and the empty string are all treated
/// as missing.
#[must_use]
pub fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(_)) => value.and_then(decimal_from_json).is_some_and(|d| d.is_zero()),
        Some(_) => false,
    }
}

/// Parses decimal text, accepting plain and scientific notation.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Parses integer text. `"5.0"` is accepted, `"5.5"` is not.
#[must_use]
pub fn parse_integer(text: &str) -> Option<i64> {
    parse_decimal(text).and_then(integral)
}

/// Reads a decimal from a JSON number or numeric string.
#[must_use]
pub fn decimal_from_json(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

/// Reads an integer from a JSON number or numeric string.
#[must_use]
pub fn integer_from_json(value: &Value) -> Option<i64> {
    decimal_from_json(value).and_then(integral)
}

fn integral(value: Decimal) -> Option<i64> {
    if value.fract().is_zero() {
        value.to_i64()
    } else {
        None
    }
}
