//! Value normalization shared by every mapper.
//!
//! None of these functions fail: malformed input comes back as `None` and the
//! caller simply omits the property.

use serde_json::{Map, Number, Value};
use url::Url;

/// Whether a form value counts as provided (non-empty after trimming).
pub fn present_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// The trimmed value, or `None` when it is blank.
pub fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Normalize a URL.
///
/// Absolute URLs come back unchanged. Anything else is retried with an
/// `https://` prefix, so `example.com/about` becomes
/// `https://example.com/about`.
pub fn normalize_url(value: &str) -> Option<String> {
    let value = non_empty(value)?;

    if Url::parse(value).is_ok() {
        return Some(value.to_string());
    }

    let prefixed = format!("https://{}", value);
    Url::parse(&prefixed).ok().map(|_| prefixed)
}

/// Parse a form value as a finite number.
///
/// Decimal and exponent forms go through the float parser. Unsigned `0x`,
/// `0o` and `0b` integer literals are accepted too.
pub fn to_number(value: &str) -> Option<f64> {
    let value = non_empty(value)?;
    if let Some(parsed) = radix_integer(value) {
        return Some(parsed);
    }

    let parsed: f64 = value.parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

fn radix_integer(value: &str) -> Option<f64> {
    let prefix = value.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &value[2..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok().map(|n| n as f64)
}

/// Convert to a JSON number, preferring the integer form for whole values.
pub fn json_number(value: f64) -> Number {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        Number::from(value as i64)
    } else {
        // Non-finite values never reach here through to_number.
        Number::from_f64(value).unwrap_or_else(|| Number::from(0))
    }
}

/// Parse a form value straight into a JSON number.
pub fn number_value(value: &str) -> Option<Value> {
    to_number(value).map(|n| Value::Number(json_number(n)))
}

/// Accept a date only when it is exactly `yyyy-mm-dd`.
pub fn normalize_date(value: &str) -> Option<String> {
    let value = non_empty(value)?;
    is_date_only(value).then(|| value.to_string())
}

/// Whether a string is shaped like `yyyy-mm-dd` and nothing else.
pub fn is_date_only(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Split a comma or newline separated list, dropping blank entries.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split([',', '\n'])
        .filter_map(non_empty)
        .map(String::from)
        .collect()
}

/// Split on newlines only, dropping blank lines.
pub fn split_lines(value: &str) -> Vec<String> {
    value.lines().filter_map(non_empty).map(String::from).collect()
}

/// Collapse a list into the shape schema.org consumers expect:
/// nothing for an empty list, the bare value for one item, an array otherwise.
pub fn one_or_many(mut items: Vec<Value>) -> Option<Value> {
    match items.len() {
        0 => None,
        1 => items.pop(),
        _ => Some(Value::Array(items)),
    }
}

/// Checkbox-style truthiness for string form values.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "yes" | "on" | "1"
    )
}

/// Wrap a bare number of minutes as an ISO-8601 duration; pass anything else
/// through as an already-formatted duration.
pub fn minutes_duration(value: &str) -> Option<String> {
    let value = non_empty(value)?;
    if value.bytes().all(|b| b.is_ascii_digit()) {
        Some(format!("PT{}M", value))
    } else {
        Some(value.to_string())
    }
}

/// Expand a bare schema.org enumeration member (`InStock`) to its URL form.
pub fn schema_enum_url(value: &str) -> Option<String> {
    let value = non_empty(value)?;
    if value.starts_with("http://") || value.starts_with("https://") {
        Some(value.to_string())
    } else {
        Some(format!("https://schema.org/{}", value.replace(' ', "")))
    }
}

/// Recursively strip `null`, blank strings and empty arrays.
///
/// Arrays are compacted before their own emptiness is judged, so
/// `["", null]` disappears entirely. Objects are kept even when empty.
pub fn compact(value: &Value) -> Value {
    compact_value(value).unwrap_or(Value::Null)
}

fn compact_value(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::Array(items) => {
            let kept: Vec<Value> = items.iter().filter_map(compact_value).collect();
            if kept.is_empty() {
                None
            } else {
                Some(Value::Array(kept))
            }
        }
        Value::Object(map) => {
            let kept: Map<String, Value> = map
                .iter()
                .filter_map(|(key, child)| compact_value(child).map(|v| (key.clone(), v)))
                .collect();
            Some(Value::Object(kept))
        }
        other => Some(other.clone()),
    }
}
