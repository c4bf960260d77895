use serde_json::{Map, Number, Value};

use crate::error::{RewriteError, RewriteResult};

pub const FIXED_POINT_SCALE: f64 = 1e8;

pub const SIZE_FIELD: &str = "size";
pub const PRICE_FIELD: &str = "price";

/// Truthiness as the fixtures were originally filtered: absent, `null`,
/// `false`, zero, and empty strings/arrays/objects all count as unset.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
    }
}

/// Rounds `value * 1e8` to an integer. Results beyond `i64` keep every
/// digit of the rounded float; only non-finite results are rejected.
pub fn to_fixed_point(value: f64) -> Option<Number> {
    let scaled = (value * FIXED_POINT_SCALE).round();
    if !scaled.is_finite() {
        return None;
    }
    // i64::MAX is not representable as f64; 2^63 is the exclusive bound.
    if scaled >= i64::MIN as f64 && scaled < i64::MAX as f64 {
        return Some(Number::from(scaled as i64));
    }
    serde_json::from_str(&format!("{scaled:.0}")).ok()
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn scaled_field(
    payload: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> RewriteResult<Number> {
    let value = payload
        .get(field)
        .ok_or(RewriteError::MissingField { index, field })?;
    let number = numeric_value(value).ok_or(RewriteError::NonNumeric { index, field })?;
    to_fixed_point(number).ok_or(RewriteError::OutOfRange { index, field })
}

/// Scales `size` and `price` in place when `size` is truthy.
///
/// `price` is never touched on its own: a payload with a price but no
/// usable size is left as-is. Both values are computed before either is
/// written, so an error leaves the payload unchanged.
pub fn scale_payload(payload: &mut Map<String, Value>, index: usize) -> RewriteResult<bool> {
    if !is_truthy(payload.get(SIZE_FIELD)) {
        return Ok(false);
    }

    let size = scaled_field(payload, index, SIZE_FIELD)?;
    let price = scaled_field(payload, index, PRICE_FIELD)?;

    payload.insert(SIZE_FIELD.to_string(), Value::Number(size));
    payload.insert(PRICE_FIELD.to_string(), Value::Number(price));
    Ok(true)
}
