//! Conversion of environment text into field values

use crate::error::BindError;
use crate::field::{FieldType, Kind};
use crate::value::Value;

/// Convert the raw lookup result for `key` into a value for `field`, declared as `ty`.
///
/// `raw` is `None` when the variable is not defined.
pub(crate) fn convert(
    raw: Option<String>,
    ty: FieldType,
    field: &str,
    key: &str,
) -> Result<Value, BindError> {
    match (ty, raw) {
        (FieldType::Sequence(_) | FieldType::Unsupported(_), _) => {
            Err(BindError::unsupported(field, ty))
        }
        (FieldType::Optional(_), None) => Ok(Value::Null),
        (FieldType::Required(Kind::Str), None) => Ok(Value::Str(String::new())),
        (FieldType::Required(Kind::Bytes), None) => Ok(Value::Null),
        (FieldType::Required(_), None) => Err(BindError::not_set(key, ty)),
        (FieldType::Required(kind) | FieldType::Optional(kind), Some(text)) => {
            parse_kind(kind, text).map_err(|text| BindError::parse(key, text, ty))
        }
    }
}

/// Parse `text` as `kind`, handing the text back on failure.
fn parse_kind(kind: Kind, text: String) -> Result<Value, String> {
    match kind {
        Kind::Str => Ok(Value::Str(text)),
        Kind::Bytes => Ok(Value::Bytes(text.into_bytes())),
        Kind::Int64 => text.parse().map(Value::Int64).map_err(|_| text),
        Kind::Float64 => parse_f64(&text).map(Value::Float64).ok_or(text),
        Kind::Bool => parse_bool(&text).map(Value::Bool).ok_or(text),
    }
}

/// Rejects finite literals that overflow to infinity, e.g. `1e400`.
fn parse_f64(text: &str) -> Option<f64> {
    let value: f64 = text.parse().ok()?;
    if value.is_infinite() {
        let magnitude = text.strip_prefix(['+', '-']).unwrap_or(text);
        if !magnitude.eq_ignore_ascii_case("inf") && !magnitude.eq_ignore_ascii_case("infinity") {
            return None;
        }
    }
    Some(value)
}

/// Accepts `1`, `0`, `t`, `f`, `true` and `false`, ignoring ASCII case.
pub fn parse_bool(text: &str) -> Option<bool> {
    const TRUE: [&str; 3] = ["1", "t", "true"];
    const FALSE: [&str; 3] = ["0", "f", "false"];

    if TRUE.iter().any(|lit| lit.eq_ignore_ascii_case(text)) {
        Some(true)
    } else if FALSE.iter().any(|lit| lit.eq_ignore_ascii_case(text)) {
        Some(false)
    } else {
        None
    }
}
