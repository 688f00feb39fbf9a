use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use super::mapping_model::{FieldKind, FieldMapping, FieldValue, MappedRecord};
use crate::errors::ReconcileError;
use crate::utils::time_utils::{parse_date, parse_timestamp};

/// Applies a mapping table to a raw upstream record.
///
/// Every table entry produces a local field. Missing or JSON `null` values map
/// to [`FieldValue::Null`]; upstream fields not named in the table are ignored.
pub fn apply_mapping(
    record: &Map<String, Value>,
    table: &[FieldMapping],
) -> Result<MappedRecord, ReconcileError> {
    let mut mapped = MappedRecord::default();
    for mapping in table {
        let value = match record.get(mapping.external) {
            None | Some(Value::Null) => FieldValue::Null,
            Some(raw) => coerce(raw, mapping)?,
        };
        mapped.insert(mapping.local, value);
    }
    Ok(mapped)
}

fn coerce(raw: &Value, mapping: &FieldMapping) -> Result<FieldValue, ReconcileError> {
    let invalid = |reason: String| ReconcileError::InvalidField {
        field: mapping.external,
        reason,
    };

    match mapping.kind {
        FieldKind::Text => Ok(FieldValue::Text(text_of(raw))),
        FieldKind::Integer => integer_of(raw)
            .map(FieldValue::Integer)
            .ok_or_else(|| invalid(format!("not an integer: {}", raw))),
        FieldKind::Float => float_of(raw)
            .map(FieldValue::Float)
            .ok_or_else(|| invalid(format!("not a number: {}", raw))),
        FieldKind::Decimal => decimal_of(raw)
            .map(FieldValue::Decimal)
            .ok_or_else(|| invalid(format!("not a decimal: {}", raw))),
        FieldKind::Bool => bool_of(raw)
            .map(FieldValue::Bool)
            .ok_or_else(|| invalid(format!("not a yes/no value: {}", raw))),
        FieldKind::Date => raw
            .as_str()
            .and_then(parse_date)
            .map(FieldValue::Date)
            .ok_or_else(|| invalid(format!("not a date: {}", raw))),
        FieldKind::Timestamp => raw
            .as_str()
            .and_then(parse_timestamp)
            .map(FieldValue::Timestamp)
            .ok_or_else(|| invalid(format!("not a timestamp: {}", raw))),
    }
}

fn text_of(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        // Multi-valued lookups arrive as arrays on some feeds.
        Value::Array(items) => items.iter().map(text_of).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

fn integer_of(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}

fn float_of(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn decimal_of(raw: &Value) -> Option<Decimal> {
    let text = match raw {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

fn bool_of(raw: &Value) -> Option<bool> {
    match raw {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" | "true" | "1" => Some(true),
            "n" | "no" | "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
