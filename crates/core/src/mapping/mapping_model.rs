//! Field mapping tables and the values they produce.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::errors::ReconcileError;
use crate::utils::time_utils::format_timestamp;

/// Storage type an upstream field is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Decimal,
    Bool,
    Date,
    Timestamp,
}

/// One row of a declarative mapping table: upstream name to local name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub external: &'static str,
    pub local: &'static str,
    pub kind: FieldKind,
}

impl FieldMapping {
    pub const fn new(external: &'static str, local: &'static str, kind: FieldKind) -> Self {
        Self {
            external,
            local,
            kind,
        }
    }
}

/// A coerced field value. Absent upstream fields become `Null`, never a default.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Text(String),
    Integer(i64),
    Float(f64),
    Decimal(Decimal),
    Bool(bool),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// JSON form used in attribute documents. Decimals stay strings so no
    /// precision is lost.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Null => Value::Null,
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Integer(i) => Value::from(*i),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            FieldValue::Decimal(d) => Value::String(d.to_string()),
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            FieldValue::Timestamp(ts) => Value::String(format_timestamp(*ts)),
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Text(_) => "text",
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Decimal(_) => "decimal",
            FieldValue::Bool(_) => "bool",
            FieldValue::Date(_) => "date",
            FieldValue::Timestamp(_) => "timestamp",
        }
    }
}

/// Result of applying a mapping table to one upstream record, keyed by local
/// field name.
///
/// Typed `take_*` accessors remove the field, so whatever remains afterwards
/// can be folded into an attribute document with [`MappedRecord::into_attributes`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappedRecord {
    values: BTreeMap<&'static str, FieldValue>,
}

macro_rules! typed_take {
    ($name:ident, $variant:ident, $ty:ty) => {
        pub fn $name(&mut self, field: &'static str) -> Result<Option<$ty>, ReconcileError> {
            match self.take(field) {
                FieldValue::Null => Ok(None),
                FieldValue::$variant(v) => Ok(Some(v)),
                other => Err(ReconcileError::InvalidField {
                    field,
                    reason: format!(
                        concat!("expected ", stringify!($variant), ", mapped as {}"),
                        other.kind_name()
                    ),
                }),
            }
        }
    };
}

impl MappedRecord {
    pub(crate) fn insert(&mut self, field: &'static str, value: FieldValue) {
        self.values.insert(field, value);
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes a field, returning `Null` when it was never mapped.
    pub fn take(&mut self, field: &str) -> FieldValue {
        self.values.remove(field).unwrap_or(FieldValue::Null)
    }

    typed_take!(take_text, Text, String);
    typed_take!(take_integer, Integer, i64);
    typed_take!(take_float, Float, f64);
    typed_take!(take_decimal, Decimal, Decimal);
    typed_take!(take_bool, Bool, bool);
    typed_take!(take_date, Date, NaiveDate);
    typed_take!(take_timestamp, Timestamp, DateTime<Utc>);

    /// Remaining non-null fields as a JSON object.
    pub fn into_attributes(self) -> Map<String, Value> {
        self.values
            .into_iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(field, value)| (field.to_string(), value.to_json()))
            .collect()
    }
}
