// src/convert.rs
//! Shared conversion utilities for JSON values to raw field values

use std::borrow::Cow;

use serde_json::Value;

use crate::decode::JsonRecord;
use crate::record::{FieldAccess, FieldShape, RawValue, RecordShape};
use crate::types::HostType;

/// Convert a JSON value to a raw field value.
/// Arrays and objects become [`RawValue::Composite`] carrying their JSON text.
pub fn json_to_raw(v: &Value) -> RawValue<'_> {
    match v {
        Value::Null => RawValue::Null,
        Value::Bool(b) => RawValue::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                RawValue::Int(i)
            } else if let Some(u) = n.as_u64() {
                RawValue::UInt(u)
            } else {
                // Without arbitrary_precision every non-integer is an f64
                RawValue::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => RawValue::Str(Cow::Borrowed(s.as_str())),
        Value::Array(_) | Value::Object(_) => RawValue::Composite(Cow::Owned(v.to_string())),
    }
}

/// Infer the host type of a JSON value.
///
/// Nulls carry no type information and are reported as unsupported, as are
/// nested arrays and objects.
pub fn infer_host_type(v: &Value) -> HostType {
    match v {
        Value::Null => HostType::other("null"),
        Value::Bool(_) => HostType::Boolean,
        Value::Number(n) if n.is_i64() => HostType::Int64,
        Value::Number(n) if n.is_u64() => HostType::other("uint64"),
        Value::Number(_) => HostType::Float64,
        Value::String(_) => HostType::String,
        Value::Array(_) => HostType::other("array"),
        Value::Object(_) => HostType::other("object"),
    }
}

/// Infer a record shape from one representative record, keeping key order.
pub fn infer_shape(record: &JsonRecord) -> RecordShape {
    record
        .iter()
        .map(|(name, value)| FieldShape::new(name.clone(), infer_host_type(value)))
        .collect()
}

impl FieldAccess for JsonRecord {
    fn raw_value(&self, field: &FieldShape) -> RawValue<'_> {
        self.get(&field.name).map_or(RawValue::Null, json_to_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> JsonRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_json_to_raw_scalars() {
        assert_eq!(json_to_raw(&json!(null)), RawValue::Null);
        assert_eq!(json_to_raw(&json!(true)), RawValue::Bool(true));
        assert_eq!(json_to_raw(&json!(-5)), RawValue::Int(-5));
        assert_eq!(json_to_raw(&json!(u64::MAX)), RawValue::UInt(u64::MAX));
        assert_eq!(json_to_raw(&json!(2.5)), RawValue::Float(2.5));
        assert_eq!(
            json_to_raw(&json!("hi")),
            RawValue::Str(Cow::Borrowed("hi"))
        );
    }

    #[test]
    fn test_json_to_raw_nested() {
        assert_eq!(
            json_to_raw(&json!([1, 2])),
            RawValue::Composite(Cow::Owned("[1,2]".to_string()))
        );
        assert!(matches!(
            json_to_raw(&json!({"a": 1})),
            RawValue::Composite(_)
        ));
    }

    #[test]
    fn test_infer_host_type() {
        assert_eq!(infer_host_type(&json!("x")), HostType::String);
        assert_eq!(infer_host_type(&json!(1)), HostType::Int64);
        assert_eq!(infer_host_type(&json!(1.5)), HostType::Float64);
        assert_eq!(infer_host_type(&json!(false)), HostType::Boolean);
        assert_eq!(infer_host_type(&json!(null)), HostType::other("null"));
        assert_eq!(infer_host_type(&json!({})), HostType::other("object"));
    }

    #[test]
    fn test_infer_shape_keeps_order() {
        let shape = infer_shape(&record(json!({"name": "a", "id": 1, "ok": true})));
        assert_eq!(
            shape,
            RecordShape::new(vec![
                FieldShape::new("name", HostType::String),
                FieldShape::new("id", HostType::Int64),
                FieldShape::new("ok", HostType::Boolean),
            ])
        );
    }

    #[test]
    fn test_json_record_field_access() {
        let row = record(json!({"id": 3}));
        let id = FieldShape::new("id", HostType::Int64);
        let missing = FieldShape::new("name", HostType::String);
        assert_eq!(row.raw_value(&id), RawValue::Int(3));
        assert_eq!(row.raw_value(&missing), RawValue::Null);
    }
}
