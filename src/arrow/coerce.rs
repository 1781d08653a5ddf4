//! Coercion of raw field values into column builders.
//!
//! String columns accept only string values. Numeric and boolean columns go
//! through one conversion function per target type, each covering every raw
//! value kind.

use arrow::datatypes::Field;

use crate::arrow::builder::ColumnBuilder;
use crate::error::{Error, Result};
use crate::record::RawValue;

/// Append exactly one value (or null) for `field` at `row` to `builder`.
pub fn append_value(
    builder: &mut ColumnBuilder,
    field: &Field,
    row: usize,
    value: &RawValue<'_>,
) -> Result<()> {
    let bound = builder.value_type().data_type();
    if &bound != field.data_type() {
        return Err(Error::UnsupportedBuilder {
            field: field.name().clone(),
            expected: field.data_type().clone(),
            actual: bound,
        });
    }

    if value.is_null() {
        builder.append_null();
        return Ok(());
    }

    let failed = || Error::ValueConversion {
        field: field.name().clone(),
        row,
        value: value.to_string(),
    };

    match builder {
        ColumnBuilder::Utf8(b) => match value {
            RawValue::Str(s) => b.append_value(s),
            _ => return Err(failed()),
        },
        ColumnBuilder::Int32(b) => b.append_value(to_i32(value).ok_or_else(failed)?),
        ColumnBuilder::Int64(b) => b.append_value(to_i64(value).ok_or_else(failed)?),
        ColumnBuilder::Float64(b) => b.append_value(to_f64(value).ok_or_else(failed)?),
        ColumnBuilder::Float32(b) => b.append_value(to_f32(value).ok_or_else(failed)?),
        ColumnBuilder::Boolean(b) => b.append_value(to_bool(value).ok_or_else(failed)?),
    }
    Ok(())
}

/// Round half to even and range check, as integer conversions of floats do.
fn float_to_i64(x: f64) -> Option<i64> {
    // 2^63 is exactly representable; i64::MAX is not.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let rounded = x.round_ties_even();
    if rounded.is_finite() && rounded >= -LIMIT && rounded < LIMIT {
        Some(rounded as i64)
    } else {
        None
    }
}

fn to_i64(value: &RawValue<'_>) -> Option<i64> {
    match value {
        RawValue::Bool(b) => Some(i64::from(*b)),
        RawValue::Int(i) => Some(*i),
        RawValue::UInt(u) => i64::try_from(*u).ok(),
        RawValue::Float(x) => float_to_i64(*x),
        RawValue::Str(s) => s.trim().parse().ok(),
        RawValue::Null | RawValue::Composite(_) => None,
    }
}

fn to_i32(value: &RawValue<'_>) -> Option<i32> {
    match value {
        RawValue::Str(s) => s.trim().parse().ok(),
        other => to_i64(other).and_then(|i| i32::try_from(i).ok()),
    }
}

fn to_f64(value: &RawValue<'_>) -> Option<f64> {
    match value {
        RawValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        RawValue::Int(i) => Some(*i as f64),
        RawValue::UInt(u) => Some(*u as f64),
        RawValue::Float(x) => Some(*x),
        RawValue::Str(s) => s.trim().parse().ok(),
        RawValue::Null | RawValue::Composite(_) => None,
    }
}

fn to_f32(value: &RawValue<'_>) -> Option<f32> {
    match value {
        RawValue::Int(i) => Some(*i as f32),
        RawValue::UInt(u) => Some(*u as f32),
        RawValue::Str(s) => s.trim().parse().ok(),
        other => to_f64(other).map(|x| x as f32),
    }
}

fn to_bool(value: &RawValue<'_>) -> Option<bool> {
    match value {
        RawValue::Bool(b) => Some(*b),
        RawValue::Int(i) => Some(*i != 0),
        RawValue::UInt(u) => Some(*u != 0),
        RawValue::Float(x) => Some(*x != 0.0),
        RawValue::Str(s) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("true") {
                Some(true)
            } else if s.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        }
        RawValue::Null | RawValue::Composite(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueType;
    use arrow::array::{
        Array, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
    };
    use arrow::datatypes::DataType;
    use std::borrow::Cow;

    fn text(s: &str) -> RawValue<'_> {
        RawValue::Str(Cow::Borrowed(s))
    }

    fn column(value_type: ValueType, values: &[RawValue<'_>]) -> Result<arrow::array::ArrayRef> {
        let field = Field::new("col", value_type.data_type(), true);
        let mut builder = ColumnBuilder::new(value_type, values.len());
        for (row, value) in values.iter().enumerate() {
            append_value(&mut builder, &field, row, value)?;
        }
        Ok(builder.finish())
    }

    #[test]
    fn test_utf8_accepts_strings_only() {
        let array = column(ValueType::Utf8, &[text("a"), RawValue::Null]).unwrap();
        let strings = array.as_any().downcast_ref::<StringArray>().unwrap();
        assert_eq!(strings.value(0), "a");
        assert!(strings.is_null(1));

        let err = column(ValueType::Utf8, &[RawValue::Int(1)]).unwrap_err();
        assert!(matches!(err, Error::ValueConversion { row: 0, .. }));
    }

    #[test]
    fn test_int32_conversions() {
        let array = column(
            ValueType::Int32,
            &[
                RawValue::Int(123),
                RawValue::UInt(7),
                RawValue::Bool(true),
                RawValue::Float(2.5),
                RawValue::Float(3.5),
                text(" -42 "),
                RawValue::Null,
            ],
        )
        .unwrap();
        let ints = array.as_any().downcast_ref::<Int32Array>().unwrap();
        assert_eq!(ints.value(0), 123);
        assert_eq!(ints.value(1), 7);
        assert_eq!(ints.value(2), 1);
        assert_eq!(ints.value(3), 2);
        assert_eq!(ints.value(4), 4);
        assert_eq!(ints.value(5), -42);
        assert!(ints.is_null(6));
    }

    #[test]
    fn test_int32_overflow_fails() {
        let err = column(ValueType::Int32, &[RawValue::Int(i64::from(i32::MAX) + 1)]).unwrap_err();
        assert!(matches!(err, Error::ValueConversion { .. }));

        let err = column(ValueType::Int32, &[RawValue::Float(f64::NAN)]).unwrap_err();
        assert!(matches!(err, Error::ValueConversion { .. }));

        let err = column(ValueType::Int32, &[text("3.5")]).unwrap_err();
        assert!(matches!(err, Error::ValueConversion { .. }));

        let err = column(ValueType::Int32, &[RawValue::UInt(u64::MAX)]).unwrap_err();
        assert!(matches!(err, Error::ValueConversion { .. }));
    }

    #[test]
    fn test_int64_conversions() {
        let array = column(
            ValueType::Int64,
            &[RawValue::Int(i64::MIN), text("9000000000"), RawValue::Bool(false)],
        )
        .unwrap();
        let ints = array.as_any().downcast_ref::<Int64Array>().unwrap();
        assert_eq!(ints.value(0), i64::MIN);
        assert_eq!(ints.value(1), 9_000_000_000);
        assert_eq!(ints.value(2), 0);

        let err = column(ValueType::Int64, &[RawValue::UInt(u64::MAX)]).unwrap_err();
        assert!(matches!(err, Error::ValueConversion { .. }));

        let err = column(ValueType::Int64, &[RawValue::Float(1e19)]).unwrap_err();
        assert!(matches!(err, Error::ValueConversion { .. }));
    }

    #[test]
    fn test_float_conversions() {
        let array = column(
            ValueType::Float64,
            &[RawValue::Int(2), text("1.25"), RawValue::Bool(true), RawValue::Float(0.1)],
        )
        .unwrap();
        let floats = array.as_any().downcast_ref::<Float64Array>().unwrap();
        assert_eq!(floats.value(0), 2.0);
        assert_eq!(floats.value(1), 1.25);
        assert_eq!(floats.value(2), 1.0);
        assert_eq!(floats.value(3), 0.1);

        let array = column(ValueType::Float32, &[RawValue::Float(3.5), text("0.5")]).unwrap();
        let floats = array.as_any().downcast_ref::<Float32Array>().unwrap();
        assert_eq!(floats.value(0), 3.5f32);
        assert_eq!(floats.value(1), 0.5f32);

        // Narrowing past f32::MAX saturates to infinity
        let array = column(
            ValueType::Float32,
            &[RawValue::Float(1e300), RawValue::Float(-1e300), RawValue::UInt(u64::MAX)],
        )
        .unwrap();
        let floats = array.as_any().downcast_ref::<Float32Array>().unwrap();
        assert_eq!(floats.value(0), f32::INFINITY);
        assert_eq!(floats.value(1), f32::NEG_INFINITY);
        assert_eq!(floats.value(2), u64::MAX as f32);

        let err = column(ValueType::Float64, &[text("abc")]).unwrap_err();
        assert!(matches!(err, Error::ValueConversion { .. }));
    }

    #[test]
    fn test_bool_conversions() {
        let array = column(
            ValueType::Boolean,
            &[
                RawValue::Bool(true),
                RawValue::Int(0),
                RawValue::Float(2.0),
                text("FALSE"),
                text(" True "),
            ],
        )
        .unwrap();
        let bools = array.as_any().downcast_ref::<BooleanArray>().unwrap();
        assert!(bools.value(0));
        assert!(!bools.value(1));
        assert!(bools.value(2));
        assert!(!bools.value(3));
        assert!(bools.value(4));

        let err = column(ValueType::Boolean, &[text("yes")]).unwrap_err();
        assert!(matches!(err, Error::ValueConversion { .. }));
    }

    #[test]
    fn test_composite_never_converts() {
        for value_type in [ValueType::Int64, ValueType::Float32, ValueType::Boolean] {
            let err = column(value_type, &[RawValue::Composite(Cow::Borrowed("[1]"))]).unwrap_err();
            match err {
                Error::ValueConversion { field, row, value } => {
                    assert_eq!(field, "col");
                    assert_eq!(row, 0);
                    assert_eq!(value, "[1]");
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_mismatched_builder_is_rejected() {
        let field = Field::new("id", DataType::Int64, true);
        let mut builder = ColumnBuilder::new(ValueType::Utf8, 1);
        let err = append_value(&mut builder, &field, 0, &RawValue::Null).unwrap_err();
        match err {
            Error::UnsupportedBuilder {
                field,
                expected,
                actual,
            } => {
                assert_eq!(field, "id");
                assert_eq!(expected, DataType::Int64);
                assert_eq!(actual, DataType::Utf8);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(builder.is_empty());
    }
}
