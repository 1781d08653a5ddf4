//! Column builders, one variant per supported value type.

use std::sync::Arc;

use arrow::array::{
    ArrayBuilder, ArrayRef, BooleanBuilder, Float32Builder, Float64Builder, Int32Builder,
    Int64Builder, StringBuilder,
};
use arrow::datatypes::DataType;

use crate::error::{Error, Result};
use crate::types::ValueType;

/// Average bytes reserved per string value up front.
const STRING_BYTES_PER_ROW: usize = 16;

fn string_data_capacity(rows: usize) -> usize {
    rows.saturating_mul(STRING_BYTES_PER_ROW)
}

/// Append-only accumulator for a single column.
///
/// Finalized exactly once by [`ColumnBuilder::finish`], which consumes it.
#[derive(Debug)]
pub enum ColumnBuilder {
    Utf8(StringBuilder),
    Int32(Int32Builder),
    Int64(Int64Builder),
    Float64(Float64Builder),
    Float32(Float32Builder),
    Boolean(BooleanBuilder),
}

impl ColumnBuilder {
    /// Create an empty builder for `value_type`, reserving room for `capacity` rows.
    pub fn new(value_type: ValueType, capacity: usize) -> Self {
        match value_type {
            ValueType::Utf8 => ColumnBuilder::Utf8(StringBuilder::with_capacity(
                capacity,
                string_data_capacity(capacity),
            )),
            ValueType::Int32 => ColumnBuilder::Int32(Int32Builder::with_capacity(capacity)),
            ValueType::Int64 => ColumnBuilder::Int64(Int64Builder::with_capacity(capacity)),
            ValueType::Float64 => ColumnBuilder::Float64(Float64Builder::with_capacity(capacity)),
            ValueType::Float32 => ColumnBuilder::Float32(Float32Builder::with_capacity(capacity)),
            ValueType::Boolean => ColumnBuilder::Boolean(BooleanBuilder::with_capacity(capacity)),
        }
    }

    /// Create an empty builder for an Arrow data type.
    ///
    /// Fails with [`Error::UnsupportedType`] outside the supported value types.
    pub fn try_for_data_type(data_type: &DataType, capacity: usize) -> Result<Self> {
        let value_type = ValueType::try_from(data_type).map_err(Error::UnsupportedType)?;
        Ok(Self::new(value_type, capacity))
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            ColumnBuilder::Utf8(_) => ValueType::Utf8,
            ColumnBuilder::Int32(_) => ValueType::Int32,
            ColumnBuilder::Int64(_) => ValueType::Int64,
            ColumnBuilder::Float64(_) => ValueType::Float64,
            ColumnBuilder::Float32(_) => ValueType::Float32,
            ColumnBuilder::Boolean(_) => ValueType::Boolean,
        }
    }

    /// Number of values and nulls appended so far.
    pub fn len(&self) -> usize {
        match self {
            ColumnBuilder::Utf8(b) => b.len(),
            ColumnBuilder::Int32(b) => b.len(),
            ColumnBuilder::Int64(b) => b.len(),
            ColumnBuilder::Float64(b) => b.len(),
            ColumnBuilder::Float32(b) => b.len(),
            ColumnBuilder::Boolean(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn append_null(&mut self) {
        match self {
            ColumnBuilder::Utf8(b) => b.append_null(),
            ColumnBuilder::Int32(b) => b.append_null(),
            ColumnBuilder::Int64(b) => b.append_null(),
            ColumnBuilder::Float64(b) => b.append_null(),
            ColumnBuilder::Float32(b) => b.append_null(),
            ColumnBuilder::Boolean(b) => b.append_null(),
        }
    }

    /// Finalize into an immutable array.
    pub fn finish(self) -> ArrayRef {
        match self {
            ColumnBuilder::Utf8(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Int32(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Int64(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Float64(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Float32(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Boolean(mut b) => Arc::new(b.finish()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Array, Int32Array, StringArray};

    #[test]
    fn test_new_builders_are_empty_and_typed() {
        for value_type in [
            ValueType::Utf8,
            ValueType::Int32,
            ValueType::Int64,
            ValueType::Float64,
            ValueType::Float32,
            ValueType::Boolean,
        ] {
            let builder = ColumnBuilder::new(value_type, 4);
            assert!(builder.is_empty());
            assert_eq!(builder.value_type(), value_type);

            let array = builder.finish();
            assert_eq!(array.len(), 0);
            assert_eq!(array.data_type(), &value_type.data_type());
        }
    }

    #[test]
    fn test_try_for_data_type() {
        let builder = ColumnBuilder::try_for_data_type(&DataType::Float32, 0).unwrap();
        assert_eq!(builder.value_type(), ValueType::Float32);

        let err = ColumnBuilder::try_for_data_type(&DataType::Date64, 0).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(DataType::Date64)));
    }

    #[test]
    fn test_huge_string_capacity_does_not_overflow() {
        assert_eq!(string_data_capacity(4), 4 * STRING_BYTES_PER_ROW);
        assert_eq!(string_data_capacity(usize::MAX), usize::MAX);
        assert_eq!(string_data_capacity(usize::MAX / 2), usize::MAX);
    }

    #[test]
    fn test_nulls_consume_slots() {
        let mut builder = ColumnBuilder::new(ValueType::Utf8, 2);
        builder.append_null();
        builder.append_null();
        assert_eq!(builder.len(), 2);

        let array = builder.finish();
        let strings = array.as_any().downcast_ref::<StringArray>().unwrap();
        assert_eq!(strings.len(), 2);
        assert_eq!(strings.null_count(), 2);
    }

    #[test]
    fn test_builders_are_independent() {
        let mut first = ColumnBuilder::new(ValueType::Int32, 1);
        let second = ColumnBuilder::new(ValueType::Int32, 1);
        first.append_null();

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 0);

        let array = first.finish();
        let ints = array.as_any().downcast_ref::<Int32Array>().unwrap();
        assert!(ints.is_null(0));
    }
}
