//! RecordBatch assembly: transposes rows into one column per field.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::arrow::builder::ColumnBuilder;
use crate::arrow::coerce::append_value;
use crate::arrow::schema::synthesize_schema;
use crate::error::{Error, Result};
use crate::record::{FieldAccess, RecordShape};

/// Convert `records` into a RecordBatch whose schema is synthesized from `shape`.
///
/// Row `i` of every column holds field values of `records[i]`. All records are
/// consumed before the batch is built; any failure aborts with no partial output.
///
/// # Errors
///
/// * [`Error::EmptyInput`] - `records` is empty
/// * [`Error::UnsupportedFieldType`] / [`Error::DuplicateField`] - `shape` has no valid schema
/// * [`Error::ValueConversion`] - a value does not fit its column type
pub fn records_to_arrow<R: FieldAccess>(shape: &RecordShape, records: &[R]) -> Result<RecordBatch> {
    if records.is_empty() {
        return Err(Error::EmptyInput);
    }
    let num_rows = records.len();

    let schema = Arc::new(synthesize_schema(shape)?);
    debug!(fields = schema.fields().len(), "synthesized schema");

    let mut builders = IndexMap::with_capacity(schema.fields().len());
    for field in schema.fields() {
        let builder = ColumnBuilder::try_for_data_type(field.data_type(), num_rows)?;
        builders.insert(field.name().clone(), builder);
    }

    for (row, record) in records.iter().enumerate() {
        for (field_shape, (field, builder)) in shape
            .fields()
            .iter()
            .zip(schema.fields().iter().zip(builders.values_mut()))
        {
            let value = record.raw_value(field_shape);
            append_value(builder, field, row, &value)?;
        }
    }
    debug!(rows = num_rows, "populated column builders");

    let arrays: Vec<ArrayRef> = builders
        .into_iter()
        .map(|(name, builder)| {
            let array = builder.finish();
            trace!(column = %name, nulls = array.null_count(), "finalized column");
            array
        })
        .collect();

    let options = RecordBatchOptions::new().with_row_count(Some(num_rows));
    Ok(RecordBatch::try_new_with_options(schema, arrays, &options)?)
}
