//! Schema synthesis from a record shape.

use std::collections::HashSet;

use arrow::datatypes::{Field, Schema};

use crate::error::{Error, Result};
use crate::record::RecordShape;
use crate::types::map_host_type;

/// Build the Arrow schema for `shape`, one nullable field per record field.
///
/// Fails on the first field whose host type has no columnar mapping, or on a
/// repeated field name.
pub fn synthesize_schema(shape: &RecordShape) -> Result<Schema> {
    let mut seen = HashSet::with_capacity(shape.len());
    let mut fields = Vec::with_capacity(shape.len());

    for field in shape.fields() {
        let value_type =
            map_host_type(&field.host_type).ok_or_else(|| Error::UnsupportedFieldType {
                name: field.name.clone(),
                host_type: field.host_type.clone(),
            })?;
        if !seen.insert(field.name.as_str()) {
            return Err(Error::DuplicateField(field.name.clone()));
        }
        fields.push(Field::new(&field.name, value_type.data_type(), true));
    }

    Ok(Schema::new(fields))
}
