//! JSON output serialization (NDJSON format)
//!
//! Serializes Arrow RecordBatches to newline-delimited JSON (NDJSON).
//! Each row becomes a JSON object with field names from the schema.

use arrow::array::RecordBatch;
use arrow::json::LineDelimitedWriter;

use crate::error::Result;

/// Serialize a RecordBatch to newline-delimited JSON, one object per row.
///
/// Null values are left out of their row object.
pub fn to_json(batch: &RecordBatch) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut writer = LineDelimitedWriter::new(&mut buffer);
        writer.write(batch)?;
        writer.finish()?;
    }
    Ok(buffer)
}
