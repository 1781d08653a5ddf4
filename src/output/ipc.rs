//! Arrow IPC output serialization
//!
//! Serializes converted RecordBatches to the IPC streaming format.

use arrow::array::RecordBatch;
use arrow::ipc::writer::StreamWriter;

use crate::error::Result;

/// Serialize a RecordBatch to the Arrow IPC streaming format.
///
/// The stream carries the schema message followed by one record batch, so a
/// reader such as `pyarrow.ipc.open_stream()` sees the same nullable columns.
///
/// ```ignore
/// let batch = rows2arrow::convert(&readings)?;
/// let ipc_bytes = rows2arrow::to_ipc(&batch)?;
/// ```
pub fn to_ipc(batch: &RecordBatch) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut writer = StreamWriter::try_new(&mut buffer, &batch.schema())?;
        writer.write(batch)?;
        writer.finish()?;
    }
    Ok(buffer)
}
