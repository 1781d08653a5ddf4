//! Parquet output serialization
//!
//! Serializes converted RecordBatches to Parquet.
//! Only compiled with the `parquet` feature.

use arrow::array::RecordBatch;
use bytes::Bytes;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::error::Result;

/// Serialize a RecordBatch to an uncompressed, in-memory Parquet file.
///
/// ```ignore
/// let batch = rows2arrow::convert(&readings)?;
/// std::fs::write("readings.parquet", rows2arrow::to_parquet(&batch)?)?;
/// ```
pub fn to_parquet(batch: &RecordBatch) -> Result<Vec<u8>> {
    let props = WriterProperties::builder()
        .set_compression(Compression::UNCOMPRESSED)
        .build();

    let mut buffer = Vec::new();
    let mut writer = ArrowWriter::try_new(&mut buffer, batch.schema(), Some(props))?;
    writer.write(batch)?;
    writer.close()?;

    Ok(buffer)
}

/// Same as [`to_parquet`], returning `Bytes`.
pub fn to_parquet_bytes(batch: &RecordBatch) -> Result<Bytes> {
    to_parquet(batch).map(Bytes::from)
}
