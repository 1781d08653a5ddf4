//! rows2arrow: convert in-memory records to Arrow RecordBatches
//!
//! Records are row-oriented values with named scalar fields. The converter
//! synthesizes a schema from the record shape, builds one typed column per
//! field, transposes every record into those columns and returns a single
//! Arrow `RecordBatch`.
//!
//! # Typed records
//!
//! ```
//! use arrow::array::{Array, Int32Array};
//!
//! rows2arrow::record! {
//!     pub struct User {
//!         pub id: i32,
//!         pub name: Option<String>,
//!     }
//! }
//!
//! let users = vec![
//!     User { id: 1, name: Some("a".to_string()) },
//!     User { id: 2, name: None },
//! ];
//! let batch = rows2arrow::convert(&users)?;
//!
//! let ids = batch.column(0).as_any().downcast_ref::<Int32Array>().unwrap();
//! assert_eq!(ids.value(1), 2);
//! assert!(batch.column(1).is_null(1));
//! # Ok::<(), rows2arrow::Error>(())
//! ```
//!
//! # JSON records
//!
//! ```
//! use rows2arrow::{convert_json, InputFormat};
//!
//! let batch = convert_json(br#"[{"id": 1, "ok": true}]"#, InputFormat::Json)?;
//! assert_eq!(batch.num_rows(), 1);
//! # Ok::<(), rows2arrow::Error>(())
//! ```

pub mod arrow;
pub mod convert;
pub mod decode;
pub mod error;
pub mod output;
pub mod record;
pub mod types;

use ::arrow::array::RecordBatch;
use tracing::debug;

pub use crate::arrow::records_to_arrow;
pub use decode::{decode_records, InputFormat, JsonRecord};
pub use error::{Error, Result};
pub use output::{to_ipc, to_json};
#[cfg(feature = "parquet")]
pub use output::{to_parquet, to_parquet_bytes};
pub use record::{FieldAccess, FieldShape, HostScalar, RawValue, Record, RecordShape};
pub use types::{map_host_type, HostType, ValueType};

/// Convert typed records to a RecordBatch.
///
/// The schema comes from `R::shape()`; every column is nullable.
///
/// # Errors
///
/// * [`Error::EmptyInput`] - `records` is empty
/// * [`Error::UnsupportedFieldType`] - a field type has no columnar mapping
/// * [`Error::ValueConversion`] - a field value does not fit its column
pub fn convert<R: Record>(records: &[R]) -> Result<RecordBatch> {
    records_to_arrow(&R::shape(), records)
}

/// Decode JSON records and convert them, inferring the schema from the first record.
///
/// A first-record value that is `null`, an array or an object leaves its field
/// without an inferable type and fails with [`Error::UnsupportedFieldType`];
/// use [`convert_json_with_shape`] to declare such fields explicitly.
pub fn convert_json(bytes: &[u8], format: InputFormat) -> Result<RecordBatch> {
    let records = decode_records(bytes, format)?;
    let first = records.first().ok_or(Error::EmptyInput)?;
    let shape = convert::infer_shape(first);
    debug!(records = records.len(), fields = shape.len(), "inferred JSON record shape");
    records_to_arrow(&shape, &records)
}

/// Decode JSON records and convert them using an explicit record shape.
///
/// Keys missing from a record read as null; keys absent from `shape` are ignored.
pub fn convert_json_with_shape(
    bytes: &[u8],
    format: InputFormat,
    shape: &RecordShape,
) -> Result<RecordBatch> {
    let records = decode_records(bytes, format)?;
    records_to_arrow(shape, &records)
}
