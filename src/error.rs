//! Error types for rows2arrow

use arrow::datatypes::DataType;
use thiserror::Error;

use crate::decode::DecodeError;
use crate::types::HostType;

/// Result type alias using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during record to RecordBatch conversion
#[derive(Debug, Error)]
pub enum Error {
    /// The record sequence was absent or held no records, so no schema can be inferred
    #[error("empty input: at least one record is required to infer a schema")]
    EmptyInput,

    /// A field's declared host type has no columnar counterpart
    #[error("unsupported type `{host_type}` for field `{name}`")]
    UnsupportedFieldType { name: String, host_type: HostType },

    /// Two fields of a record shape share a name
    #[error("duplicate field name `{0}`")]
    DuplicateField(String),

    /// No column builder exists for this Arrow type
    #[error("unsupported column type: {0}")]
    UnsupportedType(DataType),

    /// A column builder is bound to a different type than its field.
    ///
    /// Indicates the type mapper and the builders disagree; never raised for a
    /// batch assembled by this crate.
    #[error("builder for field `{field}` is bound to {actual}, expected {expected}")]
    UnsupportedBuilder {
        field: String,
        expected: DataType,
        actual: DataType,
    },

    /// A non-null value could not be converted to its column type
    #[error("cannot convert value {value} of field `{field}` at row {row}")]
    ValueConversion {
        field: String,
        row: usize,
        value: String,
    },

    /// Error decoding JSON records
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error during Arrow operations
    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Error writing Parquet output
    #[cfg(feature = "parquet")]
    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
