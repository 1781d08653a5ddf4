//! JSON decode layer - transforms raw bytes into dynamic records
//!
//! Records decoded here carry no compile-time shape. Their schema is either
//! supplied as an explicit [`RecordShape`](crate::RecordShape) or inferred from
//! the first record.
//!
//! # Usage
//!
//! ```ignore
//! use rows2arrow::decode::{decode_records, InputFormat};
//!
//! let records = decode_records(bytes, InputFormat::Ndjson)?;
//! ```

mod common;

pub use common::{looks_like_document, DecodeError};

use serde_json::Value;

/// A record decoded from JSON; key order follows the input document.
pub type JsonRecord = serde_json::Map<String, Value>;

/// Input format for JSON decoding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    /// One JSON document: an array of objects, a single object, or `null`
    Json,
    /// Newline-delimited JSON, one object per non-blank line
    Ndjson,
    /// Auto-detect document vs NDJSON from the first significant byte
    Auto,
}

impl InputFormat {
    /// Infer input format from Content-Type header.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let content_type = content_type.map(|v| v.trim().to_ascii_lowercase());

        match content_type.as_deref() {
            Some("application/json") => InputFormat::Json,
            Some("application/x-ndjson")
            | Some("application/ndjson")
            | Some("application/jsonl")
            | Some("application/json-lines") => InputFormat::Ndjson,
            _ => InputFormat::Auto,
        }
    }
}

/// Decode JSON bytes into records.
///
/// A `null` document or blank NDJSON input decodes to no records, which the
/// converter rejects as empty input.
pub fn decode_records(bytes: &[u8], format: InputFormat) -> Result<Vec<JsonRecord>, DecodeError> {
    match format {
        InputFormat::Json => decode_document(bytes),
        InputFormat::Ndjson => decode_lines(bytes),
        InputFormat::Auto => {
            if looks_like_document(bytes) {
                decode_document(bytes).or_else(|doc_err| {
                    decode_lines(bytes).map_err(|ndjson_err| {
                        DecodeError::Unsupported(format!(
                            "json decode failed: {}; ndjson fallback failed: {}",
                            doc_err, ndjson_err
                        ))
                    })
                })
            } else {
                decode_lines(bytes).or_else(|ndjson_err| {
                    decode_document(bytes).map_err(|doc_err| {
                        DecodeError::Unsupported(format!(
                            "ndjson decode failed: {}; json fallback failed: {}",
                            ndjson_err, doc_err
                        ))
                    })
                })
            }
        }
    }
}

fn decode_document(bytes: &[u8]) -> Result<Vec<JsonRecord>, DecodeError> {
    let document: Value = serde_json::from_slice(bytes)?;
    match document {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| into_record(index, item))
            .collect(),
        other => Ok(vec![into_record(0, other)?]),
    }
}

fn decode_lines(bytes: &[u8]) -> Result<Vec<JsonRecord>, DecodeError> {
    let text = std::str::from_utf8(bytes)?;
    let mut records = Vec::new();

    for (line_index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line).map_err(|source| DecodeError::Line {
            line: line_index + 1,
            source,
        })?;
        match value {
            Value::Object(map) => records.push(map),
            _ => {
                return Err(DecodeError::LineNotAnObject {
                    line: line_index + 1,
                })
            }
        }
    }

    Ok(records)
}

fn into_record(index: usize, value: Value) -> Result<JsonRecord, DecodeError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(DecodeError::NotAnObject { index }),
    }
}
