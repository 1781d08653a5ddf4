//! Shared decode helpers and error type

use thiserror::Error;

/// Errors raised while decoding JSON input into records
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Malformed JSON document
    #[error("json decode failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed NDJSON line (1-based)
    #[error("ndjson decode failed at line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A record that is not a JSON object
    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },

    /// An NDJSON line (1-based) that is not a JSON object
    #[error("ndjson line {line} is not a JSON object")]
    LineNotAnObject { line: usize },

    /// Neither decoding attempt succeeded in auto-detect mode
    #[error("{0}")]
    Unsupported(String),

    /// Input is not valid UTF-8
    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// First non-whitespace byte of `bytes`, if any.
pub(crate) fn first_significant_byte(bytes: &[u8]) -> Option<u8> {
    bytes.iter().copied().find(|b| !b.is_ascii_whitespace())
}

/// True when `bytes` looks like a single JSON document rather than NDJSON.
///
/// Arrays and the `null` literal are whole documents; anything else is read
/// line by line, which also covers a single object.
pub fn looks_like_document(bytes: &[u8]) -> bool {
    matches!(first_significant_byte(bytes), Some(b'[') | Some(b'n'))
}
