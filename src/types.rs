//! Host type descriptors and their mapping onto columnar value types.

use std::fmt;

use arrow::datatypes::DataType;
use serde::{Deserialize, Serialize};

/// Descriptor of a record field's declared host type.
///
/// Serialized in snake case, so an explicit shape table can spell a nullable
/// integer as `{"nullable": "int32"}` and a list as `{"other": "list<int32>"}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostType {
    String,
    Int32,
    Int64,
    Float64,
    Float32,
    Boolean,
    /// Optional wrapper around another host type
    Nullable(Box<HostType>),
    /// Any type outside the scalar domain, named for diagnostics
    Other(String),
}

impl HostType {
    /// Wrap `inner` in a nullable descriptor.
    pub fn nullable(inner: HostType) -> Self {
        HostType::Nullable(Box::new(inner))
    }

    pub fn other(name: impl Into<String>) -> Self {
        HostType::Other(name.into())
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostType::String => f.write_str("string"),
            HostType::Int32 => f.write_str("int32"),
            HostType::Int64 => f.write_str("int64"),
            HostType::Float64 => f.write_str("float64"),
            HostType::Float32 => f.write_str("float32"),
            HostType::Boolean => f.write_str("boolean"),
            HostType::Nullable(inner) => write!(f, "{}?", inner),
            HostType::Other(name) => f.write_str(name),
        }
    }
}

/// The closed set of columnar value types a record field can map to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Utf8,
    Int32,
    Int64,
    Float64,
    Float32,
    Boolean,
}

impl ValueType {
    /// Arrow data type of columns holding this value type.
    pub fn data_type(self) -> DataType {
        match self {
            ValueType::Utf8 => DataType::Utf8,
            ValueType::Int32 => DataType::Int32,
            ValueType::Int64 => DataType::Int64,
            ValueType::Float64 => DataType::Float64,
            ValueType::Float32 => DataType::Float32,
            ValueType::Boolean => DataType::Boolean,
        }
    }
}

impl TryFrom<&DataType> for ValueType {
    type Error = DataType;

    fn try_from(data_type: &DataType) -> Result<Self, Self::Error> {
        match data_type {
            DataType::Utf8 => Ok(ValueType::Utf8),
            DataType::Int32 => Ok(ValueType::Int32),
            DataType::Int64 => Ok(ValueType::Int64),
            DataType::Float64 => Ok(ValueType::Float64),
            DataType::Float32 => Ok(ValueType::Float32),
            DataType::Boolean => Ok(ValueType::Boolean),
            other => Err(other.clone()),
        }
    }
}

/// Map a host type to its columnar value type.
///
/// Returns `None` for anything outside the scalar domain. A nullable wrapper is
/// unwrapped once; `Nullable(Nullable(_))` is unsupported.
pub fn map_host_type(host_type: &HostType) -> Option<ValueType> {
    match host_type {
        HostType::Nullable(inner) => match inner.as_ref() {
            HostType::Nullable(_) => None,
            scalar => map_scalar(scalar),
        },
        scalar => map_scalar(scalar),
    }
}

fn map_scalar(host_type: &HostType) -> Option<ValueType> {
    match host_type {
        HostType::String => Some(ValueType::Utf8),
        HostType::Int32 => Some(ValueType::Int32),
        HostType::Int64 => Some(ValueType::Int64),
        HostType::Float64 => Some(ValueType::Float64),
        HostType::Float32 => Some(ValueType::Float32),
        HostType::Boolean => Some(ValueType::Boolean),
        HostType::Nullable(_) | HostType::Other(_) => None,
    }
}
