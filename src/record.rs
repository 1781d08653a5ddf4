//! Record shapes, raw field values and the traits records implement.
//!
//! A record exposes its fields through [`FieldAccess`]; typed records also
//! describe their shape at compile time through [`Record`]. The [`record!`]
//! macro derives both for a plain struct.
//!
//! [`record!`]: crate::record!

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::HostType;

/// Name and declared host type of one record field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldShape {
    pub name: String,
    #[serde(rename = "type")]
    pub host_type: HostType,
}

impl FieldShape {
    pub fn new(name: impl Into<String>, host_type: HostType) -> Self {
        Self {
            name: name.into(),
            host_type,
        }
    }
}

/// Ordered field list of a record type. Declaration order is column order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordShape {
    fields: Vec<FieldShape>,
}

impl RecordShape {
    pub fn new(fields: Vec<FieldShape>) -> Self {
        Self { fields }
    }

    /// Parse an explicit field-descriptor table such as
    /// `[{"name": "id", "type": "int32"}, {"name": "note", "type": {"nullable": "string"}}]`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn fields(&self) -> &[FieldShape] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<FieldShape> for RecordShape {
    fn from_iter<I: IntoIterator<Item = FieldShape>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A loosely-typed field value as read off a record.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue<'a> {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(Cow<'a, str>),
    /// A nested value (list, object) with its textual rendering. Never coercible.
    Composite(Cow<'a, str>),
}

impl RawValue<'_> {
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }
}

impl fmt::Display for RawValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => f.write_str("null"),
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Int(i) => write!(f, "{}", i),
            RawValue::UInt(u) => write!(f, "{}", u),
            RawValue::Float(x) => write!(f, "{:?}", x),
            RawValue::Str(s) => write!(f, "{:?}", s),
            RawValue::Composite(s) => f.write_str(s),
        }
    }
}

/// Read access to the fields of one record.
pub trait FieldAccess {
    /// Raw value of `field`. A field the record does not carry reads as
    /// [`RawValue::Null`].
    fn raw_value(&self, field: &FieldShape) -> RawValue<'_>;
}

/// A record type whose shape is known at compile time.
pub trait Record: FieldAccess {
    /// Field names and declared host types, in declaration order.
    fn shape() -> RecordShape;
}

/// A Rust field type usable inside [`record!`](crate::record!).
pub trait HostScalar {
    fn host_type() -> HostType;

    fn raw_value(&self) -> RawValue<'_>;
}

impl HostScalar for String {
    fn host_type() -> HostType {
        HostType::String
    }

    fn raw_value(&self) -> RawValue<'_> {
        RawValue::Str(Cow::Borrowed(self.as_str()))
    }
}

impl HostScalar for bool {
    fn host_type() -> HostType {
        HostType::Boolean
    }

    fn raw_value(&self) -> RawValue<'_> {
        RawValue::Bool(*self)
    }
}

impl HostScalar for f64 {
    fn host_type() -> HostType {
        HostType::Float64
    }

    fn raw_value(&self) -> RawValue<'_> {
        RawValue::Float(*self)
    }
}

impl HostScalar for f32 {
    fn host_type() -> HostType {
        HostType::Float32
    }

    fn raw_value(&self) -> RawValue<'_> {
        RawValue::Float(f64::from(*self))
    }
}

macro_rules! impl_host_scalar_int {
    ($($ty:ty => $host:expr, $variant:ident, $wide:ty;)*) => {
        $(
            impl HostScalar for $ty {
                fn host_type() -> HostType {
                    $host
                }

                fn raw_value(&self) -> RawValue<'_> {
                    RawValue::$variant(<$wide>::from(*self))
                }
            }
        )*
    };
}

// Integers outside {i32, i64} still read as values but map to `Other`, so a
// shape declaring them is rejected during schema synthesis.
impl_host_scalar_int! {
    i32 => HostType::Int32, Int, i64;
    i64 => HostType::Int64, Int, i64;
    i8 => HostType::other("int8"), Int, i64;
    i16 => HostType::other("int16"), Int, i64;
    u8 => HostType::other("uint8"), UInt, u64;
    u16 => HostType::other("uint16"), UInt, u64;
    u32 => HostType::other("uint32"), UInt, u64;
    u64 => HostType::other("uint64"), UInt, u64;
}

impl<T: HostScalar> HostScalar for Option<T> {
    fn host_type() -> HostType {
        HostType::nullable(T::host_type())
    }

    fn raw_value(&self) -> RawValue<'_> {
        match self {
            Some(value) => value.raw_value(),
            None => RawValue::Null,
        }
    }
}

impl<T: HostScalar> HostScalar for Vec<T> {
    fn host_type() -> HostType {
        HostType::Other(format!("list<{}>", T::host_type()))
    }

    fn raw_value(&self) -> RawValue<'_> {
        let items: Vec<String> = self.iter().map(|v| v.raw_value().to_string()).collect();
        RawValue::Composite(Cow::Owned(format!("[{}]", items.join(", "))))
    }
}

/// Declare a struct and implement [`Record`] and [`FieldAccess`] for it.
///
/// Every field type must implement [`HostScalar`].
///
/// ```
/// rows2arrow::record! {
///     #[derive(Debug, Clone)]
///     pub struct Reading {
///         pub id: i32,
///         pub name: Option<String>,
///     }
/// }
///
/// let batch = rows2arrow::convert(&[Reading { id: 1, name: None }]).unwrap();
/// assert_eq!(batch.num_rows(), 1);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::FieldAccess for $name {
            fn raw_value(&self, field: &$crate::FieldShape) -> $crate::RawValue<'_> {
                match field.name.as_str() {
                    $(
                        stringify!($field) => $crate::HostScalar::raw_value(&self.$field),
                    )*
                    _ => $crate::RawValue::Null,
                }
            }
        }

        impl $crate::Record for $name {
            fn shape() -> $crate::RecordShape {
                $crate::RecordShape::new(vec![
                    $(
                        $crate::FieldShape::new(
                            stringify!($field),
                            <$ty as $crate::HostScalar>::host_type(),
                        ),
                    )*
                ])
            }
        }
    };
}
