//! Arrow layer for rows2arrow
//!
//! Provides Arrow RecordBatch construction from records:
//! - Schema synthesis from a record shape
//! - Typed column builders and raw value coercion
//! - RecordBatch assembly transposing rows into columns

mod batch;
mod builder;
mod coerce;
mod schema;

pub use batch::records_to_arrow;
pub use builder::ColumnBuilder;
pub use coerce::append_value;
pub use schema::synthesize_schema;
