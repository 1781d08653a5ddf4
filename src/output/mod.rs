//! Output serialization for converted RecordBatches
//!
//! Framing and compression are delegated to the Arrow and Parquet writers.

mod ipc;
mod json;
#[cfg(feature = "parquet")]
mod parquet;

pub use ipc::to_ipc;
pub use json::to_json;
#[cfg(feature = "parquet")]
pub use parquet::{to_parquet, to_parquet_bytes};
