//! Example: Convert in-memory records and NDJSON to Parquet
//!
//! Run with: cargo run --example records_to_parquet --features parquet

use rows2arrow::{convert, convert_json, record, to_parquet, InputFormat};
use std::fs;
use std::path::Path;

record! {
    struct Trip {
        vehicle: String,
        distance_km: f64,
        passengers: Option<i32>,
        completed: bool,
    }
}

const TRIPS_NDJSON: &str = r#"{"vehicle": "bus-7", "distance_km": 12.4, "passengers": 31, "completed": true}
{"vehicle": "bus-9", "distance_km": 3.1, "passengers": 4, "completed": false}
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let output_dir = Path::new("target").join("demo-output");
    fs::create_dir_all(&output_dir)?;

    let trips = vec![
        Trip {
            vehicle: "tram-1".to_string(),
            distance_km: 8.75,
            passengers: Some(120),
            completed: true,
        },
        Trip {
            vehicle: "tram-2".to_string(),
            distance_km: 0.0,
            passengers: None,
            completed: false,
        },
    ];
    let batch = convert(&trips)?;
    write_parquet(&output_dir.join("trips.parquet"), &batch)?;

    let batch = convert_json(TRIPS_NDJSON.as_bytes(), InputFormat::Auto)?;
    write_parquet(&output_dir.join("trips_json.parquet"), &batch)?;

    println!("Output files in: {}", output_dir.display());
    Ok(())
}

fn write_parquet(
    path: &Path,
    batch: &arrow::array::RecordBatch,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::write(path, to_parquet(batch)?)?;
    println!(
        "Wrote {} ({} rows, {} columns)",
        path.display(),
        batch.num_rows(),
        batch.num_columns()
    );
    Ok(())
}
