use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::engine::ingest::errors::IngestError;
use crate::engine::schema::RawRecord;

/// Read a header-driven CSV stream into raw records, one per data line.
///
/// Every cell arrives as a string value keyed by its header; downstream
/// stages own all typing. A malformed container (e.g. a row with the wrong
/// field count) is a structural error and fails the whole read.
pub fn read_records<R: Read>(input: R) -> Result<Vec<RawRecord>, IngestError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(input);

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result?;

        // Skip fully empty lines the way lenient CSV exporters emit them.
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let mut row = RawRecord::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            row.insert(header.to_string(), Value::String(cell.to_string()));
        }
        records.push(row);
    }

    debug!(rows = records.len(), "csv read complete");
    Ok(records)
}

pub fn read_file(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    let file = File::open(path)?;
    read_records(file)
}
