pub mod errors;
pub mod pipeline;
pub mod reader;

pub use errors::IngestError;
pub use pipeline::{IngestReport, ingest_records};
pub use reader::{read_file, read_records};

#[cfg(test)]
mod pipeline_test;
