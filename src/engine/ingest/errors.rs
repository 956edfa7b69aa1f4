use thiserror::Error;

use crate::engine::core::{ParseIssue, ParseStats};

/// Fatal batch-level failures. Per-row problems are not errors; they travel
/// as `ParseIssue` entries inside a successful report.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Row splitting itself failed; no partial issue list is meaningful.
    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The batch exceeded the row cap. Nothing was aggregated, but the
    /// counts and collected issues are carried so the caller can still show
    /// the user why the batch was rejected.
    #[error("rows exceed maximum allowed ({limit})")]
    TooManyRows {
        limit: usize,
        stats: ParseStats,
        issues: Vec<ParseIssue>,
    },
}
