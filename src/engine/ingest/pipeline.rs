use tracing::{info, warn};

use crate::engine::aggregate::{AggregatedSales, aggregate};
use crate::engine::core::{MAX_ROWS, ParseIssue, ParseStats, SalesRow};
use crate::engine::ingest::errors::IngestError;
use crate::engine::normalize::normalize_row;
use crate::engine::schema::{RawRecord, project_row, validate};
use crate::shared::datetime::HourBucketer;

/// Outcome of one batch: the accepted rows, their aggregates, the boundary
/// counts, and every per-row issue in input order.
///
/// The issue list is never truncated here; display caps are a presentation
/// concern owned by the caller, while `stats.invalid` always reflects the
/// true rejection count.
#[derive(Debug)]
pub struct IngestReport {
    pub rows: Vec<SalesRow>,
    pub summary: Option<AggregatedSales>,
    pub stats: ParseStats,
    pub issues: Vec<ParseIssue>,
}

/// Run one batch through the full pipeline: project, validate, normalize,
/// guard, aggregate.
///
/// Per-row failures drop the row, record one issue with the 1-based input
/// index, and keep going. The only fatal path is the row cap: a batch whose
/// accepted rows exceed `MAX_ROWS` fails atomically with no aggregation.
pub fn ingest_records(
    records: &[RawRecord],
    bucketer: &HourBucketer,
) -> Result<IngestReport, IngestError> {
    let mut rows: Vec<SalesRow> = Vec::new();
    let mut issues: Vec<ParseIssue> = Vec::new();

    for (position, record) in records.iter().enumerate() {
        let index = position + 1;
        let projected = project_row(record);

        let validated = match validate(&projected) {
            Ok(validated) => validated,
            Err(message) => {
                issues.push(ParseIssue { index, message });
                continue;
            }
        };

        match normalize_row(&validated) {
            Ok(row) => rows.push(row),
            Err(message) => issues.push(ParseIssue { index, message }),
        }
    }

    let stats = ParseStats {
        total: records.len(),
        valid: rows.len(),
        invalid: issues.len(),
    };

    if rows.len() > MAX_ROWS {
        warn!(
            valid = stats.valid,
            limit = MAX_ROWS,
            "batch rejected by row cap"
        );
        return Err(IngestError::TooManyRows {
            limit: MAX_ROWS,
            stats,
            issues,
        });
    }

    let summary = if rows.is_empty() {
        None
    } else {
        Some(aggregate(&rows, bucketer))
    };

    info!(
        total = stats.total,
        valid = stats.valid,
        invalid = stats.invalid,
        "batch ingested"
    );

    Ok(IngestReport {
        rows,
        summary,
        stats,
        issues,
    })
}
