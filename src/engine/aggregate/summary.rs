use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::Serialize;

use crate::engine::aggregate::bucket::{AggregateBucket, AggregatedSales, CancelledStats};

/// Fixed per-breakdown limit for persisted summary snapshots, independent of
/// whatever limits a display layer picks.
pub const SNAPSHOT_TOP_LIMIT: usize = 10;

/// One entry of a top-N breakdown list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryEntry {
    pub key: String,
    pub signed_total: f64,
    pub signed_qty: f64,
    pub count: u64,
}

/// Reduce one breakdown to its top `limit` entries by descending absolute
/// signed total. The sort is stable, so ties keep the map's insertion order
/// and repeated runs over identical input are bit-for-bit identical.
pub fn top_entries(
    breakdown: &IndexMap<String, AggregateBucket>,
    limit: usize,
) -> Vec<SummaryEntry> {
    let mut entries: Vec<SummaryEntry> = breakdown
        .iter()
        .map(|(key, bucket)| SummaryEntry {
            key: key.clone(),
            signed_total: bucket.signed_total,
            signed_qty: bucket.signed_qty,
            count: bucket.count,
        })
        .collect();

    // Vec::sort_by is stable; totals are finite by construction.
    entries.sort_by(|a, b| {
        b.signed_total
            .abs()
            .partial_cmp(&a.signed_total.abs())
            .unwrap_or(Ordering::Equal)
    });
    entries.truncate(limit);
    entries
}

/// Compact persistence payload: totals plus the fixed-limit top lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarySnapshot {
    pub total: AggregateBucket,
    pub cancelled: CancelledStats,
    pub top_by_name: Vec<SummaryEntry>,
    pub top_by_pricemode: Vec<SummaryEntry>,
    pub top_by_hour: Vec<SummaryEntry>,
}

impl SummarySnapshot {
    pub fn from_aggregates(agg: &AggregatedSales) -> Self {
        Self {
            total: agg.total,
            cancelled: agg.cancelled,
            top_by_name: top_entries(&agg.by_name, SNAPSHOT_TOP_LIMIT),
            top_by_pricemode: top_entries(&agg.by_pricemode, SNAPSHOT_TOP_LIMIT),
            top_by_hour: top_entries(&agg.by_hour, SNAPSHOT_TOP_LIMIT),
        }
    }
}
