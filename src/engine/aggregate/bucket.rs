use indexmap::IndexMap;
use serde::Serialize;

use crate::engine::core::SalesRow;

/// Accumulator for one breakdown key. Created lazily on first contribution,
/// mutated additively, never decremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateBucket {
    pub signed_total: f64,
    pub signed_qty: f64,
    pub count: u64,
}

impl AggregateBucket {
    pub fn add(&mut self, row: &SalesRow) {
        self.signed_total += row.signed_total;
        self.signed_qty += row.signed_qty;
        self.count += 1;
    }
}

/// Cancellation counters: how many rows were cancelled and the absolute
/// amount they would have contributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CancelledStats {
    pub count: u64,
    pub amount: f64,
}

/// One batch's aggregates: the grand-total bucket plus three keyed
/// breakdowns. Maps are insertion-ordered so iteration is deterministic,
/// which the summarizer's stable tie-break relies on.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedSales {
    pub total: AggregateBucket,
    pub by_name: IndexMap<String, AggregateBucket>,
    pub by_pricemode: IndexMap<String, AggregateBucket>,
    pub by_hour: IndexMap<String, AggregateBucket>,
    pub cancelled: CancelledStats,
}
