use crate::engine::aggregate::bucket::AggregatedSales;
use crate::engine::core::{MAX_ROWS, SalesRow};
use crate::shared::datetime::HourBucketer;

/// Fold a batch of rows into one `AggregatedSales` in a single linear pass.
///
/// Buckets are created on first reference with zero-initialized fields.
/// Callers never invoke this for an empty row set ("no rows" means "no
/// summary") and never hand over more than `MAX_ROWS` rows; the batch guard
/// upstream enforces the cap, this only double-checks it.
pub fn aggregate(rows: &[SalesRow], bucketer: &HourBucketer) -> AggregatedSales {
    debug_assert!(!rows.is_empty(), "caller must not aggregate an empty batch");
    debug_assert!(rows.len() <= MAX_ROWS, "caller must enforce the row cap");

    let mut agg = AggregatedSales::default();

    for row in rows {
        agg.total.add(row);

        let hour_key = bucketer.key_for(row.ts);

        agg.by_name.entry(row.name.clone()).or_default().add(row);
        agg.by_pricemode
            .entry(row.pricemode.clone())
            .or_default()
            .add(row);
        agg.by_hour.entry(hour_key).or_default().add(row);

        if row.status.is_cancelled() {
            agg.cancelled.count += 1;
            agg.cancelled.amount += row.signed_total.abs();
        }
    }

    agg
}
