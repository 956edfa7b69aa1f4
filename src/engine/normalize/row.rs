use crate::engine::core::SalesRow;
use crate::engine::schema::types::{TsValue, ValidatedRecord};
use crate::shared::datetime::TimeParser;

/// Turn a validated record into a canonical sales row.
///
/// This is the single place the cancellation-sign convention is established:
/// magnitudes are stored absolute, and `signed_qty` / `signed_total` carry
/// `-1` iff the row is cancelled. Everything downstream trusts this
/// unconditionally.
pub fn normalize_row(record: &ValidatedRecord) -> Result<SalesRow, String> {
    let ts = match &record.ts {
        TsValue::Number(n) => TimeParser::resolve_numeric(*n)?,
        TsValue::Text(s) => TimeParser::resolve_text(s)?,
    };

    let qty = record.qty.abs();
    let linetotal = record.linetotal.abs();
    let sign = record.status.sign();

    Ok(SalesRow {
        ts,
        name: record.name.clone(),
        qty,
        pricemode: record.pricemode.clone(),
        linetotal,
        status: record.status,
        signed_total: sign * linetotal,
        signed_qty: sign * qty,
    })
}
