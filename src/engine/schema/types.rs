use crate::engine::core::OrderStatus;

/// A timestamp value that passed validation but has not been resolved to an
/// instant yet. The scalar model carries no native date type, so a timestamp
/// arrives either as text or as an epoch-like number.
#[derive(Debug, Clone, PartialEq)]
pub enum TsValue {
    Text(String),
    Number(f64),
}

/// A record whose every field passed coercion. Absence of this record for a
/// given input index means that row is excluded from aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    pub ts: TsValue,
    pub name: String,
    pub qty: f64,
    pub pricemode: String,
    pub linetotal: f64,
    pub status: OrderStatus,
}
