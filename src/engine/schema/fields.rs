use serde_json::Value;

/// One input line as delivered by the source layer: arbitrary string keys,
/// untyped scalar values. Owned by the resolver during projection only.
pub type RawRecord = serde_json::Map<String, Value>;

/// The six fixed semantic slots every input row must resolve to, regardless
/// of how the source file names its headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Ts,
    Name,
    Qty,
    Pricemode,
    Linetotal,
    Status,
}

impl CanonicalField {
    /// Header aliases accepted for this slot, in fixed priority order.
    /// The first alias present with a usable value wins.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            CanonicalField::Ts => &["ts", "timestamp", "time", "date", "datetime", "createdAt"],
            CanonicalField::Name => {
                &["name", "menu", "item", "itemName", "product", "productName"]
            }
            CanonicalField::Qty => &["qty", "quantity", "count", "amount", "units"],
            CanonicalField::Pricemode => {
                &["pricemode", "priceMode", "price_mode", "mode", "pricing"]
            }
            CanonicalField::Linetotal => &[
                "linetotal",
                "lineTotal",
                "line_total",
                "total",
                "totalPrice",
                "amountTotal",
            ],
            CanonicalField::Status => &["status", "state", "orderStatus", "fulfillmentStatus"],
        }
    }
}

/// A record reduced to the canonical slots, values still untyped.
/// `pricemode` is the only slot with a resolver-level default.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRecord {
    pub ts: Option<Value>,
    pub name: Option<Value>,
    pub qty: Option<Value>,
    pub pricemode: Value,
    pub linetotal: Option<Value>,
    pub status: Option<Value>,
}

/// Scan the field's alias list and return the first usable value.
///
/// Nulls are skipped. String values are trimmed; an all-whitespace string
/// counts as absent and the scan moves on to the next alias. Non-string
/// scalars pass through unchanged.
pub fn pick_field(row: &RawRecord, field: CanonicalField) -> Option<Value> {
    for key in field.aliases() {
        let Some(candidate) = row.get(*key) else {
            continue;
        };

        match candidate {
            Value::Null => continue,
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    continue;
                }
                return Some(Value::String(trimmed.to_string()));
            }
            other => return Some(other.clone()),
        }
    }

    None
}

/// Project an arbitrary input record onto the six canonical slots.
/// Absence is not an error here; the validator resolves it downstream.
pub fn project_row(row: &RawRecord) -> ProjectedRecord {
    ProjectedRecord {
        ts: pick_field(row, CanonicalField::Ts),
        name: pick_field(row, CanonicalField::Name),
        qty: pick_field(row, CanonicalField::Qty),
        pricemode: pick_field(row, CanonicalField::Pricemode)
            .unwrap_or_else(|| Value::String("UNKNOWN".to_string())),
        linetotal: pick_field(row, CanonicalField::Linetotal),
        status: pick_field(row, CanonicalField::Status),
    }
}
