use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hard ceiling on accepted rows per batch. Shared by the batch guard and the
/// aggregation engine's own size check; never duplicate the literal.
pub const MAX_ROWS: usize = 1000;

/// Order lifecycle dichotomy. Everything that is not cancelled is OK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Ok,
    Cancelled,
}

impl OrderStatus {
    /// Map a raw status token onto the enum.
    /// - Case-insensitive, surrounding whitespace ignored
    /// - `CANCELLED` stays cancelled
    /// - Common "completed" synonyms collapse to `Ok`
    /// - Anything else is unrecognized (fail closed)
    pub fn from_token(raw: &str) -> Option<Self> {
        let upper = raw.trim().to_ascii_uppercase();
        match upper.as_str() {
            "CANCELLED" => Some(OrderStatus::Cancelled),
            "OK" | "READY" | "DONE" | "COMPLETED" | "SUCCESS" | "FULFILLED" => {
                Some(OrderStatus::Ok)
            }
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }

    /// Sign applied to the stored magnitudes when deriving signed metrics.
    pub fn sign(&self) -> f64 {
        if self.is_cancelled() { -1.0 } else { 1.0 }
    }
}

/// One fully normalized sales line. Immutable once built.
///
/// `qty` and `linetotal` always hold the absolute magnitude; the cancellation
/// sign lives exclusively in `signed_qty` / `signed_total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRow {
    pub ts: DateTime<Utc>,
    pub name: String,
    pub qty: f64,
    pub pricemode: String,
    pub linetotal: f64,
    pub status: OrderStatus,
    pub signed_total: f64,
    pub signed_qty: f64,
}

/// Diagnostic record for one rejected input row.
/// `index` is 1-based and refers to the original data-line position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseIssue {
    pub index: usize,
    pub message: String,
}

/// Boundary counts reported to the caller for every batch, including batches
/// rejected by the row cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}
