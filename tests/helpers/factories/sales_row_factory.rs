use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use crate::engine::core::{OrderStatus, SalesRow};

/// Builds canonical sales rows with the signed-metric invariant already
/// applied, mirroring what the normalizer would produce.
pub struct SalesRowFactory {
    params: HashMap<String, Value>,
}

impl SalesRowFactory {
    pub fn new() -> Self {
        let mut params = HashMap::new();
        params.insert("ts".into(), json!("2024-01-01T09:15:00Z"));
        params.insert("name".into(), json!("Burger"));
        params.insert("qty".into(), json!(2.0));
        params.insert("pricemode".into(), json!("dine-in"));
        params.insert("linetotal".into(), json!(1200.0));
        params.insert("status".into(), json!("OK"));
        Self { params }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn create(self) -> SalesRow {
        let ts: DateTime<Utc> = self.params["ts"]
            .as_str()
            .unwrap()
            .parse()
            .expect("factory ts must be RFC3339");
        let status = match self.params["status"].as_str().unwrap() {
            "CANCELLED" => OrderStatus::Cancelled,
            _ => OrderStatus::Ok,
        };
        let qty = self.params["qty"].as_f64().unwrap().abs();
        let linetotal = self.params["linetotal"].as_f64().unwrap().abs();
        let sign = status.sign();

        SalesRow {
            ts,
            name: self.params["name"].as_str().unwrap().to_string(),
            qty,
            pricemode: self.params["pricemode"].as_str().unwrap().to_string(),
            linetotal,
            status,
            signed_total: sign * linetotal,
            signed_qty: sign * qty,
        }
    }

    pub fn create_list(self, count: usize) -> Vec<SalesRow> {
        let row = self.create();
        (0..count).map(|_| row.clone()).collect()
    }
}
