use crate::engine::schema::RawRecord;
use serde_json::{Value, json};

/// Builds raw input records the way the CSV reader would deliver them:
/// string-keyed, string-valued, header names open to aliasing.
pub struct RawRecordFactory {
    record: RawRecord,
}

impl RawRecordFactory {
    pub fn new() -> Self {
        let mut record = RawRecord::new();
        record.insert("ts".into(), json!("2024-01-01T09:15:00Z"));
        record.insert("name".into(), json!("Burger"));
        record.insert("qty".into(), json!("2"));
        record.insert("pricemode".into(), json!("dine-in"));
        record.insert("linetotal".into(), json!("1,200"));
        record.insert("status".into(), json!("OK"));
        Self { record }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.record.insert(key.to_string(), value.into());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.record.remove(key);
        self
    }

    pub fn create(self) -> RawRecord {
        self.record
    }

    pub fn create_list(self, count: usize) -> Vec<RawRecord> {
        (0..count).map(|_| self.record.clone()).collect()
    }
}
