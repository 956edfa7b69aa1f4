pub use super::factories::{RawRecordFactory, SalesRowFactory};

pub struct Factory;

impl Factory {
    pub fn raw_record() -> RawRecordFactory {
        RawRecordFactory::new()
    }

    pub fn sales_row() -> SalesRowFactory {
        SalesRowFactory::new()
    }
}
