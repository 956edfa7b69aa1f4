pub mod raw_record_factory;
pub mod sales_row_factory;

pub use raw_record_factory::RawRecordFactory;
pub use sales_row_factory::SalesRowFactory;
