pub mod bucket;
pub mod fold;
pub mod summary;

pub use bucket::{AggregateBucket, AggregatedSales, CancelledStats};
pub use fold::aggregate;
pub use summary::{SNAPSHOT_TOP_LIMIT, SummaryEntry, SummarySnapshot, top_entries};
