pub mod hour_bucket;
pub mod time;

pub use hour_bucket::{HourBucketConfig, HourBucketer};
pub use time::TimeParser;
