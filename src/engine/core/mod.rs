pub mod row;

pub use row::{MAX_ROWS, OrderStatus, ParseIssue, ParseStats, SalesRow};
