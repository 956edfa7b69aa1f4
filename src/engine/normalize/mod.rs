pub mod row;

pub use row::normalize_row;
