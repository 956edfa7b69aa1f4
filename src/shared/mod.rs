pub mod config;
pub mod datetime;
