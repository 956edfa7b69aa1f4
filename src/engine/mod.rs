pub mod aggregate;
pub mod core;
pub mod ingest;
pub mod normalize;
pub mod schema;
