pub mod fields;
pub mod types;
pub mod validate;

pub use fields::{CanonicalField, ProjectedRecord, RawRecord, pick_field, project_row};
pub use types::{TsValue, ValidatedRecord};
pub use validate::validate;
