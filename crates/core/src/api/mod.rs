//! Public extraction API.

pub mod high_level;

pub use high_level::{extract_records, extract_records_json};
