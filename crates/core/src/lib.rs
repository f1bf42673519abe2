//! muster - roster table reconstruction from OCR text annotations.
//!
//! OCR engines return an unordered bag of text fragments with bounding
//! boxes but no row or column structure. This crate rebuilds the logical
//! table behind a roster screenshot: fragments are partitioned into rows
//! anchored on the repeating column-header label, filtered against the
//! shared left alignment edge, and clustered into the name, rank, and
//! power fields of each player record.

pub mod annotation;
pub mod api;
pub mod error;
pub mod layout;
pub mod record;
pub mod utils;

pub use api::high_level;

pub use annotation::Fragment;
pub use api::high_level::{extract_records, extract_records_json};
pub use error::{Result, RosterError};
pub use layout::params::{ExtractParams, FieldStrategy};
pub use record::Record;
pub use utils::Bounds;
