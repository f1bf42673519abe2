//! Geometric reconstruction of the roster table.
//!
//! Three stages, all pure: anchor-based row segmentation ([`rows`]),
//! alignment filtering ([`rows`]), and per-row field-group extraction
//! ([`fields`]). Tunable pixel tolerances live in [`params`].

pub mod clustering;
pub mod fields;
pub mod params;
pub mod rows;

pub use params::{ExtractParams, FieldStrategy};
pub use rows::RowBand;
