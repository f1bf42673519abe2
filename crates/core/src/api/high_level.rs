//! High-level extraction API.
//!
//! [`extract_records`] is the pipeline driver: anchor-based row
//! segmentation, row assignment, alignment filtering, then per-row field
//! extraction, returning records in top-to-bottom row order.

use ordered_float::OrderedFloat;
use tracing::debug;

use crate::annotation::{self, Fragment};
use crate::error::{Result, RosterError};
use crate::layout::fields;
use crate::layout::params::{ExtractParams, FieldStrategy};
use crate::layout::rows;
use crate::record::Record;

/// Reconstructs the ordered roster records from one screenshot's fragments.
///
/// Pure and deterministic: no I/O, no internal retries. The first stage or
/// row to fail aborts the whole batch, and the error is surfaced to the
/// caller with no partial result.
pub fn extract_records(fragments: &[Fragment], params: &ExtractParams) -> Result<Vec<Record>> {
    let bands = rows::segment_rows(fragments, params)?;
    debug!(rows = bands.len(), fragments = fragments.len(), "segmented roster rows");

    let mut grouped = rows::assign_rows(fragments, &bands);
    let assigned: usize = grouped.iter().map(Vec::len).sum();
    debug!(assigned, dropped = fragments.len() - assigned, "assigned fragments to rows");

    // The shared left edge is measured before filtering; the horizontal
    // split divider reuses it together with the post-filter right extent.
    let left_edge = rows::shared_left_edge(&grouped);
    if let Some(edge) = left_edge {
        grouped = rows::filter_misaligned(grouped, edge, params.pixel_margin);
    }

    let records = match params.field_strategy {
        FieldStrategy::VerticalSubrows => grouped
            .iter()
            .enumerate()
            .map(|(idx, row)| fields::split_subrows(idx, row, params))
            .collect::<Result<Vec<_>>>()?,
        FieldStrategy::HorizontalSplit => {
            let right_edge = grouped
                .iter()
                .flatten()
                .map(|f| OrderedFloat(f.bounds().x_max))
                .max()
                .map(OrderedFloat::into_inner);
            let (Some(left), Some(right)) = (left_edge, right_edge) else {
                return Err(RosterError::EmptyGroup { row: 0, field: "power" });
            };
            grouped
                .iter()
                .enumerate()
                .map(|(idx, row)| fields::split_horizontal(idx, row, left, right))
                .collect::<Result<Vec<_>>>()?
        }
    };
    debug!(records = records.len(), "extracted roster records");
    Ok(records)
}

/// Parses a JSON annotation dump in either collaborator shape and extracts
/// the roster records from it.
pub fn extract_records_json(data: &str, params: &ExtractParams) -> Result<Vec<Record>> {
    let fragments = annotation::fragments_from_json(data)?;
    extract_records(&fragments, params)
}
