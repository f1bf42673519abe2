//! Row segmentation, assignment, and alignment filtering.
//!
//! The roster prints one column-header label per row, right-aligned within
//! a narrow x-range. Those anchor fragments carry the only reliable row
//! structure in the OCR output: their top edges are the row starts, and
//! everything else is bucketed by where its own top edge falls.

use ordered_float::OrderedFloat;

use crate::annotation::Fragment;
use crate::error::{Result, RosterError};
use crate::layout::params::ExtractParams;

/// A contiguous vertical band believed to hold one player's data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowBand {
    pub y_start: f64,
    pub y_end: f64,
}

impl RowBand {
    /// Whether a fragment whose top edge is `top` belongs to this band.
    ///
    /// Lower-exclusive, upper-inclusive: a fragment sitting exactly on a
    /// row start attaches to the band above it, which keeps the anchor
    /// token itself out of the row it opens.
    pub fn contains_top(&self, top: f64) -> bool {
        self.y_start < top && top <= self.y_end
    }
}

/// Derives the row bands from the anchor fragments.
///
/// Anchors are fragments whose text equals the configured header label.
/// Stray matches are discarded unless their right edge sits within
/// `pixel_margin` of the rightmost anchor edge. The surviving anchors' top
/// edges, sorted ascending, are the row starts; each row ends `row_margin`
/// above the next row's start. The final row has no successor, so its
/// height is the largest height observed among the other rows; a
/// single-row screenshot observes no height at all and instead extends to
/// the bottom of the content.
pub fn segment_rows(fragments: &[Fragment], params: &ExtractParams) -> Result<Vec<RowBand>> {
    let anchors: Vec<_> = fragments
        .iter()
        .filter(|f| f.text() == params.anchor_text)
        .map(|f| f.bounds())
        .collect();
    if anchors.is_empty() {
        return Err(RosterError::NoAnchorFound(params.anchor_text.clone()));
    }

    let max_x = anchors
        .iter()
        .map(|b| b.x_max)
        .fold(f64::NEG_INFINITY, f64::max);
    let mut row_starts: Vec<f64> = anchors
        .iter()
        .filter(|b| b.x_max >= max_x - params.pixel_margin)
        .map(|b| b.y_min)
        .collect();
    row_starts.sort_by_key(|&y| OrderedFloat(y));

    let mut max_height = 0.0_f64;
    let mut bands = Vec::with_capacity(row_starts.len());
    for (idx, &start) in row_starts.iter().enumerate() {
        let end = match row_starts.get(idx + 1) {
            Some(&next) => {
                let end = next - params.row_margin;
                max_height = max_height.max(end - start);
                end
            }
            None if max_height > 0.0 => start + max_height,
            // Single row: no sibling to measure, so span to the content's
            // bottom edge instead of degenerating to a zero-height band.
            None => fragments
                .iter()
                .map(|f| f.bounds().y_max)
                .fold(start, f64::max),
        };
        bands.push(RowBand {
            y_start: start,
            y_end: end,
        });
    }
    Ok(bands)
}

/// Buckets every fragment into at most one row band by its top edge.
///
/// Fragments matching no band are page furniture (titles, icons, the
/// anchor labels themselves) and are dropped. Original fragment order is
/// preserved within each row.
pub fn assign_rows<'a>(fragments: &'a [Fragment], bands: &[RowBand]) -> Vec<Vec<&'a Fragment>> {
    let mut rows: Vec<Vec<&Fragment>> = vec![Vec::new(); bands.len()];
    for fragment in fragments {
        let top = fragment.bounds().y_min;
        if let Some(idx) = bands.iter().position(|band| band.contains_top(top)) {
            rows[idx].push(fragment);
        }
    }
    rows
}

/// The left alignment edge shared by every row: the largest of the per-row
/// minimum `x_min` values. Rows with no fragments are skipped; `None` when
/// no row has any.
pub fn shared_left_edge(rows: &[Vec<&Fragment>]) -> Option<f64> {
    rows.iter()
        .filter_map(|row| row.iter().map(|f| OrderedFloat(f.bounds().x_min)).min())
        .max()
        .map(OrderedFloat::into_inner)
}

/// Drops, from every row, fragments whose left edge falls more than
/// `pixel_margin` left of the shared alignment edge. Partial or garbled
/// leading artifacts appear in some rows but not others; real row data
/// reaches the shared edge in all of them.
pub fn filter_misaligned<'a>(
    rows: Vec<Vec<&'a Fragment>>,
    left_edge: f64,
    pixel_margin: f64,
) -> Vec<Vec<&'a Fragment>> {
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .filter(|f| f.bounds().x_min >= left_edge - pixel_margin)
                .collect()
        })
        .collect()
}
