//! Extraction parameters.
//!
//! All tolerances are resolution-dependent pixel distances; they are
//! threaded explicitly through the pipeline so the same code can be tuned
//! per OCR-resolution profile.

/// Default horizontal alignment tolerance in pixels.
pub const DEFAULT_PIXEL_MARGIN: f64 = 20.0;

/// Default gap subtracted when deriving a row end from the next row start.
pub const DEFAULT_ROW_MARGIN: f64 = 10.0;

/// Default vertical-center gap threshold for subrow splitting.
pub const DEFAULT_SUBROW_MARGIN: f64 = 5.0;

/// Column-header label printed once per roster row.
pub const DEFAULT_ANCHOR_TEXT: &str = "POWER";

/// Strategy for splitting a row's fragments into field groups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStrategy {
    /// Cluster fragments into stacked lines by vertical-center gaps and map
    /// the top three lines to name, rank, and power. More robust to
    /// variable column widths; the default.
    #[default]
    VerticalSubrows,

    /// Bisect the row at the horizontal midpoint: the left half holds the
    /// name and rank lines, the right half the power value. Useful when a
    /// row's lines are not vertically separated enough to cluster.
    HorizontalSplit,
}

/// Parameters for roster extraction.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractParams {
    /// Text of the per-row column-header label used to anchor row starts.
    pub anchor_text: String,

    /// Horizontal alignment tolerance: how far a fragment's edge may sit
    /// from a shared alignment edge and still count as aligned.
    pub pixel_margin: f64,

    /// Vertical gap subtracted from the next row's start when deriving a
    /// row's end coordinate.
    pub row_margin: f64,

    /// Maximum vertical-center gap between fragments on the same line;
    /// larger gaps start a new subrow cluster.
    pub subrow_margin: f64,

    /// How fields are split within a row. Applies to every row of the
    /// screenshot; strategies are never mixed per row.
    pub field_strategy: FieldStrategy,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            anchor_text: DEFAULT_ANCHOR_TEXT.to_string(),
            pixel_margin: DEFAULT_PIXEL_MARGIN,
            row_margin: DEFAULT_ROW_MARGIN,
            subrow_margin: DEFAULT_SUBROW_MARGIN,
            field_strategy: FieldStrategy::default(),
        }
    }
}
