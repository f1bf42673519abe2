//! Output records.

use serde::Serialize;

/// One reconstructed roster entry, in screenshot order.
///
/// `power` stays a string: it is a digit sequence recovered from garbled
/// OCR output, and the caller decides whether to parse it further.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Player name; multi-token names are joined with single spaces.
    pub name: String,
    /// Rank abbreviation.
    pub rank: String,
    /// Power score as a bare digit string.
    pub power: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        rank: impl Into<String>,
        power: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rank: rank.into(),
            power: power.into(),
        }
    }
}
