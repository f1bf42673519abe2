//! Field-group extraction within a row.
//!
//! A roster row stacks three lines top-to-bottom: the player name, a
//! rank-and-level line, and the power value. The canonical splitter
//! clusters fragments into those lines by vertical-center gaps; the
//! alternate splitter bisects the row horizontally and reads the power
//! value off the right half.

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::annotation::Fragment;
use crate::error::{Result, RosterError};
use crate::layout::clustering::{cluster_spans, span_index};
use crate::layout::params::ExtractParams;
use crate::record::Record;

/// Lines mapped to record fields: name, rank-and-level, power.
/// Subrows past the power line are noise and ignored.
const SUBROW_FIELDS: usize = 3;

/// Splits a row into stacked subrow clusters and maps them to fields.
///
/// Subrow 0 joins into the name; subrow 1 must hold exactly two tokens
/// (level then rank abbreviation, left to right) of which the rank is
/// kept; subrow 2 joins into the power string, which is then normalized.
pub fn split_subrows(row: usize, fragments: &[&Fragment], params: &ExtractParams) -> Result<Record> {
    let spans = cluster_spans(fragments, |f| f.bounds().y_center(), params.subrow_margin);
    if spans.len() < SUBROW_FIELDS {
        return Err(RosterError::InsufficientSubrows {
            row,
            found: spans.len(),
        });
    }

    let mut subrows: [Vec<&Fragment>; SUBROW_FIELDS] = Default::default();
    for &fragment in fragments {
        match span_index(&spans, fragment.bounds().y_center()) {
            Some(idx) if idx < SUBROW_FIELDS => subrows[idx].push(fragment),
            _ => {}
        }
    }
    for subrow in &mut subrows {
        sort_reading_order(subrow);
    }

    let [name_line, rank_line, power_line] = subrows;
    build_record(row, &name_line, &rank_line, &join_texts(&power_line))
}

/// Splits a row at the horizontal midpoint of the observed x extent.
///
/// The right half must collapse to a single power fragment; a
/// thousands-separated value the OCR split into `token "," token` is
/// merged first. Left fragments at or below the power value are dropped,
/// and the rest split into the name and rank lines at the midpoint of
/// their vertical centers.
pub fn split_horizontal(
    row: usize,
    fragments: &[&Fragment],
    left_edge: f64,
    right_edge: f64,
) -> Result<Record> {
    let divider = (left_edge + right_edge) / 2.0;
    let (left, right): (Vec<&Fragment>, Vec<&Fragment>) = fragments
        .iter()
        .copied()
        .partition(|f| f.bounds().x_min < divider);

    let right = merge_power_run(right);
    let power_fragment = match right.as_slice() {
        [] => return Err(RosterError::EmptyGroup { row, field: "power" }),
        [single] => single.clone(),
        more => {
            return Err(RosterError::MalformedPowerLine {
                row,
                found: more.len(),
            });
        }
    };

    let power_center = power_fragment.bounds().y_center();
    let upper: Vec<&Fragment> = left
        .into_iter()
        .filter(|f| f.bounds().y_center() < power_center)
        .collect();
    if upper.is_empty() {
        return Err(RosterError::EmptyGroup { row, field: "name" });
    }

    let centers: Vec<f64> = upper
        .iter()
        .map(|f| OrderedFloat(f.bounds().y_center()))
        .sorted()
        .map(OrderedFloat::into_inner)
        .collect();
    let middle_y = (centers[0] + centers[centers.len() - 1]) / 2.0;
    let (mut name_line, mut rank_line): (Vec<&Fragment>, Vec<&Fragment>) = upper
        .into_iter()
        .partition(|f| f.bounds().y_center() < middle_y);
    sort_reading_order(&mut name_line);
    sort_reading_order(&mut rank_line);

    build_record(row, &name_line, &rank_line, power_fragment.text())
}

/// Assembles and validates the record for one row. Every field must be
/// non-empty; a missing field is an error, never a blank column.
fn build_record(
    row: usize,
    name_line: &[&Fragment],
    rank_line: &[&Fragment],
    raw_power: &str,
) -> Result<Record> {
    let name = join_texts(name_line);
    if name.is_empty() {
        return Err(RosterError::EmptyGroup { row, field: "name" });
    }

    // The rank abbreviation is always the second token; the first is the
    // level number and is dropped. Any other token count means the line
    // geometry assumption failed for this row.
    if rank_line.len() != 2 {
        return Err(RosterError::MalformedRankLine {
            row,
            found: rank_line.len(),
        });
    }
    let rank = rank_line[1].text().to_string();
    if rank.is_empty() {
        return Err(RosterError::EmptyGroup { row, field: "rank" });
    }

    let power = normalize_power(raw_power);
    if power.is_empty() {
        return Err(RosterError::EmptyGroup { row, field: "power" });
    }

    Ok(Record { name, rank, power })
}

/// Restores left-to-right reading order within a field group.
fn sort_reading_order(fragments: &mut [&Fragment]) {
    fragments.sort_by(|a, b| a.bounds().x_min.total_cmp(&b.bounds().x_min));
}

fn join_texts(fragments: &[&Fragment]) -> String {
    fragments.iter().map(|f| f.text()).join(" ")
}

/// Collapses a `token "," token` run into a single fragment with the union
/// of the three bounds. OCR splits thousands-separated values this way.
fn merge_power_run(right: Vec<&Fragment>) -> Vec<Fragment> {
    if let [a, sep, b] = right.as_slice()
        && sep.text() == ","
    {
        let text: String = [a, sep, b].iter().map(|f| f.text()).collect();
        let bounds = a.bounds().union(&sep.bounds()).union(&b.bounds());
        return vec![Fragment::new(text, bounds)];
    }
    right.into_iter().cloned().collect()
}

/// Normalizes an OCR-garbled power string to a bare digit string.
///
/// `Z` is a common misread of `7` in the roster font and is substituted
/// first; `.` and `,` are thousands separators the OCR recognizes
/// inconsistently and are stripped along with joining whitespace. No other
/// character is touched.
pub fn normalize_power(raw: &str) -> String {
    raw.chars()
        .map(|c| if c == 'Z' { '7' } else { c })
        .filter(|&c| c != '.' && c != ',' && !c.is_whitespace())
        .collect()
}
