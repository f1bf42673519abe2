//! Tests for field-group extraction within a single row.

use muster_core::annotation::Fragment;
use muster_core::layout::fields::{split_horizontal, split_subrows};
use muster_core::utils::Bounds;
use muster_core::{ExtractParams, Record, RosterError};

fn frag(text: &str, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Fragment {
    Fragment::new(text, Bounds::new(x_min, x_max, y_min, y_max))
}

/// One row's fragments: name line, rank line, power line stacked
/// top-to-bottom with the power value under the right-hand header column.
fn row() -> Vec<Fragment> {
    vec![
        frag("Jane", 50.0, 90.0, 112.0, 122.0),
        frag("Doe", 95.0, 130.0, 112.0, 122.0),
        frag("Lv42", 50.0, 80.0, 130.0, 140.0),
        frag("CPT", 85.0, 110.0, 130.0, 140.0),
        frag("1,234", 300.0, 360.0, 148.0, 158.0),
    ]
}

fn refs(fragments: &[Fragment]) -> Vec<&Fragment> {
    fragments.iter().collect()
}

#[test]
fn test_split_subrows_basic() {
    let fragments = row();
    let record = split_subrows(0, &refs(&fragments), &ExtractParams::default()).unwrap();
    assert_eq!(record, Record::new("Jane Doe", "CPT", "1234"));
}

#[test]
fn test_split_subrows_restores_reading_order() {
    let mut fragments = row();
    fragments.reverse();
    let record = split_subrows(0, &refs(&fragments), &ExtractParams::default()).unwrap();
    assert_eq!(record.name, "Jane Doe");
    assert_eq!(record.rank, "CPT");
}

#[test]
fn test_split_subrows_power_split_into_tokens() {
    let mut fragments = row();
    fragments.pop();
    fragments.push(frag("1", 300.0, 310.0, 148.0, 158.0));
    fragments.push(frag(",", 312.0, 316.0, 148.0, 158.0));
    fragments.push(frag("234", 318.0, 340.0, 148.0, 158.0));
    let record = split_subrows(0, &refs(&fragments), &ExtractParams::default()).unwrap();
    assert_eq!(record.power, "1234");
}

#[test]
fn test_split_subrows_extra_lines_ignored() {
    let mut fragments = row();
    fragments.push(frag("footer", 50.0, 120.0, 166.0, 176.0));
    let record = split_subrows(0, &refs(&fragments), &ExtractParams::default()).unwrap();
    assert_eq!(record, Record::new("Jane Doe", "CPT", "1234"));
}

#[test]
fn test_two_lines_is_insufficient() {
    let fragments = vec![
        frag("Jane", 50.0, 90.0, 112.0, 122.0),
        frag("Lv42", 50.0, 80.0, 130.0, 140.0),
        frag("CPT", 85.0, 110.0, 130.0, 140.0),
    ];
    let err = split_subrows(3, &refs(&fragments), &ExtractParams::default()).unwrap_err();
    assert!(matches!(
        err,
        RosterError::InsufficientSubrows { row: 3, found: 2 }
    ));
}

#[test]
fn test_empty_row_is_insufficient() {
    let err = split_subrows(0, &[], &ExtractParams::default()).unwrap_err();
    assert!(matches!(
        err,
        RosterError::InsufficientSubrows { row: 0, found: 0 }
    ));
}

#[test]
fn test_rank_line_with_one_token_is_malformed() {
    let fragments = vec![
        frag("Jane", 50.0, 90.0, 112.0, 122.0),
        frag("CPT", 85.0, 110.0, 130.0, 140.0),
        frag("1,234", 300.0, 360.0, 148.0, 158.0),
    ];
    let err = split_subrows(0, &refs(&fragments), &ExtractParams::default()).unwrap_err();
    assert!(matches!(
        err,
        RosterError::MalformedRankLine { row: 0, found: 1 }
    ));
}

#[test]
fn test_rank_line_with_three_tokens_is_malformed() {
    // A rank abbreviation the OCR split across two fragments is a known
    // gap; refuse it rather than guess which token is the rank.
    let fragments = vec![
        frag("Jane", 50.0, 90.0, 112.0, 122.0),
        frag("Lv42", 50.0, 80.0, 130.0, 140.0),
        frag("CP", 85.0, 100.0, 130.0, 140.0),
        frag("T", 102.0, 110.0, 130.0, 140.0),
        frag("1,234", 300.0, 360.0, 148.0, 158.0),
    ];
    let err = split_subrows(0, &refs(&fragments), &ExtractParams::default()).unwrap_err();
    assert!(matches!(
        err,
        RosterError::MalformedRankLine { row: 0, found: 3 }
    ));
}

#[test]
fn test_split_horizontal_basic() {
    let fragments = row();
    let record = split_horizontal(0, &refs(&fragments), 50.0, 360.0).unwrap();
    assert_eq!(record, Record::new("Jane Doe", "CPT", "1234"));
}

#[test]
fn test_split_horizontal_merges_comma_run() {
    let mut fragments = row();
    fragments.pop();
    fragments.push(frag("1", 300.0, 310.0, 148.0, 158.0));
    fragments.push(frag(",", 312.0, 316.0, 148.0, 158.0));
    fragments.push(frag("234", 318.0, 340.0, 148.0, 158.0));
    let record = split_horizontal(0, &refs(&fragments), 50.0, 340.0).unwrap();
    assert_eq!(record.power, "1234");
}

#[test]
fn test_split_horizontal_unmergeable_right_side() {
    let mut fragments = row();
    fragments.pop();
    fragments.push(frag("1", 300.0, 310.0, 148.0, 158.0));
    fragments.push(frag("234", 318.0, 340.0, 148.0, 158.0));
    let err = split_horizontal(0, &refs(&fragments), 50.0, 340.0).unwrap_err();
    assert!(matches!(
        err,
        RosterError::MalformedPowerLine { row: 0, found: 2 }
    ));
}

#[test]
fn test_split_horizontal_empty_right_side() {
    let fragments = vec![
        frag("Jane", 50.0, 90.0, 112.0, 122.0),
        frag("Lv42", 50.0, 80.0, 130.0, 140.0),
    ];
    let err = split_horizontal(0, &refs(&fragments), 50.0, 90.0).unwrap_err();
    assert!(matches!(err, RosterError::EmptyGroup { field: "power", .. }));
}

#[test]
fn test_split_horizontal_drops_left_fragments_below_power() {
    let mut fragments = row();
    fragments.push(frag("footer", 50.0, 120.0, 160.0, 170.0));
    let record = split_horizontal(0, &refs(&fragments), 50.0, 360.0).unwrap();
    assert_eq!(record, Record::new("Jane Doe", "CPT", "1234"));
}
