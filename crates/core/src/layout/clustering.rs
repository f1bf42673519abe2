//! Gap-based clustering over scalar keys.
//!
//! The subrow splitter reduces each fragment to a scalar key (its vertical
//! center), sorts the keys, and opens a new cluster wherever the gap
//! between consecutive keys exceeds a tolerance. Clusters are represented
//! as half-open `[start, end)` spans so that membership is a pure function
//! of the key, which keeps fragment assignment a simple index lookup.

use ordered_float::OrderedFloat;

/// Clusters objects by a scalar key.
///
/// Keys are sorted ascending; a new cluster starts whenever the gap between
/// consecutive keys exceeds `tolerance`. Each returned span is half-open
/// `[start, end)`, where `end` is the first key of the following cluster;
/// the final cluster is unbounded above.
pub fn cluster_spans<T, F>(xs: &[T], key_fn: F, tolerance: f64) -> Vec<(f64, f64)>
where
    F: Fn(&T) -> f64,
{
    let mut keys: Vec<f64> = xs.iter().map(&key_fn).collect();
    keys.sort_by_key(|&k| OrderedFloat(k));

    let mut spans = Vec::new();
    let Some((&first, rest)) = keys.split_first() else {
        return spans;
    };

    let mut start = first;
    let mut last = first;
    for &key in rest {
        if key - last > tolerance {
            spans.push((start, key));
            start = key;
        }
        last = key;
    }
    spans.push((start, f64::INFINITY));
    spans
}

/// Index of the span containing `key`, testing `start <= key < end`.
pub fn span_index(spans: &[(f64, f64)], key: f64) -> Option<usize> {
    spans
        .iter()
        .position(|&(start, end)| start <= key && key < end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cluster() {
        let xs = [1.0, 2.0, 3.0];
        let spans = cluster_spans(&xs, |&x| x, 5.0);
        assert_eq!(spans, vec![(1.0, f64::INFINITY)]);
    }

    #[test]
    fn test_splits_on_gap() {
        let xs = [117.0, 135.0, 153.0];
        let spans = cluster_spans(&xs, |&x| x, 5.0);
        assert_eq!(spans, vec![(117.0, 135.0), (135.0, 153.0), (153.0, f64::INFINITY)]);
    }

    #[test]
    fn test_gap_equal_to_tolerance_stays_joined() {
        let xs = [10.0, 15.0, 40.0];
        let spans = cluster_spans(&xs, |&x| x, 5.0);
        assert_eq!(spans, vec![(10.0, 40.0), (40.0, f64::INFINITY)]);
    }

    #[test]
    fn test_unsorted_input() {
        let xs = [153.0, 117.0, 135.0];
        let spans = cluster_spans(&xs, |&x| x, 5.0);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0], (117.0, 135.0));
    }

    #[test]
    fn test_empty_input() {
        let xs: [f64; 0] = [];
        assert!(cluster_spans(&xs, |&x| x, 5.0).is_empty());
    }

    #[test]
    fn test_span_index_half_open() {
        let spans = vec![(117.0, 135.0), (135.0, 153.0), (153.0, f64::INFINITY)];
        assert_eq!(span_index(&spans, 117.0), Some(0));
        // A key sitting exactly on a boundary belongs to the later span.
        assert_eq!(span_index(&spans, 135.0), Some(1));
        assert_eq!(span_index(&spans, 152.9), Some(1));
        assert_eq!(span_index(&spans, 9000.0), Some(2));
        assert_eq!(span_index(&spans, 100.0), None);
    }
}
