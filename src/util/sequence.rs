//! Small comparisons over label sequences.

use std::fmt::Debug;

use tracing::debug;

/// Number of positions where `a` and `b` differ.
///
/// Positions present in only one of the slices count as mismatches.
pub fn hamming_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let unmatched = a.len().abs_diff(b.len());
    unmatched + a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Index of the largest element, the first one on ties, 0 when empty.
pub fn arg_max<T: PartialOrd>(values: &[T]) -> usize {
    let mut best = 0;
    for (i, value) in values.iter().enumerate().skip(1) {
        if *value > values[best] {
            best = i;
        }
    }
    best
}

/// Emits one debug event per element of `values`.
pub fn trace_sequence<T: Debug>(label: &str, values: &[T]) {
    for (index, value) in values.iter().enumerate() {
        debug!(label, index, value = ?value, "sequence element");
    }
}
