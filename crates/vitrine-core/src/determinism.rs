//! Explicit ordering and deduplication helpers.
//!
//! The listing core promises byte-identical output for identical input, so
//! every ordering rule is spelled out here instead of relying on HashMap
//! iteration or ad-hoc sorts scattered through the codebase.

use crate::errors::{VitrineError, VitrineResult};

/// Keep the first occurrence of each key, preserving input order.
///
/// Used for facet aggregation rows (a value id repeated under the same facet
/// is upstream data inconsistency, and summing counts silently would mask it)
/// and anywhere else first-seen order is the contract.
///
/// Returns the retained items and the dropped duplicates so callers can
/// report them.
pub fn dedup_first_seen<T, K, F>(items: Vec<T>, mut key_fn: F) -> (Vec<T>, Vec<T>)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    use std::collections::BTreeSet;

    let mut seen: BTreeSet<K> = BTreeSet::new();
    let mut kept = Vec::with_capacity(items.len());
    let mut dropped = Vec::new();

    for item in items {
        if seen.insert(key_fn(&item)) {
            kept.push(item);
        } else {
            dropped.push(item);
        }
    }

    (kept, dropped)
}

/// Ensure a slice is sorted by the given key.
///
/// Returns an error if any adjacent pair is out of order. Used by the model
/// validation helpers to check that facet values arrive in their canonical
/// `(count desc, name asc)` order.
pub fn ensure_sorted<T, K, F>(items: &[T], mut key_fn: F) -> VitrineResult<()>
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    for w in items.windows(2) {
        if key_fn(&w[0]) > key_fn(&w[1]) {
            return Err(VitrineError::invariant(
                "collection is not sorted deterministically",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence() {
        let items = vec![("a", 1), ("b", 2), ("a", 3)];
        let (kept, dropped) = dedup_first_seen(items, |(k, _)| *k);
        assert_eq!(kept, vec![("a", 1), ("b", 2)]);
        assert_eq!(dropped, vec![("a", 3)]);
    }

    #[test]
    fn dedup_preserves_order() {
        let items = vec![3, 1, 2, 1, 3];
        let (kept, dropped) = dedup_first_seen(items, |x| *x);
        assert_eq!(kept, vec![3, 1, 2]);
        assert_eq!(dropped, vec![1, 3]);
    }

    #[test]
    fn ensure_sorted_accepts_sorted() {
        ensure_sorted(&[1, 2, 2, 3], |x| *x).unwrap();
    }

    #[test]
    fn ensure_sorted_detects_unsorted() {
        let err = ensure_sorted(&[1, 3, 2], |x| *x).unwrap_err();
        assert!(err.to_string().contains("not sorted"));
    }
}
