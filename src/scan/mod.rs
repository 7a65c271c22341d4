//! Full Scan Engine - the O(N) baseline the index is measured against.
//!
//! A full scan walks every record in insertion order until it finds a match
//! or exhausts the store. It deliberately uses no auxiliary structure:
//! its cost is the honest price of searching unindexed data, which is the
//! whole point of the comparison.

use crate::common::RowId;
use crate::store::RecordStore;

/// Linear search over a [`RecordStore`] by predicate on the email column.
///
/// Stateless; both methods take the store by reference and touch nothing
/// else. Cost is proportional to the number of records examined before the
/// match (the whole store if the target is absent).
pub struct FullScanEngine;

impl FullScanEngine {
    /// Find the first record whose email equals `target`.
    ///
    /// Returns `None` if no record matches - absence is a normal outcome,
    /// not an error.
    pub fn find_by_email(store: &RecordStore, target: &str) -> Option<RowId> {
        store
            .scan()
            .find(|(_, record)| record.email == target)
            .map(|(row_id, _)| row_id)
    }

    /// Same walk as [`find_by_email`](Self::find_by_email), also reporting
    /// how many records were examined.
    ///
    /// Used by tests that assert the cost *shape* (examined count grows
    /// linearly with the match position) without depending on wall-clock
    /// timing.
    pub fn count_examined(store: &RecordStore, target: &str) -> (Option<RowId>, usize) {
        let mut examined = 0;
        for (row_id, record) in store.scan() {
            examined += 1;
            if record.email == target {
                return (Some(row_id), examined);
            }
        }
        (None, examined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store(count: usize) -> RecordStore {
        let mut store = RecordStore::new();
        for i in 1..=count {
            store.append(format!("user{}", i), format!("user{}@example.com", i));
        }
        store
    }

    #[test]
    fn test_find_present() {
        let store = sample_store(10);

        let row = FullScanEngine::find_by_email(&store, "user7@example.com").unwrap();
        assert_eq!(store.get(row).unwrap().id, 7);
    }

    #[test]
    fn test_find_absent() {
        let store = sample_store(10);

        assert_eq!(
            FullScanEngine::find_by_email(&store, "nobody@example.com"),
            None
        );
    }

    #[test]
    fn test_find_first_match_wins() {
        let mut store = RecordStore::new();
        // Two records with the same email: the scan returns the earlier one
        let first = store.append("a", "dup@example.com");
        store.append("b", "dup@example.com");

        assert_eq!(
            FullScanEngine::find_by_email(&store, "dup@example.com"),
            Some(first)
        );
    }

    #[test]
    fn test_examined_count_matches_position() {
        let store = sample_store(100);

        let (row, examined) = FullScanEngine::count_examined(&store, "user40@example.com");
        assert!(row.is_some());
        assert_eq!(examined, 40);
    }

    #[test]
    fn test_examined_count_absent_is_whole_store() {
        let store = sample_store(100);

        let (row, examined) = FullScanEngine::count_examined(&store, "missing@example.com");
        assert_eq!(row, None);
        assert_eq!(examined, 100);
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::new();
        assert_eq!(FullScanEngine::find_by_email(&store, "any@example.com"), None);
    }
}
