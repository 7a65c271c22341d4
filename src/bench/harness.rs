//! Population and comparison orchestration.

use std::time::Instant;

use crate::bench::Comparison;
use crate::common::config::EMAIL_DOMAIN;
use crate::common::Result;
use crate::index::BTreeIndex;
use crate::scan::FullScanEngine;
use crate::store::RecordStore;

/// A populated store with its email index.
///
/// Built once by [`populate`], then queried read-only.
pub struct Population {
    /// The record store, `user_count` records in ascending id order.
    pub store: RecordStore,

    /// B-tree over the email column, mapping each email to its row.
    pub index: BTreeIndex<String>,

    /// Wall time spent inserting all keys into the index, in nanoseconds.
    /// Measured separately from record appends so the number is the cost of
    /// maintaining the index, not of storing the data.
    pub build_nanos: u128,
}

/// Deterministic name for row `i`.
///
/// Pure function of `i` - repeated populations produce identical data, so
/// exact-match tests need no randomness.
pub fn synthesize_name(i: u64) -> String {
    format!("user{}", i)
}

/// Deterministic email for row `i`: `"user{i}@example.com"`.
pub fn synthesize_email(i: u64) -> String {
    format!("user{}@{}", i, EMAIL_DOMAIN)
}

/// Build a store of `user_count` records and index every email.
///
/// Records are appended for `i` in `1..=user_count`, so record ids line up
/// with `i` and keys arrive in ascending order - deliberately the worst
/// case for naive unbalanced trees and the workload the split logic must
/// absorb (repeated right-edge growth).
///
/// # Errors
/// Propagates `Error::DuplicateKey` from the index; synthesized emails are
/// unique, so an error here means a harness bug.
pub fn populate(user_count: u64) -> Result<Population> {
    let mut store = RecordStore::with_capacity(user_count as usize);
    let mut rows = Vec::with_capacity(user_count as usize);
    for i in 1..=user_count {
        let email = synthesize_email(i);
        let row = store.append(synthesize_name(i), email.clone());
        rows.push((email, row));
    }

    let mut index = BTreeIndex::with_default_order();
    let build_start = Instant::now();
    for (email, row) in rows {
        index.insert(email, row)?;
    }
    let build_nanos = build_start.elapsed().as_nanos();

    Ok(Population {
        store,
        index,
        build_nanos,
    })
}

/// Run the same lookup through both search paths and time each.
///
/// The agreement assertion is a correctness check, not a side effect: the
/// two paths must resolve to the same row (or both report absence), or one
/// of them is broken.
///
/// # Panics
/// Panics if the full scan and the index disagree on presence or identity
/// of the matched row.
pub fn compare(
    store: &RecordStore,
    index: &BTreeIndex<String>,
    target_email: &str,
) -> Comparison {
    let scan_start = Instant::now();
    let scan_result = FullScanEngine::find_by_email(store, target_email);
    let scan_cost_nanos = scan_start.elapsed().as_nanos();

    let index_start = Instant::now();
    let index_result = index.search(target_email);
    let index_cost_nanos = index_start.elapsed().as_nanos();

    assert_eq!(
        scan_result, index_result,
        "scan and index disagree for {:?}",
        target_email
    );

    Comparison {
        user_count: store.len(),
        target_found: scan_result.is_some(),
        scan_result,
        index_result,
        scan_cost_nanos,
        index_cost_nanos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesis_is_deterministic() {
        assert_eq!(synthesize_name(7), "user7");
        assert_eq!(synthesize_email(7), "user7@example.com");
        assert_eq!(synthesize_email(7), synthesize_email(7));
    }

    #[test]
    fn test_populate_counts() {
        let pop = populate(100).unwrap();
        assert_eq!(pop.store.len(), 100);
        assert_eq!(pop.index.size(), 100);
        pop.index.check_invariants();
    }

    #[test]
    fn test_populate_ids_line_up() {
        let pop = populate(50).unwrap();

        let row = pop.index.search("user23@example.com").unwrap();
        let record = pop.store.get(row).unwrap();
        assert_eq!(record.id, 23);
        assert_eq!(record.name, "user23");
    }

    #[test]
    fn test_compare_found() {
        let pop = populate(100).unwrap();

        let report = compare(&pop.store, &pop.index, "user42@example.com");
        assert!(report.target_found);
        assert_eq!(report.user_count, 100);
        assert_eq!(report.scan_result, report.index_result);
    }

    #[test]
    fn test_compare_absent_is_not_an_error() {
        let pop = populate(100).unwrap();

        let report = compare(&pop.store, &pop.index, "user101@example.com");
        assert!(!report.target_found);
        assert_eq!(report.scan_result, None);
        assert_eq!(report.index_result, None);
    }

    #[test]
    fn test_populate_zero_users() {
        let pop = populate(0).unwrap();
        assert!(pop.store.is_empty());
        assert!(pop.index.is_empty());

        let report = compare(&pop.store, &pop.index, "user1@example.com");
        assert!(!report.target_found);
    }
}
