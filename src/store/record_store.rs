//! Record Store - the append-only collection all lookups resolve into.

use crate::common::{Error, Result, RowId};
use crate::store::Record;

/// An append-only, in-memory collection of records.
///
/// # Layout
/// Records live in a plain `Vec<Record>` in insertion order; a [`RowId`] is
/// the record's index into that vector:
/// ```text
/// ┌──────────┬──────────┬──────────┬─────┬──────────┐
/// │ Record 0 │ Record 1 │ Record 2 │ ... │ Record N │
/// └──────────┴──────────┴──────────┴─────┴──────────┘
///   Row(0)     Row(1)     Row(2)           Row(N)
/// ```
/// Because the store never deletes or reorders, a RowId issued by `append`
/// refers to the same record for the store's whole lifetime.
///
/// # Thread Safety
/// `RecordStore` is **single-threaded**. Callers needing concurrent readers
/// must wrap it in their own synchronization.
pub struct RecordStore {
    /// All records, in insertion order.
    records: Vec<Record>,

    /// Next `Record::id` to assign (ids start at 1).
    next_id: u64,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Create an empty store with room for `capacity` records.
    ///
    /// The harness knows its population size up front, so it can avoid
    /// reallocation during the build it is about to time.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            next_id: 1,
        }
    }

    /// Append a record, assigning it the next unique id.
    ///
    /// Returns the [`RowId`] under which the record is reachable.
    /// O(1) amortized.
    pub fn append(&mut self, name: impl Into<String>, email: impl Into<String>) -> RowId {
        let row_id = RowId::new(self.records.len());
        self.records.push(Record::new(self.next_id, name, email));
        self.next_id += 1;
        row_id
    }

    /// Look up a record by its handle.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` if `row_id` was never issued by this
    /// store. That is a caller bug, not a normal runtime condition.
    pub fn get(&self, row_id: RowId) -> Result<&Record> {
        self.records
            .get(row_id.0)
            .ok_or(Error::OutOfRange(row_id.0))
    }

    /// Iterate over all records in insertion order.
    ///
    /// Each call yields a fresh iterator starting from the first record, so
    /// scans are restartable. The iterator borrows the store; no copying.
    pub fn scan(&self) -> Scan<'_> {
        Scan {
            inner: self.records.iter().enumerate(),
        }
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over `(RowId, &Record)` pairs in insertion order.
///
/// Produced by [`RecordStore::scan`].
pub struct Scan<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Record>>,
}

impl<'a> Iterator for Scan<'a> {
    type Item = (RowId, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(idx, record)| (RowId::new(idx), record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Scan<'_> {}
