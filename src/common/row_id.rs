//! Row identifier type.

use std::fmt;

/// Identifies a record's position inside a `RecordStore`.
///
/// Using `usize` because:
/// 1. Records are stored in `Vec<Record>`
/// 2. Direct indexing without casting: `records[row_id.0]`
/// 3. Matches Rust idioms for array/vector indexing
///
/// A `RowId` is an opaque, stable handle: the store is append-only, so a
/// RowId never refers to a different record for as long as the store lives.
///
/// # Example
/// ```
/// use indexbench::RowId;
///
/// let row_id = RowId::new(5);
/// // Can use directly as index: records[row_id.0]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub usize);

impl RowId {
    /// Create a new RowId.
    #[inline]
    pub fn new(id: usize) -> Self {
        RowId(id)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row({})", self.0)
    }
}
