//! Error types for IndexBench.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in IndexBench.
///
/// By having a single error type, error handling stays consistent across
/// the store, the index, and the harness. Note what is *not* here: a failed
/// lookup is an `Option::None`, never an error — absence is a normal,
/// expected outcome for both search paths.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A `RowId` was presented to a store that never issued it.
    ///
    /// This indicates a bug in the caller - valid RowIds only come from
    /// `RecordStore::append`.
    #[error("row {0} was never issued by this store")]
    OutOfRange(usize),

    /// The key being inserted is already present in the index.
    ///
    /// The index keeps a one-to-one mapping from indexed key to row, so
    /// duplicates are rejected rather than overwritten. Recoverable: the
    /// caller may skip or report it.
    #[error("duplicate key in index")]
    DuplicateKey,
}
