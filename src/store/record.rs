//! The fixed-shape record stored by the record store.

use std::fmt;

/// A single user record.
///
/// Created once by [`crate::RecordStore::append`] and immutable thereafter.
/// The `id` is assigned by the store (starting at 1) and is unique and
/// stable for the lifetime of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Unique, stable identifier assigned at append time.
    pub id: u64,

    /// Display name.
    pub name: String,

    /// Email address - the column the B-tree indexes.
    pub email: String,
}

impl Record {
    /// Create a new record.
    ///
    /// Only the store calls this; user code receives records via
    /// [`crate::RecordStore::get`] or [`crate::RecordStore::scan`].
    pub(crate) fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record({}, {}, {})", self.id, self.name, self.email)
    }
}
