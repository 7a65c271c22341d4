//! Append-only record storage.
//!
//! The [`RecordStore`] is the single owner of all [`Record`] data. Records
//! are appended once at population time and immutable afterwards; the
//! index and the scan engine only ever hand out [`crate::RowId`] handles
//! that resolve back into this store.

mod record;
mod record_store;

pub use record::Record;
pub use record_store::{RecordStore, Scan};
