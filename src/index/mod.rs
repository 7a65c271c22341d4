//! Index structures.
//!
//! This module contains the [`BTreeIndex`], an ordered map from an indexed
//! key to a [`crate::RowId`], backed by a balanced multiway tree held in an
//! arena. It is the O(log N) half of the crate's comparison.

pub mod btree;

pub use btree::{BTreeIndex, Node, NodeId};
