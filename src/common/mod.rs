//! Common types and utilities shared across IndexBench.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - The `RowId` record handle

pub mod config;
pub mod error;
mod row_id;

pub use error::{Error, Result};
pub use row_id::RowId;
