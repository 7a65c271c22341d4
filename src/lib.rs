//! IndexBench - a record store with a B-tree index and a full-scan baseline.
//!
//! The crate exists to demonstrate, with a real implementation instead of a
//! borrowed database engine, why indexed lookup beats scanning: the same
//! query runs once as an O(N) linear scan and once as an O(log N) B-tree
//! descent, against the same data.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        IndexBench                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │            Benchmark Harness (bench/)                │   │
//! │  │      populate → compare → Comparison report          │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! │                 ↓                        ↓                  │
//! │  ┌──────────────────────────┐  ┌─────────────────────┐     │
//! │  │  Full Scan (scan/)       │  │  B-tree (index/)    │     │
//! │  │  O(N) linear baseline    │  │  O(log N) ordered   │     │
//! │  │  no auxiliary structure  │  │  key → RowId map    │     │
//! │  └──────────────────────────┘  └─────────────────────┘     │
//! │                 ↓                        ↓                  │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │              Record Store (store/)                   │   │
//! │  │     append-only Vec<Record>, addressed by RowId      │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (RowId, Error, config)
//! - [`store`] - Append-only record storage
//! - [`scan`] - Linear full-scan search engine
//! - [`index`] - B-tree index structure
//! - [`bench`] - Population and comparison harness
//!
//! # Quick Start
//! ```
//! use indexbench::bench::{compare, populate};
//!
//! let pop = populate(1_000).unwrap();
//! let report = compare(&pop.store, &pop.index, "user500@example.com");
//! assert!(report.target_found);
//! println!("{}", report);
//! ```

// Core modules
pub mod bench;
pub mod common;
pub mod index;
pub mod scan;
pub mod store;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_ORDER, MIN_ORDER};
pub use common::{Error, Result, RowId};

pub use bench::{compare, populate, Comparison, Population};
pub use index::BTreeIndex;
pub use scan::FullScanEngine;
pub use store::{Record, RecordStore};
