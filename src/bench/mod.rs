//! Benchmark Harness - populate once, query both ways, report the costs.
//!
//! Thin orchestration over the other modules, not core logic:
//! [`populate`] builds a store and its email index from deterministic
//! synthesized data; [`compare`] runs the same lookup through the full-scan
//! engine and the B-tree and reports both costs in a [`Comparison`].

mod harness;
mod report;

pub use harness::{compare, populate, synthesize_email, synthesize_name, Population};
pub use report::Comparison;
