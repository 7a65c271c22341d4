//! The comparison report produced by a harness run.

use std::fmt;

use crate::common::RowId;

/// Outcome of running one lookup through both search paths.
///
/// Plain copyable data - safe to print, compare, or collect. The excluded
/// reporting layer decides the final formatting; the `Display` impl here is
/// a convenience one-liner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// Number of records in the store when the lookup ran.
    pub user_count: usize,

    /// Whether the target email exists in the populated set.
    pub target_found: bool,

    /// Row found by the full scan, if any.
    pub scan_result: Option<RowId>,

    /// Row found by the index, if any. Always equals `scan_result`;
    /// `compare` asserts the agreement before constructing the report.
    pub index_result: Option<RowId>,

    /// Elapsed wall time of the full scan, in nanoseconds.
    pub scan_cost_nanos: u128,

    /// Elapsed wall time of the index search, in nanoseconds.
    pub index_cost_nanos: u128,
}

impl Comparison {
    /// How many times faster the index was than the scan.
    ///
    /// Returns 0.0 when the index cost measured as zero (sub-resolution
    /// timer reading) to avoid a nonsense ratio.
    pub fn speedup(&self) -> f64 {
        if self.index_cost_nanos == 0 {
            0.0
        } else {
            self.scan_cost_nanos as f64 / self.index_cost_nanos as f64
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Comparison {{ rows: {}, found: {}, scan: {}ns, index: {}ns, speedup: {:.1}x }}",
            self.user_count,
            self.target_found,
            self.scan_cost_nanos,
            self.index_cost_nanos,
            self.speedup()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Comparison {
        Comparison {
            user_count: 1000,
            target_found: true,
            scan_result: Some(RowId::new(499)),
            index_result: Some(RowId::new(499)),
            scan_cost_nanos: 50_000,
            index_cost_nanos: 500,
        }
    }

    #[test]
    fn test_speedup() {
        assert_eq!(sample().speedup(), 100.0);
    }

    #[test]
    fn test_speedup_zero_index_cost() {
        let mut report = sample();
        report.index_cost_nanos = 0;
        assert_eq!(report.speedup(), 0.0);
    }

    #[test]
    fn test_display() {
        let display = format!("{}", sample());
        assert!(display.contains("rows: 1000"));
        assert!(display.contains("found: true"));
        assert!(display.contains("speedup: 100.0x"));
    }
}
