//! Configuration constants for IndexBench.

/// Smallest legal B-tree order.
///
/// With `order = 2` a node holds at most `2·2 − 1 = 3` keys and splits into
/// two one-key halves, the minimum shape in which split logic is exercised
/// at all. Anything smaller cannot satisfy the occupancy invariant
/// (`order − 1` keys per non-root node).
pub const MIN_ORDER: usize = 2;

/// Default B-tree order used when the caller has no opinion.
///
/// This value is chosen to keep nodes cache-friendly:
/// - Max `2·16 − 1 = 31` keys per node
/// - A million entries fit in a tree of height 4-5
/// - Small enough that tests still produce multi-level trees quickly
pub const DEFAULT_ORDER: usize = 16;

/// Domain used when synthesizing benchmark emails (`"user{i}@example.com"`).
pub const EMAIL_DOMAIN: &str = "example.com";
