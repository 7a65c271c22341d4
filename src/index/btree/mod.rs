//! B-tree index implementation.
//!
//! The [`BTreeIndex`] maps an indexed key to a [`RowId`] through a balanced
//! multiway tree. All nodes live in an arena owned by the tree and refer to
//! each other by [`NodeId`] handle, never by pointer.

mod node;

pub use node::{Node, NodeId};

use std::borrow::Borrow;

use crate::common::config::{DEFAULT_ORDER, MIN_ORDER};
use crate::common::{Error, Result, RowId};

/// A balanced ordered index from key to [`RowId`].
///
/// # Architecture
/// ```text
/// ┌────────────────────────────────────────────────────────────┐
/// │                     BTreeIndex (order t)                   │
/// │  ┌───────────────────────────────────────────────────┐    │
/// │  │            nodes: Vec<Node<K>>  (arena)            │    │
/// │  │  [Node0] [Node1] [Node2] [Node3] ...               │    │
/// │  └───────────────────────────────────────────────────┘    │
/// │        root ──▶ Internal { keys, children: [NodeId] }      │
/// │                       ↓              ↓                     │
/// │                 Leaf {keys,values}  Leaf {keys,values}     │
/// └────────────────────────────────────────────────────────────┘
/// ```
///
/// # Invariants
/// After every public operation completes:
/// 1. Keys within a node are strictly sorted and unique.
/// 2. Separator `keys[i]` of an internal node divides `children[i]`
///    (strictly smaller) from `children[i+1]` (greater or equal).
/// 3. Every leaf sits at the same depth.
/// 4. Every non-root node holds between `order − 1` and `2·order − 1` keys;
///    the root may hold fewer.
/// 5. `size` equals the number of entries stored across all leaves.
///
/// [`check_invariants`](Self::check_invariants) walks the whole tree and
/// panics on any violation; tests lean on it heavily.
///
/// # Thread Safety
/// `BTreeIndex` is **single-threaded**: `&self` for reads, `&mut self` for
/// mutation, no interior mutability. Concurrent readers need external
/// synchronization.
pub struct BTreeIndex<K> {
    /// Arena holding every node; grows as the tree grows, never shrinks.
    nodes: Vec<Node<K>>,

    /// Handle of the root node.
    root: NodeId,

    /// Branching factor, fixed at construction. A node splits when it
    /// reaches `2·order − 1` keys.
    order: usize,

    /// Number of (key, value) entries stored in all leaves.
    size: usize,
}

impl<K> BTreeIndex<K> {
    /// Create an empty index with the given order.
    ///
    /// The empty tree is a single leaf root with zero keys.
    ///
    /// # Panics
    /// Panics if `order < MIN_ORDER`.
    pub fn new(order: usize) -> Self {
        assert!(order >= MIN_ORDER, "order must be at least {}", MIN_ORDER);

        Self {
            nodes: vec![Node::empty_leaf()],
            root: NodeId::new(0),
            order,
            size: 0,
        }
    }

    /// Create an empty index with [`DEFAULT_ORDER`].
    pub fn with_default_order() -> Self {
        Self::new(DEFAULT_ORDER)
    }

    /// Number of entries in the index.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The branching factor this tree was built with.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of nodes on any root-to-leaf path.
    ///
    /// All leaves share one depth, so following the leftmost spine is
    /// enough. An empty tree has height 1 (the root leaf).
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node_id = self.root;
        while let Node::Internal { children, .. } = &self.nodes[node_id.0] {
            height += 1;
            node_id = children[0];
        }
        height
    }

    /// All entries in ascending key order.
    ///
    /// Walks leaves left to right; separator keys in internal nodes are
    /// routing copies, not entries, so only leaf contents appear.
    pub fn entries_in_order(&self) -> Vec<(&K, RowId)> {
        let mut out = Vec::with_capacity(self.size);
        self.collect_entries(self.root, &mut out);
        out
    }

    fn collect_entries<'a>(&'a self, node_id: NodeId, out: &mut Vec<(&'a K, RowId)>) {
        match &self.nodes[node_id.0] {
            Node::Leaf { keys, values } => {
                out.extend(keys.iter().zip(values.iter().copied()));
            }
            Node::Internal { children, .. } => {
                for &child in children {
                    self.collect_entries(child, out);
                }
            }
        }
    }

    /// Threshold at which a node must split.
    #[inline]
    fn max_keys(&self) -> usize {
        2 * self.order - 1
    }

    /// Add a node to the arena, returning its handle.
    fn alloc(&mut self, node: Node<K>) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        node_id
    }
}

impl<K: Ord> BTreeIndex<K> {
    /// Look up the value stored under `key`.
    ///
    /// Descends from the root, binary-searching each node's key list. At an
    /// internal node a separator equal to the probe routes right
    /// (`children[i+1]`), matching where insertion placed it. Returns `None`
    /// for an absent key - absence is a normal outcome, not an error.
    ///
    /// Cost: O(log N) - tree height × log(order) comparisons per node.
    pub fn search<Q>(&self, key: &Q) -> Option<RowId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node_id = self.root;
        loop {
            match &self.nodes[node_id.0] {
                Node::Leaf { keys, values } => {
                    return keys
                        .binary_search_by(|k| k.borrow().cmp(key))
                        .ok()
                        .map(|pos| values[pos]);
                }
                Node::Internal { keys, children } => {
                    let pos = match keys.binary_search_by(|k| k.borrow().cmp(key)) {
                        Ok(pos) => pos + 1, // equal separators route right
                        Err(pos) => pos,
                    };
                    node_id = children[pos];
                }
            }
        }
    }

    /// Walk the whole tree and panic on any violated invariant.
    ///
    /// A failure here means a bug in split or descent logic, not a runtime
    /// condition to recover from. Intended for tests and debugging; cost is
    /// O(N), so production paths never call it.
    pub fn check_invariants(&self) {
        let mut leaf_depths = Vec::new();
        let mut entries = 0;
        self.check_node(self.root, 1, None, None, &mut leaf_depths, &mut entries);

        assert!(
            leaf_depths.windows(2).all(|w| w[0] == w[1]),
            "leaves at unequal depths: {:?}",
            leaf_depths
        );
        assert_eq!(entries, self.size, "size does not match stored entries");
    }

    fn check_node(
        &self,
        node_id: NodeId,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
        leaf_depths: &mut Vec<usize>,
        entries: &mut usize,
    ) {
        let node = &self.nodes[node_id.0];
        let keys = node.keys();

        assert!(
            keys.windows(2).all(|w| w[0] < w[1]),
            "{}: keys not strictly sorted",
            node_id
        );
        assert!(keys.len() <= self.max_keys(), "{}: node overfull", node_id);
        if node_id != self.root {
            assert!(
                keys.len() >= self.order - 1,
                "{}: non-root node underfull",
                node_id
            );
        }

        // Range discipline inherited from ancestors: lower ≤ key < upper.
        // The lower bound is inclusive because equal keys route right.
        for key in keys {
            if let Some(lo) = lower {
                assert!(key >= lo, "{}: key below subtree range", node_id);
            }
            if let Some(hi) = upper {
                assert!(key < hi, "{}: key above subtree range", node_id);
            }
        }

        match node {
            Node::Leaf { keys, values } => {
                assert_eq!(
                    keys.len(),
                    values.len(),
                    "{}: leaf keys/values out of step",
                    node_id
                );
                leaf_depths.push(depth);
                *entries += keys.len();
            }
            Node::Internal { keys, children } => {
                assert!(!keys.is_empty(), "{}: internal node with no separator", node_id);
                assert_eq!(
                    children.len(),
                    keys.len() + 1,
                    "{}: child count must be key count + 1",
                    node_id
                );
                for (pos, &child) in children.iter().enumerate() {
                    let lo = if pos == 0 { lower } else { Some(&keys[pos - 1]) };
                    let hi = if pos == keys.len() { upper } else { Some(&keys[pos]) };
                    self.check_node(child, depth + 1, lo, hi, leaf_depths, entries);
                }
            }
        }
    }
}

impl<K: Ord + Clone> BTreeIndex<K> {
    /// Insert a `key` → `value` entry.
    ///
    /// Descends to the leaf whose range contains `key`, inserts at the
    /// sorted position, and splits any node that reaches `2·order − 1` keys
    /// on the way back up. If the split propagates all the way to the root,
    /// a new root with one separator and two children is created - the only
    /// path by which tree height grows, which is what keeps all leaves at
    /// equal depth.
    ///
    /// # Errors
    /// Returns `Error::DuplicateKey` if `key` is already present. The index
    /// keeps a one-to-one key → row mapping, so duplicates are rejected
    /// rather than overwritten; `size()` is unchanged on rejection.
    pub fn insert(&mut self, key: K, value: RowId) -> Result<()> {
        if let Some((separator, new_right)) = self.insert_into(self.root, key, value)? {
            // Root split: the old root and its new sibling become the two
            // children of a fresh one-key root.
            let old_root = self.root;
            self.root = self.alloc(Node::Internal {
                keys: vec![separator],
                children: vec![old_root, new_right],
            });
        }
        self.size += 1;
        Ok(())
    }

    /// Recursive insertion step.
    ///
    /// Returns `Some((separator, new_right))` when `node_id` split and its
    /// parent must absorb the promoted separator, `None` otherwise.
    fn insert_into(
        &mut self,
        node_id: NodeId,
        key: K,
        value: RowId,
    ) -> Result<Option<(K, NodeId)>> {
        let max_keys = self.max_keys();

        if self.nodes[node_id.0].is_leaf() {
            let full = {
                let Node::Leaf { keys, values } = &mut self.nodes[node_id.0] else {
                    unreachable!()
                };
                let pos = match keys.binary_search(&key) {
                    Ok(_) => return Err(Error::DuplicateKey),
                    Err(pos) => pos,
                };
                keys.insert(pos, key);
                values.insert(pos, value);
                keys.len() == max_keys
            };
            return Ok(if full {
                Some(self.split_leaf(node_id))
            } else {
                None
            });
        }

        // Internal: route to the child whose range contains the key.
        let (child_id, child_pos) = {
            let Node::Internal { keys, children } = &self.nodes[node_id.0] else {
                unreachable!()
            };
            let pos = match keys.binary_search(&key) {
                Ok(pos) => pos + 1, // equal separators route right
                Err(pos) => pos,
            };
            (children[pos], pos)
        };

        let Some((separator, new_right)) = self.insert_into(child_id, key, value)? else {
            return Ok(None);
        };

        // The child split: take the promoted separator, with the new
        // sibling as the child to its right.
        let full = {
            let Node::Internal { keys, children } = &mut self.nodes[node_id.0] else {
                unreachable!()
            };
            keys.insert(child_pos, separator);
            children.insert(child_pos + 1, new_right);
            keys.len() == max_keys
        };
        Ok(if full {
            Some(self.split_internal(node_id))
        } else {
            None
        })
    }

    /// Split a full leaf in two, returning the separator to promote and the
    /// new right sibling.
    ///
    /// Leaves keep their own keys: the separator is a *copy* of the right
    /// half's first key, so every entry stays in exactly one leaf.
    fn split_leaf(&mut self, node_id: NodeId) -> (K, NodeId) {
        let (separator, right_keys, right_values) = {
            let Node::Leaf { keys, values } = &mut self.nodes[node_id.0] else {
                unreachable!()
            };
            let mid = keys.len() / 2;
            let right_keys = keys.split_off(mid);
            let right_values = values.split_off(mid);
            (right_keys[0].clone(), right_keys, right_values)
        };

        let right = self.alloc(Node::Leaf {
            keys: right_keys,
            values: right_values,
        });
        (separator, right)
    }

    /// Split a full internal node in two.
    ///
    /// Unlike a leaf split, the middle key is *removed* and promoted -
    /// internal nodes store only separators, so the key must not remain in
    /// either half.
    fn split_internal(&mut self, node_id: NodeId) -> (K, NodeId) {
        let (separator, right_keys, right_children) = {
            let Node::Internal { keys, children } = &mut self.nodes[node_id.0] else {
                unreachable!()
            };
            let mid = keys.len() / 2;
            let right_keys = keys.split_off(mid + 1);
            let right_children = children.split_off(mid + 1);
            let separator = keys.remove(mid);
            (separator, right_keys, right_children)
        };

        let right = self.alloc(Node::Internal {
            keys: right_keys,
            children: right_children,
        });
        (separator, right)
    }
}
