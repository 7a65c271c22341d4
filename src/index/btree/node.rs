//! B-tree node representation: arena handles and the tagged node variant.

use std::fmt;

use crate::common::RowId;

/// Identifies a node in the tree's arena.
///
/// Using `usize` because:
/// 1. Nodes are stored in `Vec<Node<K>>`
/// 2. Direct indexing without casting: `nodes[node_id.0]`
/// 3. Matches Rust idioms for array/vector indexing
///
/// Parent-to-child links are `NodeId` values only - never references, never
/// back-pointers - so the tree has no cycles and no dangling-reference risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Create a new NodeId.
    #[inline]
    pub fn new(id: usize) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// A single B-tree node.
///
/// Node kind is a tagged variant rather than a trait hierarchy: all tree
/// algorithms match on the tag explicitly, which keeps split and search
/// logic uniform and avoids dynamic dispatch on the hot path.
///
/// - `Leaf` holds the actual entries: `keys` and `values` are parallel
///   vectors (`values[i]` belongs to `keys[i]`).
/// - `Internal` holds only separator keys and child handles, with
///   `children.len() == keys.len() + 1`. Separator `keys[i]` divides
///   `children[i]` (strictly smaller keys) from `children[i+1]` (keys
///   greater than or equal to it).
#[derive(Debug)]
pub enum Node<K> {
    /// Leaf node: key → RowId entries in sorted key order.
    Leaf {
        keys: Vec<K>,
        values: Vec<RowId>,
    },
    /// Internal node: separator keys and child handles.
    Internal {
        keys: Vec<K>,
        children: Vec<NodeId>,
    },
}

impl<K> Node<K> {
    /// Create an empty leaf.
    pub fn empty_leaf() -> Self {
        Node::Leaf {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of keys currently held.
    pub fn key_count(&self) -> usize {
        match self {
            Node::Leaf { keys, .. } => keys.len(),
            Node::Internal { keys, .. } => keys.len(),
        }
    }

    /// The node's keys, regardless of kind.
    pub fn keys(&self) -> &[K] {
        match self {
            Node::Leaf { keys, .. } => keys,
            Node::Internal { keys, .. } => keys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_new() {
        let nid = NodeId::new(3);
        assert_eq!(nid.0, 3);
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(format!("{}", NodeId::new(42)), "Node(42)");
    }

    #[test]
    fn test_empty_leaf() {
        let node: Node<i32> = Node::empty_leaf();
        assert!(node.is_leaf());
        assert_eq!(node.key_count(), 0);
        assert!(node.keys().is_empty());
    }

    #[test]
    fn test_internal_is_not_leaf() {
        let node: Node<i32> = Node::Internal {
            keys: vec![10],
            children: vec![NodeId::new(0), NodeId::new(1)],
        };
        assert!(!node.is_leaf());
        assert_eq!(node.key_count(), 1);
        assert_eq!(node.keys(), &[10]);
    }
}
