//! Node identifier type.

use std::fmt;

/// Identifies a node in the arena.
///
/// Using `usize` because:
/// 1. Nodes are stored in `Vec<Node<K>>`
/// 2. Direct indexing without casting: `nodes[node_id.0]`
/// 3. Matches Rust idioms for array/vector indexing
///
/// A `NodeId` is a non-owning link: the arena's `Vec` owns every node, and
/// both child slots and the parent back-reference are plain indices. This is
/// what lets a child point back at its parent without any reference cycle.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_new() {
        let nid = NodeId::new(10);
        assert_eq!(nid.0, 10);
    }

    #[test]
    fn test_node_id_equality() {
        assert_eq!(NodeId::new(5), NodeId::new(5));
        assert_ne!(NodeId::new(5), NodeId::new(6));
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(format!("{}", NodeId::new(42)), "Node(42)");
    }
}
