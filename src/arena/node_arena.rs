//! The node arena - Vec-backed storage for every node in a tree.

use crate::common::{Error, NodeId, Result};
use crate::tree::Node;

/// Owns every node of a tree in a single `Vec`, indexed by [`NodeId`].
///
/// Nodes are allocated during insertion (new leaves, new right siblings, new
/// roots) and never freed individually: a split re-homes children between
/// nodes but keeps everything reachable, and the whole arena drops with the
/// tree. This sidesteps lifetime hazards entirely - the parent back-reference
/// is just an index, not an owning pointer.
///
/// Child linkage goes through [`connect_child`](NodeArena::connect_child) /
/// [`disconnect_child`](NodeArena::disconnect_child) rather than raw slot
/// writes, so a child's `parent` field is updated in the same step that a
/// parent's child slot is.
pub struct NodeArena<K> {
    /// All nodes, in allocation order. `NodeId(i)` is `nodes[i]`.
    nodes: Vec<Node<K>>,
}

impl<K: Ord> NodeArena<K> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a node to the arena, returning its id.
    pub(crate) fn alloc(&mut self, node: Node<K>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Borrow a node. Internal callers only hold ids produced by `alloc`,
    /// so direct indexing is safe here.
    pub(crate) fn node(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.0]
    }

    /// Mutably borrow a node.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        &mut self.nodes[id.0]
    }

    /// Borrow a node, validating the id.
    ///
    /// This is the checked variant for ids that cross the crate boundary
    /// (diagnostics, tests walking the structure by hand).
    ///
    /// # Errors
    /// - `Error::NodeOutOfBounds` if the id does not refer to a node
    pub fn try_node(&self, id: NodeId) -> Result<&Node<K>> {
        self.nodes.get(id.0).ok_or(Error::NodeOutOfBounds(id.0))
    }

    /// Number of nodes allocated.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attach `child` at `slot` of `parent` and point the child's parent
    /// back-reference at `parent`.
    ///
    /// Both sides of the link are written together; this is the only place
    /// the `parent` field is set, which keeps back-references consistent by
    /// construction.
    pub(crate) fn connect_child(&mut self, parent: NodeId, slot: usize, child: NodeId) {
        self.nodes[parent.0].set_child(slot, Some(child));
        self.nodes[child.0].set_parent(Some(parent));
    }

    /// Detach and return whatever occupies `slot` of `parent`.
    ///
    /// The child is not destroyed - it stays in the arena, and linkage
    /// responsibility moves to the caller. Every disconnect in this crate is
    /// followed by a reconnect (re-homing children during a split or opening
    /// a slot in the parent), so the child's stale `parent` field is always
    /// rewritten before the operation completes.
    pub(crate) fn disconnect_child(&mut self, parent: NodeId, slot: usize) -> Option<NodeId> {
        self.nodes[parent.0].take_child(slot)
    }
}

impl<K: Ord> Default for NodeArena<K> {
    fn default() -> Self {
        Self::new()
    }
}
