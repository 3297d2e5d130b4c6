//! The 2-3-4 tree: top-down insertion with preemptive splitting, and lookup.

use std::sync::atomic::Ordering;

use crate::arena::NodeArena;
use crate::common::{NodeId, Result};
use crate::tree::{Node, TreeStats};

/// Where a key was found: the node holding it and the item index within
/// that node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemLocation {
    pub node: NodeId,
    pub index: usize,
}

/// A balanced multiway search tree where every node holds 1-3 sorted items
/// and every internal node has one more child than it has items.
///
/// # Algorithm
/// `insert` makes a single top-down pass: any full node met on the way down
/// is split *before* the descent enters it, so the split's promoted middle
/// item always finds room in the (necessarily non-full) parent, and the leaf
/// finally reached always has a free item slot. No backtracking, no post-hoc
/// rebalancing - all leaves stay at the same depth by construction.
///
/// The root is a single replaceable slot: when the root itself splits, a
/// fresh node is allocated above it and the slot is reassigned. That is the
/// only way the tree grows in height.
///
/// # Duplicates
/// Duplicate keys are accepted and stored as separate entries; `find`
/// returns the first match on the descent path. There is no deletion.
///
/// # Thread Safety
/// None - `insert` takes `&mut self` and the tree defines no locking
/// discipline. Callers needing shared access must serialize externally.
/// The stats counters are atomic only so `find(&self)` can count through a
/// shared reference.
///
/// # Usage
/// ```
/// use tree234::Tree234;
///
/// let mut tree = Tree234::new();
/// tree.insert(70);
/// tree.insert(50);
/// tree.insert(30);
///
/// let loc = tree.find(&50).unwrap();
/// assert_eq!(tree.node(loc.node).unwrap().items()[loc.index], 50);
/// ```
pub struct Tree234<K> {
    /// Owns every node; all links are indices into it.
    pub(crate) arena: NodeArena<K>,

    /// The root node. Reassigned only when the root splits.
    pub(crate) root: NodeId,

    /// Total number of items stored (duplicates counted separately).
    len: usize,

    /// Operation counters.
    stats: TreeStats,
}

impl<K: Ord> Tree234<K> {
    /// Create an empty tree.
    ///
    /// The root node exists from the start (holding zero items) so every
    /// traversal loop has somewhere to begin; it is the only node ever
    /// allowed below one item.
    pub fn new() -> Self {
        let mut arena = NodeArena::new();
        let root = arena.alloc(Node::new());

        Self {
            arena,
            root,
            len: 0,
            stats: TreeStats::new(),
        }
    }

    // ========================================================================
    // Public API: Insert
    // ========================================================================

    /// Insert `key`. Always succeeds; capacity is unbounded by splitting.
    ///
    /// Descends from the root, splitting every full node before stepping
    /// into it. The leaf reached at the bottom is guaranteed non-full (it
    /// would have been split on the way down otherwise), so the item insert
    /// itself cannot overflow.
    pub fn insert(&mut self, key: K) {
        self.stats.inserts.fetch_add(1, Ordering::Relaxed);

        let mut node_id = self.root;
        loop {
            if self.arena.node(node_id).is_full() {
                // Preemptive split: resume the descent from the parent the
                // promoted item landed in, re-choosing between the split
                // halves (and any other sibling the key now belongs under).
                let parent_id = self.split(node_id);
                node_id = self.next_child(parent_id, &key);
            } else if self.arena.node(node_id).is_leaf() {
                break;
            } else {
                node_id = self.next_child(node_id, &key);
            }
        }

        self.arena.node_mut(node_id).insert_item(key);
        self.len += 1;
    }

    // ========================================================================
    // Public API: Lookup
    // ========================================================================

    /// Search for `key`, returning the node and item index of the first
    /// match, or `None` if no node on the descent path holds it.
    ///
    /// O(log n): one node per level, at most three comparisons per node.
    pub fn find(&self, key: &K) -> Option<ItemLocation> {
        self.stats.finds.fetch_add(1, Ordering::Relaxed);

        let mut node_id = self.root;
        loop {
            let node = self.arena.node(node_id);

            if let Some(index) = node.find_item(key) {
                self.stats.found.fetch_add(1, Ordering::Relaxed);
                return Some(ItemLocation {
                    node: node_id,
                    index,
                });
            }

            if node.is_leaf() {
                // Nowhere further to descend; the search has failed.
                return None;
            }

            node_id = self.next_child(node_id, key);
        }
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    // ========================================================================
    // Public API: Inspection
    // ========================================================================

    /// Number of items stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree as the number of edges from root to leaf.
    ///
    /// A single-node tree has height 0. All leaves sit at this depth.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut node = self.arena.node(self.root);
        while let Some(child) = node.child(0) {
            height += 1;
            node = self.arena.node(child);
        }
        height
    }

    /// The root node's id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Borrow a node by id, validating the id.
    ///
    /// # Errors
    /// - `Error::NodeOutOfBounds` if `id` does not refer to a node
    pub fn node(&self, id: NodeId) -> Result<&Node<K>> {
        self.arena.try_node(id)
    }

    /// Number of nodes allocated in the arena.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Operation counters.
    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }

    // ========================================================================
    // Internal: Descent
    // ========================================================================

    /// Choose the child to descend into while looking for `key`: the child
    /// preceding the first item greater than `key`, or the rightmost child
    /// when no item exceeds it.
    ///
    /// Only called on internal nodes, whose slots `0..=num_items` are all
    /// occupied.
    fn next_child(&self, node_id: NodeId, key: &K) -> NodeId {
        let node = self.arena.node(node_id);
        let slot = node
            .items()
            .iter()
            .position(|item| key < item)
            .unwrap_or(node.num_items());

        node.child(slot)
            .expect("internal node has a child in every gap slot")
    }

    // ========================================================================
    // Internal: Split
    // ========================================================================

    /// Split the full node `node_id` into itself plus a new right sibling,
    /// promoting the middle item one level up. Returns the node the promoted
    /// item landed in, where the insertion descent resumes.
    ///
    /// Given items `[A, B, C]` and (if internal) children `[c0, c1, c2, c3]`:
    /// the node keeps `A`, `c0`, `c1`; the new sibling takes `C`, `c2`, `c3`;
    /// `B` moves to the parent. When the node *is* the root, a brand-new
    /// root is allocated to receive `B` - the only height increase.
    ///
    /// The parent always has room for `B`: it was split itself on this same
    /// descent if it was full.
    fn split(&mut self, node_id: NodeId) -> NodeId {
        self.stats.splits.fetch_add(1, Ordering::Relaxed);

        // Pop the two highest items: C first, then B.
        let item_right = self.arena.node_mut(node_id).remove_last_item();
        let item_middle = self.arena.node_mut(node_id).remove_last_item();

        // Detach the two rightmost children (absent when splitting a leaf).
        let third_child = self.arena.disconnect_child(node_id, 2);
        let fourth_child = self.arena.disconnect_child(node_id, 3);

        // The new right sibling takes C and the detached children.
        let right_id = self.arena.alloc(Node::new());
        self.arena.node_mut(right_id).insert_item(item_right);
        if let Some(child) = third_child {
            self.arena.connect_child(right_id, 0, child);
        }
        if let Some(child) = fourth_child {
            self.arena.connect_child(right_id, 1, child);
        }

        if node_id == self.root {
            // Root split: allocate a new root above, holding only B.
            self.stats.root_splits.fetch_add(1, Ordering::Relaxed);

            let new_root = self.arena.alloc(Node::new());
            self.arena.node_mut(new_root).insert_item(item_middle);
            self.arena.connect_child(new_root, 0, node_id);
            self.arena.connect_child(new_root, 1, right_id);
            self.root = new_root;

            new_root
        } else {
            let parent_id = self
                .arena
                .node(node_id)
                .parent()
                .expect("non-root node has a parent");

            // Promote B into the parent, then shift the parent's children
            // above the promotion index one slot right to open a slot for
            // the new sibling. The split node stays in its original slot.
            let item_index = self.arena.node_mut(parent_id).insert_item(item_middle);
            let num_items = self.arena.node(parent_id).num_items();
            for slot in ((item_index + 1)..num_items).rev() {
                if let Some(moved) = self.arena.disconnect_child(parent_id, slot) {
                    self.arena.connect_child(parent_id, slot + 1, moved);
                }
            }
            self.arena.connect_child(parent_id, item_index + 1, right_id);

            parent_id
        }
    }
}

impl<K: Ord> Default for Tree234<K> {
    fn default() -> Self {
        Self::new()
    }
}
