//! A single multiway node: sorted items, child slots, parent link.

use crate::common::config::{MAX_CHILDREN, MAX_ITEMS};
use crate::common::NodeId;

/// One node of a 2-3-4 tree.
///
/// Holds up to [`MAX_ITEMS`] keys in sorted order and, when internal, one
/// child link per key gap. The items `Vec` never reallocates: it is created
/// with capacity `MAX_ITEMS` and capped by the split-before-descent rule.
///
/// A node knows nothing about the arena it lives in; operations that touch
/// two nodes at once (connecting a child, splitting) live on
/// [`NodeArena`](crate::NodeArena) and [`Tree234`](crate::Tree234).
#[derive(Debug)]
pub struct Node<K> {
    /// Sorted items, non-decreasing. Strictly increasing whenever keys are
    /// distinct; duplicate inserts land to the right of their equal key.
    items: Vec<K>,

    /// Child slots. For an internal node slots `0..=items.len()` are
    /// occupied and the rest are empty; a leaf has no occupied slots.
    children: [Option<NodeId>; MAX_CHILDREN],

    /// Back-reference to the parent, `None` for the root. Written only by
    /// the arena's connect_child, never directly.
    parent: Option<NodeId>,
}

impl<K: Ord> Node<K> {
    /// Create an empty, detached node.
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::with_capacity(MAX_ITEMS),
            children: [None; MAX_CHILDREN],
            parent: None,
        }
    }

    /// True iff the node has no children (first slot empty).
    pub fn is_leaf(&self) -> bool {
        self.children[0].is_none()
    }

    /// True iff the node holds [`MAX_ITEMS`] items and must split before
    /// the insertion descent may enter it.
    pub fn is_full(&self) -> bool {
        self.items.len() == MAX_ITEMS
    }

    /// Number of items currently held.
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// The items, in sorted order.
    pub fn items(&self) -> &[K] {
        &self.items
    }

    /// The child occupying `slot`, if any.
    ///
    /// # Panics
    /// Panics if `slot >= MAX_CHILDREN`.
    pub fn child(&self, slot: usize) -> Option<NodeId> {
        self.children[slot]
    }

    /// The parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Linear scan for `key`; returns the index of the first match.
    ///
    /// O(1) in practice - a node holds at most three items.
    pub fn find_item(&self, key: &K) -> Option<usize> {
        self.items.iter().position(|item| item == key)
    }

    /// Insert `key` at its sorted position, shifting greater items right.
    /// Returns the index it landed at.
    ///
    /// A duplicate is placed after the last equal item, preserving the
    /// non-decreasing order. The caller guarantees the node is not full.
    pub(crate) fn insert_item(&mut self, key: K) -> usize {
        debug_assert!(!self.is_full(), "insert_item requires spare capacity");

        let index = self
            .items
            .iter()
            .position(|item| *item > key)
            .unwrap_or(self.items.len());
        self.items.insert(index, key);
        index
    }

    /// Remove and return the highest item. Split helper only.
    pub(crate) fn remove_last_item(&mut self) -> K {
        self.items.pop().expect("remove_last_item on an empty node")
    }

    /// Raw slot write; use the arena's connect_child for linked writes.
    pub(crate) fn set_child(&mut self, slot: usize, child: Option<NodeId>) {
        self.children[slot] = child;
    }

    /// Clear `slot`, returning its occupant.
    pub(crate) fn take_child(&mut self, slot: usize) -> Option<NodeId> {
        self.children[slot].take()
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }
}
