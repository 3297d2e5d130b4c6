//! Lazy pre-order traversal for diagnostic display.

use std::fmt;

use crate::arena::NodeArena;
use crate::common::NodeId;
use crate::tree::Tree234;

/// One node seen during a [`TreeWalk`]: its depth, the child slot it
/// occupies in its parent (0 for the root), and its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeVisit<'a, K> {
    pub level: usize,
    pub child_slot: usize,
    pub keys: &'a [K],
}

/// Depth-first pre-order traversal of a tree, driven by an explicit stack
/// rather than recursion, so deep trees cannot overflow the call stack.
///
/// Read-only and finite; each [`Tree234::walk`] call starts a fresh walk.
pub struct TreeWalk<'a, K> {
    arena: &'a NodeArena<K>,
    /// Pending visits: (node, level, child slot in parent). Children are
    /// pushed right-to-left so the leftmost pops first.
    stack: Vec<(NodeId, usize, usize)>,
}

impl<'a, K: Ord> Iterator for TreeWalk<'a, K> {
    type Item = NodeVisit<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node_id, level, child_slot) = self.stack.pop()?;
        let node = self.arena.node(node_id);

        for slot in (0..=node.num_items()).rev() {
            if let Some(child) = node.child(slot) {
                self.stack.push((child, level + 1, slot));
            }
        }

        Some(NodeVisit {
            level,
            child_slot,
            keys: node.items(),
        })
    }
}

impl<K: Ord> Tree234<K> {
    /// Start a pre-order walk over the whole tree.
    ///
    /// Yields parents before children and siblings left to right:
    /// ```
    /// use tree234::Tree234;
    ///
    /// let mut tree = Tree234::new();
    /// for key in [70, 50, 30, 40] {
    ///     tree.insert(key);
    /// }
    ///
    /// let levels: Vec<usize> = tree.walk().map(|visit| visit.level).collect();
    /// assert_eq!(levels, [0, 1, 1]);
    /// ```
    pub fn walk(&self) -> TreeWalk<'_, K> {
        TreeWalk {
            arena: &self.arena,
            stack: vec![(self.root, 0, 0)],
        }
    }
}

impl<K: Ord + fmt::Display> fmt::Display for Tree234<K> {
    /// One line per node, pre-order: `L<level> C<slot> [items]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for visit in self.walk() {
            write!(f, "L{} C{} [", visit.level, visit.child_slot)?;
            for (i, key) in visit.keys.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", key)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
