//! tree234 - An arena-backed 2-3-4 search tree with top-down node splitting.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                       Tree234<K>                        │
//! ├─────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────┐   │
//! │  │              Tree Layer (tree/)                  │   │
//! │  │   insert (preemptive split) · find · walk        │   │
//! │  │   TreeStats (atomic operation counters)          │   │
//! │  └─────────────────────────────────────────────────┘   │
//! │                          ↓                              │
//! │  ┌─────────────────────────────────────────────────┐   │
//! │  │              Arena Layer (arena/)                │   │
//! │  │   NodeArena: Vec<Node<K>> indexed by NodeId      │   │
//! │  │   connect/disconnect child (parent back-refs)    │   │
//! │  └─────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Every node holds 1-3 sorted items and, if internal, exactly one more child
//! than it has items. Insertion splits any full node it meets *before*
//! descending into it, so the leaf it reaches always has room and all leaves
//! stay at the same depth. The tree grows in height only when the root itself
//! splits.
//!
//! Nodes live in a single `Vec` owned by the arena; parent and child links
//! are [`NodeId`] indices, never owning pointers, so root replacement is a
//! plain slot reassignment and the whole tree drops in one shot.
//!
//! # Modules
//! - [`common`] - Shared primitives (NodeId, Error, config constants)
//! - [`arena`] - Node storage and child-link bookkeeping
//! - [`tree`] - The 2-3-4 tree itself: insert, find, display walk, stats
//!
//! # Quick Start
//! ```
//! use tree234::Tree234;
//!
//! let mut tree = Tree234::new();
//! for key in [70, 50, 30, 40] {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.contains(&40));
//! assert!(!tree.contains(&41));
//! // The fourth insert split the root: height went from 0 to 1.
//! assert_eq!(tree.height(), 1);
//! ```

pub mod arena;
pub mod common;
pub mod tree;

// Re-export commonly used items at crate root for convenience
pub use common::config::{MAX_CHILDREN, MAX_ITEMS};
pub use common::{Error, NodeId, Result};

pub use arena::NodeArena;
pub use tree::{ItemLocation, Node, NodeVisit, StatsSnapshot, Tree234, TreeStats, TreeWalk};
